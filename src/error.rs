//! Error types for the rendering pipeline.
//!
//! The core is total wherever feasible: unknown item ids, empty names and
//! zero vitals are valid inputs with defined outputs. The only render-time
//! failure is asking for a page that does not exist.

use thiserror::Error;

/// Error type for render failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A paginated entry point was asked for a page past the end. Out of
    /// range indices fail rather than silently clamping.
    #[error("page index {index} out of range, snapshot has {pages} page(s)")]
    PageOutOfRange { index: usize, pages: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_out_of_range_message() {
        let err = RenderError::PageOutOfRange { index: 3, pages: 2 };
        assert_eq!(
            err.to_string(),
            "page index 3 out of range, snapshot has 2 page(s)",
        );
    }
}
