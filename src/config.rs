//! Render configuration.
//!
//! The normal-mode page list and cycle timing are configuration rather
//! than constants: the formulas in [`crate::page`] are generic over any
//! page count, and the CLI can load overrides from an `hcard.toml` file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::page::PageKind;

/// Configuration loading error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("failed to parse hcard.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Tunable rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RenderConfig {
    /// Pages of the normal-mode cycle, in order. The battle page is not
    /// part of the cycle; it replaces it.
    pub pages: Vec<PageKind>,
    /// How long each page is shown, in milliseconds.
    pub display_ms: u32,
    /// How long the slide to the next page takes, in milliseconds.
    pub transition_ms: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pages: vec![PageKind::Inventory, PageKind::ItemBag],
            display_ms: 4000,
            transition_ms: 1000,
        }
    }
}

impl RenderConfig {
    /// Validate the configuration, returning all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        if self.pages.is_empty() {
            errors.push("pages must list at least one page".to_string());
        }
        if self.pages.contains(&PageKind::Battle) {
            errors.push(
                "the battle page is selected by the snapshot, not configured".to_string(),
            );
        }
        if self.display_ms == 0 {
            errors.push("display-ms must be greater than zero".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<RenderConfig, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: RenderConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.pages, vec![PageKind::Inventory, PageKind::ItemBag]);
        assert_eq!(config.display_ms, 4000);
        assert_eq!(config.transition_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml_overrides() {
        let config: RenderConfig = toml::from_str(
            r#"
            pages = ["inventory", "item-bag", "inventory"]
            display-ms = 6000
            transition-ms = 1500
            "#,
        )
        .unwrap();
        assert_eq!(config.pages.len(), 3);
        assert_eq!(config.display_ms, 6000);
        assert_eq!(config.transition_ms, 1500);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RenderConfig = toml::from_str("display-ms = 2000").unwrap();
        assert_eq!(config.display_ms, 2000);
        assert_eq!(config.transition_ms, 1000);
        assert_eq!(config.pages, RenderConfig::default().pages);
    }

    #[test]
    fn test_validation_rejects_empty_pages() {
        let config = RenderConfig {
            pages: vec![],
            ..RenderConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least one page"));
    }

    #[test]
    fn test_validation_rejects_battle_page() {
        let config = RenderConfig {
            pages: vec![PageKind::Inventory, PageKind::Battle],
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hcard.toml");
        std::fs::write(&path, "pages = [\"inventory\"]\n").unwrap();

        let config = RenderConfig::load(&path).unwrap();
        assert_eq!(config.pages, vec![PageKind::Inventory]);

        std::fs::write(&path, "pages = []\n").unwrap();
        assert!(matches!(
            RenderConfig::load(&path),
            Err(ConfigError::Validation(_)),
        ));
    }
}
