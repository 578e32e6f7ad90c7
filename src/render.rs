//! Whole-document SVG assembly.
//!
//! Stitches themed pages into one fixed-size canvas. Normal mode lays the
//! pages out as a horizontal strip behind a repeating slide animation;
//! battle mode (and any single-page cycle) is fully static with opacity
//! pinned at 1.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::page::{PageCycle, PageKind, RenderMode};
use crate::snapshot::AdventurerSnapshot;
use crate::template::{self, Warning, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::theme::{self, Theme};

/// Theme used for a page of the given kind at the given cycle position.
fn theme_for_page(kind: PageKind, page_index: usize) -> Theme {
    match kind {
        PageKind::Battle => theme::battle_theme(),
        _ => theme::theme_for(page_index),
    }
}

fn document_open() -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"monospace\">",
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
    )
}

/// Render the full SVG document for a snapshot.
///
/// Deterministic: repeated calls with identical input return byte-identical
/// documents.
pub fn render_image(snapshot: &AdventurerSnapshot, config: &RenderConfig) -> String {
    render_image_with_warnings(snapshot, config).0
}

/// [`render_image`] plus the non-fatal warnings collected along the way.
pub fn render_image_with_warnings(
    snapshot: &AdventurerSnapshot,
    config: &RenderConfig,
) -> (String, Vec<Warning>) {
    let mode = RenderMode::of(snapshot, config);
    let kinds = mode.page_kinds(config);
    let cycle = PageCycle::for_config(kinds.len(), config);

    let mut warnings = Vec::new();
    let mut out = document_open();

    // Clip the strip so off-screen pages stay off-screen.
    out.push_str(&format!(
        "<defs><clipPath id=\"canvas\"><rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"/></clipPath></defs>",
        CANVAS_WIDTH, CANVAS_HEIGHT,
    ));
    out.push_str("<g clip-path=\"url(#canvas)\"><g opacity=\"1\">");

    if cycle.animates() {
        out.push_str(&format!(
            "<animateTransform attributeName=\"transform\" attributeType=\"XML\" type=\"translate\" values=\"{}\" keyTimes=\"{}\" dur=\"{}\" repeatCount=\"indefinite\"/>",
            cycle.values_attr(CANVAS_WIDTH),
            cycle.key_times_attr(),
            cycle.dur_attr(),
        ));
    }

    for (page_index, kind) in kinds.iter().enumerate() {
        let theme = theme_for_page(*kind, page_index);
        let body = template::page_body(snapshot, *kind, theme, &mut warnings);
        out.push_str(&format!(
            "<g transform=\"translate({} 0)\">{}</g>",
            cycle.offset_x(page_index, CANVAS_WIDTH),
            body,
        ));
    }

    out.push_str("</g></g></svg>");

    debug_assert!(crate::text::starts_with(&out, "<svg"));
    debug_assert!(crate::text::ends_with(&out, "</svg>"));
    (out, warnings)
}

/// Render a single page of the document as a static SVG.
///
/// The index is validated against the snapshot's current mode; out of
/// range fails rather than clamping.
pub fn render_page_image(
    snapshot: &AdventurerSnapshot,
    page_index: usize,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let (image, _) = render_page_image_with_warnings(snapshot, page_index, config)?;
    Ok(image)
}

/// [`render_page_image`] plus collected warnings.
pub fn render_page_image_with_warnings(
    snapshot: &AdventurerSnapshot,
    page_index: usize,
    config: &RenderConfig,
) -> Result<(String, Vec<Warning>), RenderError> {
    let mode = RenderMode::of(snapshot, config);
    let kinds = mode.page_kinds(config);
    let kind = *kinds.get(page_index).ok_or(RenderError::PageOutOfRange {
        index: page_index,
        pages: kinds.len(),
    })?;

    let mut warnings = Vec::new();
    let mut out = document_open();
    out.push_str(&template::page_body(
        snapshot,
        kind,
        theme_for_page(kind, page_index),
        &mut warnings,
    ));
    out.push_str("</svg>");
    Ok((out, warnings))
}
