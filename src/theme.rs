//! Per-page color palettes and equipment slot icon glyphs.
//!
//! Pure data. Pages cycle through a small fixed palette; the battle page
//! always uses the red theme.

use crate::catalog::Slot;

/// Colors for one rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Text and icon color.
    pub primary: &'static str,
    /// Page background fill.
    pub background: &'static str,
    /// Page frame stroke.
    pub border: &'static str,
}

const GREEN: Theme = Theme {
    primary: "#3DEC00",
    background: "#000000",
    border: "#1E7600",
};

const ORANGE: Theme = Theme {
    primary: "#FFA300",
    background: "#000000",
    border: "#8A5800",
};

const BLUE: Theme = Theme {
    primary: "#29ADFF",
    background: "#000000",
    border: "#14568C",
};

const RED: Theme = Theme {
    primary: "#FE1733",
    background: "#000000",
    border: "#8C0D1D",
};

/// The page palette cycle, in page order.
const PALETTE: [Theme; 4] = [GREEN, ORANGE, BLUE, RED];

/// Theme for a page index. Indices cycle through the palette, so any index
/// is valid; index 0 is the green theme.
pub fn theme_for(page_index: usize) -> Theme {
    PALETTE[page_index % PALETTE.len()]
}

/// Theme for the dedicated battle page.
pub fn battle_theme() -> Theme {
    RED
}

/// Icon path data for an equipment slot, drawn on a 24x24 grid.
///
/// `Slot::None` has no glyph and returns an empty path.
pub fn slot_icon(slot: Slot) -> &'static str {
    match slot {
        Slot::Weapon => "M4 20 L18 6 L20 8 L6 22 Z M16 4 L20 8 M14 6 L18 10",
        Slot::Chest => "M6 4 L18 4 L20 10 L18 22 L6 22 L4 10 Z M9 4 L12 8 L15 4",
        Slot::Head => "M5 14 A7 7 0 0 1 19 14 L19 20 L16 17 L12 21 L8 17 L5 20 Z",
        Slot::Waist => "M3 10 L21 10 L21 14 L3 14 Z M10 9 L14 9 L14 15 L10 15 Z",
        Slot::Foot => "M6 4 L12 4 L12 14 L20 14 L20 20 L6 20 Z",
        Slot::Hand => "M8 22 L8 8 M11 22 L11 6 M14 22 L14 7 M17 22 L17 9 M8 12 L5 14",
        Slot::Neck => "M6 4 A8 8 0 0 0 18 4 M12 12 L12 15 M10 18 A2 3 0 0 0 14 18 L12 15 Z",
        Slot::Ring => "M12 8 A6 6 0 1 0 12 20 A6 6 0 1 0 12 8 M9 6 L12 2 L15 6",
        Slot::None => "",
    }
}
