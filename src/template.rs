//! SVG fragment builders.
//!
//! Every builder is a pure function of its inputs and returns a balanced
//! fragment with non-negative coordinate attributes. Output is
//! byte-identical across calls with identical input; downstream consumers
//! diff rendered documents to detect stat changes.

use crate::catalog::{self, Slot};
use crate::codec::U256;
use crate::page::PageKind;
use crate::snapshot::{AdventurerSnapshot, Bag, Equipment, Item};
use crate::text::{self, FontSize};
use crate::theme::{self, Theme};

/// Fixed canvas width in pixels; also the width of one page.
pub const CANVAS_WIDTH: u32 = 600;

/// Fixed canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 900;

/// Health bar fill below 50%.
pub const HEALTH_CRITICAL: &str = "#FE1733";

/// Health bar fill from 50% to 69%.
pub const HEALTH_WARNED: &str = "#FFD700";

/// Health bar fill at 70% and above.
pub const HEALTH_HEALTHY: &str = "#3DEC00";

/// A non-fatal observation generated during rendering.
///
/// Warnings never change the rendered bytes; they exist so callers can
/// surface oddities like unknown item ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Whole-percent health fraction: `floor(health * 100 / max_health)`.
///
/// A zero maximum yields 0% rather than dividing.
pub fn health_percentage(health: u16, max_health: u16) -> u16 {
    if max_health == 0 {
        return 0;
    }
    (u32::from(health) * 100 / u32::from(max_health)) as u16
}

/// Health bar fill color for the current fraction. An exact 50% counts as
/// warned, not healthy; zero health is always critical.
pub fn health_color(health: u16, max_health: u16) -> &'static str {
    let pct = health_percentage(health, max_health);
    if pct < 50 {
        HEALTH_CRITICAL
    } else if pct < 70 {
        HEALTH_WARNED
    } else {
        HEALTH_HEALTHY
    }
}

/// Color-coded health bar with the literal `current/max` fraction.
pub fn health_bar(x: u32, y: u32, health: u16, max_health: u16) -> String {
    let color = health_color(health, max_health);
    let pct = health_percentage(health, max_health);
    let fill_width = u32::from(pct) * 296 / 100;

    let mut out = String::new();
    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"300\" height=\"18\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
        x, y, color,
    ));
    if fill_width > 0 {
        out.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"14\" fill=\"{}\"/>",
            x + 2,
            y + 2,
            fill_width,
            color,
        ));
    }
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"{}\">{}/{}</text>",
        x + 310,
        y + 14,
        color,
        health,
        max_health,
    ));
    out
}

/// Adventurer name with responsive font size and display truncation.
///
/// Empty names render an empty text node; over-long names are truncated by
/// the text layout policy and noted as a warning.
pub fn name_text(
    x: u32,
    y: u32,
    name: &str,
    theme: Theme,
    warnings: &mut Vec<Warning>,
) -> String {
    let size = FontSize::for_name(name);
    let shown = text::display_name(name);
    if shown != name {
        warnings.push(Warning::new(format!(
            "Name '{}' truncated to {} characters for display",
            name,
            text::NAME_TRUNCATE_AT,
        )));
    }
    format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        x,
        y,
        size.px(),
        theme.primary,
        text::xml_escape(&shown),
    )
}

/// A fixed-label numeric display, e.g. `GOLD 250`. The label renders
/// regardless of value, zero included.
pub fn labeled_value(x: u32, y: u32, label: &str, value: &str, color: &str) -> String {
    format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"{}\">{} {}</text>",
        x, y, color, label, value,
    )
}

/// Level badge: boxed `LVL` label over the level number.
pub fn level_badge(x: u32, y: u32, level: u8, theme: Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"96\" height=\"48\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
        x, y, theme.border,
    ));
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"{}\">LVL</text>",
        x + 8,
        y + 18,
        theme.primary,
    ));
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"24\" fill=\"{}\">{}</text>",
        x + 8,
        y + 42,
        theme.primary,
        level,
    ));
    out
}

/// The seven stat rows plus the stat-upgrade counter, one labeled value
/// per line.
pub fn stat_rows(
    x: u32,
    y: u32,
    snapshot: &AdventurerSnapshot,
    theme: Theme,
) -> String {
    let stats = &snapshot.stats;
    let rows: [(&str, u16); 8] = [
        ("STR", u16::from(stats.strength)),
        ("DEX", u16::from(stats.dexterity)),
        ("VIT", u16::from(stats.vitality)),
        ("INT", u16::from(stats.intelligence)),
        ("WIS", u16::from(stats.wisdom)),
        ("CHA", u16::from(stats.charisma)),
        ("LUCK", u16::from(stats.luck)),
        ("UPGRADES", u16::from(snapshot.stat_upgrades_available)),
    ];

    let mut out = String::new();
    for (index, (label, value)) in rows.iter().enumerate() {
        out.push_str(&labeled_value(
            x,
            y + index as u32 * 26,
            label,
            &value.to_string(),
            theme.primary,
        ));
    }
    out
}

/// One equipment cell: slot icon, greatness badge and wrapped item name.
/// Empty slots render the icon frame alone.
fn equipment_cell(
    x: u32,
    y: u32,
    slot: Slot,
    item: Item,
    theme: Theme,
    warnings: &mut Vec<Warning>,
) -> String {
    let view = item.view();
    let mut out = String::new();

    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"36\" height=\"36\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>",
        x, y, theme.border,
    ));
    out.push_str(&format!(
        "<path d=\"{}\" transform=\"translate({} {})\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"/>",
        theme::slot_icon(slot),
        x + 6,
        y + 6,
        theme.primary,
    ));

    if item.is_empty() {
        return out;
    }

    if view.is_unknown() {
        warnings.push(Warning::new(format!(
            "Unknown item id {} in {} slot",
            item.id,
            slot.name(),
        )));
    }

    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"{}\">G{}</text>",
        x + 42,
        y + 14,
        theme.primary,
        catalog::greatness(item.xp),
    ));

    for (line_index, line) in text::wrap_words(view.name, 2, 14).iter().enumerate() {
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"{}\">{}</text>",
            x + 42,
            y + 30 + line_index as u32 * 15,
            theme.primary,
            text::xml_escape(line),
        ));
    }
    out
}

/// All eight worn slots in a two-column grid.
pub fn equipment_panel(
    x: u32,
    y: u32,
    equipment: &Equipment,
    theme: Theme,
    warnings: &mut Vec<Warning>,
) -> String {
    let mut out = String::new();
    for (index, (slot, item)) in equipment.slots().iter().enumerate() {
        let column = (index % 2) as u32;
        let row = (index / 2) as u32;
        out.push_str(&equipment_cell(
            x + column * 270,
            y + row * 88,
            *slot,
            *item,
            theme,
            warnings,
        ));
    }
    out
}

/// The fifteen bag slots in a three-column grid. Empty slots render their
/// frame and slot number only.
pub fn bag_panel(
    x: u32,
    y: u32,
    bag: &Bag,
    theme: Theme,
    warnings: &mut Vec<Warning>,
) -> String {
    let mut out = String::new();
    for (index, item) in bag.items().iter().enumerate() {
        let column = (index % 3) as u32;
        let row = (index / 3) as u32;
        let cell_x = x + column * 180;
        let cell_y = y + row * 140;

        out.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"160\" height=\"120\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>",
            cell_x, cell_y, theme.border,
        ));
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"{}\">{}</text>",
            cell_x + 8,
            cell_y + 18,
            theme.border,
            index + 1,
        ));

        if item.is_empty() {
            continue;
        }

        let view = item.view();
        if view.is_unknown() {
            warnings.push(Warning::new(format!(
                "Unknown item id {} in bag slot {}",
                item.id,
                index + 1,
            )));
        }

        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"{}\">G{}</text>",
            cell_x + 130,
            cell_y + 18,
            theme.primary,
            catalog::greatness(item.xp),
        ));
        for (line_index, line) in text::wrap_words(view.name, 2, 14).iter().enumerate() {
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"{}\">{}</text>",
                cell_x + 8,
                cell_y + 48 + line_index as u32 * 16,
                theme.primary,
                text::xml_escape(line),
            ));
        }
    }
    out
}

/// Battle banner plus the beast health bar while a beast is engaged.
pub fn battle_panel(x: u32, y: u32, snapshot: &AdventurerSnapshot, theme: Theme) -> String {
    let banner = if snapshot.is_dead() { "SLAIN" } else { "IN COMBAT" };
    let mut out = String::new();
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"40\" fill=\"{}\">{}</text>",
        x, y, theme.primary, banner,
    ));
    if snapshot.in_combat() {
        out.push_str(&labeled_value(
            x,
            y + 50,
            "BEAST",
            &snapshot.beast_health.to_string(),
            theme.primary,
        ));
    }
    out
}

/// Page background, frame and footer label.
pub fn page_frame(theme: Theme, label: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        CANVAS_WIDTH, CANVAS_HEIGHT, theme.background,
    ));
    out.push_str(&format!(
        "<rect x=\"16\" y=\"16\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
        CANVAS_WIDTH - 32,
        CANVAS_HEIGHT - 32,
        theme.border,
    ));
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"12\" text-anchor=\"end\" fill=\"{}\">{}</text>",
        CANVAS_WIDTH - 32,
        CANVAS_HEIGHT - 28,
        theme.border,
        label,
    ));
    out
}

/// Opaque seed and action counter, carried through for display only.
fn provenance_line(x: u32, y: u32, snapshot: &AdventurerSnapshot, theme: Theme) -> String {
    format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"{}\">SEED {} ACT {}</text>",
        x,
        y,
        theme.border,
        U256::from(u128::from(snapshot.entropy_seed)),
        snapshot.action_count,
    )
}

/// Render one page's full content for the given page kind.
pub fn page_body(
    snapshot: &AdventurerSnapshot,
    kind: PageKind,
    theme: Theme,
    warnings: &mut Vec<Warning>,
) -> String {
    let max_health = snapshot.max_health();
    let mut out = String::new();
    match kind {
        PageKind::Inventory => {
            out.push_str(&page_frame(theme, "INVENTORY"));
            out.push_str(&name_text(40, 64, &snapshot.name, theme, warnings));
            out.push_str(&health_bar(40, 84, snapshot.health, max_health));
            out.push_str(&level_badge(460, 40, snapshot.level, theme));
            out.push_str(&labeled_value(
                460,
                120,
                "XP",
                &snapshot.xp.to_string(),
                theme.primary,
            ));
            out.push_str(&labeled_value(
                460,
                146,
                "GOLD",
                &snapshot.gold.to_string(),
                theme.primary,
            ));
            out.push_str(&stat_rows(40, 150, snapshot, theme));
            out.push_str(&equipment_panel(40, 420, &snapshot.equipment, theme, warnings));
            out.push_str(&provenance_line(40, 856, snapshot, theme));
        }
        PageKind::ItemBag => {
            out.push_str(&page_frame(theme, "ITEM BAG"));
            out.push_str(&name_text(40, 64, &snapshot.name, theme, warnings));
            out.push_str(&bag_panel(40, 100, &snapshot.bag, theme, warnings));
        }
        PageKind::Battle => {
            out.push_str(&page_frame(theme, "BATTLE"));
            out.push_str(&name_text(40, 64, &snapshot.name, theme, warnings));
            out.push_str(&health_bar(40, 84, snapshot.health, max_health));
            out.push_str(&level_badge(460, 40, snapshot.level, theme));
            out.push_str(&battle_panel(40, 430, snapshot, theme));
            out.push_str(&stat_rows(40, 520, snapshot, theme));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Stats;
    use crate::text::contains;
    use crate::theme::theme_for;

    fn base_snapshot() -> AdventurerSnapshot {
        AdventurerSnapshot {
            name: "Tester".to_string(),
            health: 100,
            level: 4,
            gold: 250,
            ..AdventurerSnapshot::default()
        }
    }

    #[test]
    fn test_health_percentage_flooring() {
        assert_eq!(health_percentage(15, 100), 15);
        assert_eq!(health_percentage(1, 3925), 0);
        assert_eq!(health_percentage(3925, 3925), 100);
        // 199/400 = 49.75% floors to 49
        assert_eq!(health_percentage(199, 400), 49);
    }

    #[test]
    fn test_health_percentage_zero_max_is_noop() {
        assert_eq!(health_percentage(10, 0), 0);
        assert_eq!(health_color(10, 0), HEALTH_CRITICAL);
    }

    #[test]
    fn test_health_color_thresholds() {
        assert_eq!(health_color(0, 100), HEALTH_CRITICAL);
        assert_eq!(health_color(49, 100), HEALTH_CRITICAL);
        // Exactly 50% is warned, not healthy.
        assert_eq!(health_color(50, 100), HEALTH_WARNED);
        assert_eq!(health_color(69, 100), HEALTH_WARNED);
        assert_eq!(health_color(70, 100), HEALTH_HEALTHY);
        assert_eq!(health_color(100, 100), HEALTH_HEALTHY);
    }

    #[test]
    fn test_health_bar_fraction_text() {
        let bar = health_bar(40, 84, 15, 100);
        assert!(contains(&bar, ">15/100</text>"));
        assert!(contains(&bar, HEALTH_CRITICAL));

        let dead = health_bar(40, 84, 0, 3925);
        assert!(contains(&dead, ">0/3925</text>"));
        assert!(contains(&dead, HEALTH_CRITICAL));
        // No inner fill rect at zero width.
        assert_eq!(dead.matches("<rect").count(), 1);
    }

    #[test]
    fn test_name_text_sizes_and_truncation() {
        let theme = theme_for(0);
        let mut warnings = Vec::new();

        let short = name_text(40, 64, "Bob", theme, &mut warnings);
        assert!(contains(&short, "font-size=\"24\""));
        assert!(contains(&short, ">Bob</text>"));
        assert!(warnings.is_empty());

        let long_name = "x".repeat(35);
        let long = name_text(40, 64, &long_name, theme, &mut warnings);
        assert!(contains(&long, "font-size=\"12\""));
        assert!(contains(&long, &format!(">{}...</text>", "x".repeat(28))));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("truncated"));
    }

    #[test]
    fn test_name_text_empty_name() {
        let mut warnings = Vec::new();
        let fragment = name_text(40, 64, "", theme_for(0), &mut warnings);
        assert!(contains(&fragment, "></text>"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_name_text_escapes_markup() {
        let mut warnings = Vec::new();
        let fragment = name_text(40, 64, "A<B&C", theme_for(0), &mut warnings);
        assert!(contains(&fragment, "A&lt;B&amp;C"));
        assert!(!contains(&fragment, "A<B"));
    }

    #[test]
    fn test_stat_rows_include_all_labels_at_zero() {
        let snapshot = AdventurerSnapshot::default();
        let rows = stat_rows(40, 150, &snapshot, theme_for(0));
        for label in ["STR", "DEX", "VIT", "INT", "WIS", "CHA", "LUCK", "UPGRADES"] {
            assert!(contains(&rows, &format!(">{} 0</text>", label)), "{}", label);
        }
    }

    #[test]
    fn test_level_and_gold_render_zero() {
        let badge = level_badge(460, 40, 0, theme_for(0));
        assert!(contains(&badge, ">LVL</text>"));
        assert!(contains(&badge, ">0</text>"));
        let gold = labeled_value(460, 146, "GOLD", "0", "#3DEC00");
        assert!(contains(&gold, ">GOLD 0</text>"));
    }

    #[test]
    fn test_equipment_cell_empty_vs_filled() {
        let theme = theme_for(0);
        let mut warnings = Vec::new();

        let empty = equipment_cell(40, 420, Slot::Weapon, Item::default(), theme, &mut warnings);
        assert!(contains(&empty, "<path"));
        assert!(!contains(&empty, "G1"));
        assert!(!contains(&empty, "<text"));

        let filled = equipment_cell(
            40,
            420,
            Slot::Weapon,
            Item { id: 42, xp: 400 },
            theme,
            &mut warnings,
        );
        assert!(contains(&filled, ">G20</text>"));
        assert!(contains(&filled, ">Katana</text>"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_equipment_cell_unknown_item_warns() {
        let mut warnings = Vec::new();
        let fragment = equipment_cell(
            40,
            420,
            Slot::Ring,
            Item { id: 200, xp: 9 },
            theme_for(0),
            &mut warnings,
        );
        assert!(contains(&fragment, ">Unknown</text>"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("Unknown item id 200"));
    }

    #[test]
    fn test_equipment_panel_renders_eight_cells() {
        let mut warnings = Vec::new();
        let panel = equipment_panel(
            40,
            420,
            &Equipment::default(),
            theme_for(0),
            &mut warnings,
        );
        assert_eq!(panel.matches("<path").count(), 8);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_bag_panel_renders_fifteen_frames() {
        let mut warnings = Vec::new();
        let mut bag = Bag::default();
        bag.0[0] = Item { id: 49, xp: 100 };
        let panel = bag_panel(40, 100, &bag, theme_for(1), &mut warnings);
        assert_eq!(panel.matches("<rect").count(), 15);
        assert!(contains(&panel, ">Studded</text>"));
        assert!(contains(&panel, ">Leather Armor</text>"));
        assert!(contains(&panel, ">G10</text>"));
    }

    #[test]
    fn test_battle_panel_banner() {
        let theme = theme_for(3);
        let dead = AdventurerSnapshot::default();
        assert!(contains(&battle_panel(40, 430, &dead, theme), ">SLAIN</text>"));

        let fighting = AdventurerSnapshot {
            health: 20,
            beast_health: 35,
            ..AdventurerSnapshot::default()
        };
        let panel = battle_panel(40, 430, &fighting, theme);
        assert!(contains(&panel, ">IN COMBAT</text>"));
        assert!(contains(&panel, ">BEAST 35</text>"));
    }

    #[test]
    fn test_page_body_deterministic() {
        let snapshot = base_snapshot();
        let mut first_warnings = Vec::new();
        let mut second_warnings = Vec::new();
        let first = page_body(&snapshot, PageKind::Inventory, theme_for(0), &mut first_warnings);
        let second = page_body(&snapshot, PageKind::Inventory, theme_for(0), &mut second_warnings);
        assert_eq!(first, second);
        assert_eq!(first_warnings, second_warnings);
    }

    #[test]
    fn test_page_body_balanced_tags() {
        let snapshot = AdventurerSnapshot {
            stats: Stats { vitality: 10, ..Stats::default() },
            health: 120,
            beast_health: 3,
            ..base_snapshot()
        };
        for kind in [PageKind::Inventory, PageKind::ItemBag, PageKind::Battle] {
            let mut warnings = Vec::new();
            let body = page_body(&snapshot, kind, theme_for(0), &mut warnings);
            assert_eq!(
                body.matches("<text").count(),
                body.matches("</text>").count(),
                "{:?}",
                kind,
            );
            assert!(!contains(&body, "x=\"-"), "{:?}", kind);
            assert!(!contains(&body, "y=\"-"), "{:?}", kind);
        }
    }

    #[test]
    fn test_provenance_line_displays_seed_and_actions() {
        let snapshot = AdventurerSnapshot {
            entropy_seed: 123_456,
            action_count: 42,
            ..base_snapshot()
        };
        let line = provenance_line(40, 856, &snapshot, theme_for(0));
        assert!(contains(&line, "SEED 123456 ACT 42"));
    }
}
