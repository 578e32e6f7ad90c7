//! Token metadata assembly.
//!
//! Wraps the rendered SVG as a data URI, builds the trait list and
//! description, and serializes the final JSON document - itself wrapped as
//! a Base64 data URI. Serde struct field order fixes the JSON byte layout,
//! so repeated calls stay byte-identical.

use serde::Serialize;

use crate::catalog;
use crate::codec::base64_encode;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::render;
use crate::snapshot::AdventurerSnapshot;
use crate::template::Warning;

/// Fallback display name for snapshots with an empty name.
const UNNAMED: &str = "Adventurer";

/// One name/value trait pair in the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trait {
    pub trait_type: String,
    pub value: String,
}

impl Trait {
    fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// The serialized metadata document. Field order is the wire order.
#[derive(Debug, Serialize)]
struct TokenDocument<'a> {
    name: String,
    description: String,
    image: String,
    attributes: &'a [Trait],
}

/// Wrap an SVG document as a Base64 image data URI.
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", base64_encode(svg.as_bytes()))
}

/// Wrap a JSON document as a Base64 application/json data URI.
pub fn json_data_uri(json: &str) -> String {
    format!("data:application/json;base64,{}", base64_encode(json.as_bytes()))
}

fn display_title(token_id: u64, snapshot: &AdventurerSnapshot) -> String {
    let name = if snapshot.name.is_empty() {
        UNNAMED
    } else {
        snapshot.name.as_str()
    };
    format!("{} #{}", name, token_id)
}

fn description(snapshot: &AdventurerSnapshot) -> String {
    let name = if snapshot.name.is_empty() {
        UNNAMED
    } else {
        snapshot.name.as_str()
    };
    format!(
        "{} of the fallen lands, level {}, carrying {} gold. This card is a frozen snapshot of one moment in their run.",
        name, snapshot.level, snapshot.gold,
    )
}

/// Build the trait list for a snapshot.
///
/// One entry per stat, the vital/progress values, and one entry per
/// equipment slot (empty slots read "None"). Always at least eight
/// entries, every name and value non-empty.
pub fn render_traits(snapshot: &AdventurerSnapshot) -> Vec<Trait> {
    let stats = &snapshot.stats;
    let mut traits = vec![
        Trait::new("Strength", stats.strength.to_string()),
        Trait::new("Dexterity", stats.dexterity.to_string()),
        Trait::new("Vitality", stats.vitality.to_string()),
        Trait::new("Intelligence", stats.intelligence.to_string()),
        Trait::new("Wisdom", stats.wisdom.to_string()),
        Trait::new("Charisma", stats.charisma.to_string()),
        Trait::new("Luck", stats.luck.to_string()),
        Trait::new(
            "Health",
            format!("{}/{}", snapshot.health, snapshot.max_health()),
        ),
        Trait::new("Level", snapshot.level.to_string()),
        Trait::new("XP", snapshot.xp.to_string()),
        Trait::new("Gold", snapshot.gold.to_string()),
        Trait::new("Stat Upgrades", snapshot.stat_upgrades_available.to_string()),
    ];

    for (slot, item) in snapshot.equipment.slots() {
        let view = item.view();
        let value = if item.is_empty() {
            "None".to_string()
        } else {
            format!("{} G{}", view.name, catalog::greatness(item.xp))
        };
        traits.push(Trait::new(slot.name(), value));
    }

    traits
}

/// Render the full metadata document as a JSON data URI.
pub fn render_metadata(
    token_id: u64,
    snapshot: &AdventurerSnapshot,
    config: &RenderConfig,
) -> String {
    render_metadata_with_warnings(token_id, snapshot, config).0
}

/// [`render_metadata`] plus the warnings collected while rendering the
/// embedded image.
pub fn render_metadata_with_warnings(
    token_id: u64,
    snapshot: &AdventurerSnapshot,
    config: &RenderConfig,
) -> (String, Vec<Warning>) {
    let (svg, warnings) = render::render_image_with_warnings(snapshot, config);
    let document = assemble(token_id, snapshot, &svg);
    (document, warnings)
}

/// Render the metadata document for a single page of the snapshot.
pub fn render_page(
    token_id: u64,
    snapshot: &AdventurerSnapshot,
    page_index: usize,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let svg = render::render_page_image(snapshot, page_index, config)?;
    Ok(assemble(token_id, snapshot, &svg))
}

fn assemble(token_id: u64, snapshot: &AdventurerSnapshot, svg: &str) -> String {
    let traits = render_traits(snapshot);
    let document = TokenDocument {
        name: display_title(token_id, snapshot),
        description: description(snapshot),
        image: svg_data_uri(svg),
        attributes: &traits,
    };
    let json = serde_json::to_string(&document)
        .expect("metadata document serialization cannot fail");
    json_data_uri(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Item, Stats};
    use base64::Engine;

    fn decode_json_uri(uri: &str) -> serde_json::Value {
        let encoded = uri
            .strip_prefix("data:application/json;base64,")
            .expect("json data uri prefix");
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .expect("valid base64");
        serde_json::from_slice(&bytes).expect("valid json")
    }

    fn sample_snapshot() -> AdventurerSnapshot {
        AdventurerSnapshot {
            name: "Sigrun".to_string(),
            health: 90,
            xp: 640,
            level: 6,
            gold: 120,
            stats: Stats { vitality: 2, luck: 3, ..Stats::default() },
            equipment: crate::snapshot::Equipment {
                weapon: Item { id: 42, xp: 225 },
                ..Default::default()
            },
            ..AdventurerSnapshot::default()
        }
    }

    #[test]
    fn test_traits_cover_stats_and_vitals() {
        let traits = render_traits(&sample_snapshot());
        assert!(traits.len() >= 8);
        for entry in &traits {
            assert!(!entry.trait_type.is_empty());
            assert!(!entry.value.is_empty());
        }

        let find = |name: &str| {
            traits
                .iter()
                .find(|t| t.trait_type == name)
                .unwrap_or_else(|| panic!("missing trait {}", name))
                .value
                .clone()
        };
        assert_eq!(find("Vitality"), "2");
        assert_eq!(find("Health"), "90/130");
        assert_eq!(find("Level"), "6");
        assert_eq!(find("Gold"), "120");
        assert_eq!(find("Weapon"), "Katana G15");
        assert_eq!(find("Chest"), "None");
    }

    #[test]
    fn test_metadata_is_json_data_uri() {
        let uri = render_metadata(7, &sample_snapshot(), &RenderConfig::default());
        let doc = decode_json_uri(&uri);
        assert_eq!(doc["name"], "Sigrun #7");
        assert!(doc["description"]
            .as_str()
            .unwrap()
            .contains("level 6"));
        assert!(doc["image"]
            .as_str()
            .unwrap()
            .starts_with("data:image/svg+xml;base64,"));
        assert!(doc["attributes"].as_array().unwrap().len() >= 8);
    }

    #[test]
    fn test_metadata_embeds_renderable_svg() {
        let uri = render_metadata(7, &sample_snapshot(), &RenderConfig::default());
        let doc = decode_json_uri(&uri);
        let image = doc["image"].as_str().unwrap();
        let svg_bytes = base64::engine::general_purpose::STANDARD
            .decode(image.strip_prefix("data:image/svg+xml;base64,").unwrap())
            .unwrap();
        let svg = String::from_utf8(svg_bytes).unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_metadata_deterministic() {
        let snapshot = sample_snapshot();
        let config = RenderConfig::default();
        assert_eq!(
            render_metadata(99, &snapshot, &config),
            render_metadata(99, &snapshot, &config),
        );
    }

    #[test]
    fn test_empty_name_falls_back() {
        let snapshot = AdventurerSnapshot {
            health: 10,
            ..AdventurerSnapshot::default()
        };
        let uri = render_metadata(3, &snapshot, &RenderConfig::default());
        let doc = decode_json_uri(&uri);
        assert_eq!(doc["name"], "Adventurer #3");
    }

    #[test]
    fn test_render_page_propagates_range_error() {
        let snapshot = sample_snapshot();
        let config = RenderConfig::default();
        assert!(render_page(1, &snapshot, 0, &config).is_ok());
        assert_eq!(
            render_page(1, &snapshot, 5, &config),
            Err(RenderError::PageOutOfRange { index: 5, pages: 2 }),
        );
    }

    #[test]
    fn test_page_metadata_embeds_single_page() {
        let snapshot = sample_snapshot();
        let uri = render_page(1, &snapshot, 1, &RenderConfig::default()).unwrap();
        let doc = decode_json_uri(&uri);
        let image = doc["image"].as_str().unwrap();
        let svg_bytes = base64::engine::general_purpose::STANDARD
            .decode(image.strip_prefix("data:image/svg+xml;base64,").unwrap())
            .unwrap();
        let svg = String::from_utf8(svg_bytes).unwrap();
        assert!(svg.contains("ITEM BAG"));
        assert!(!svg.contains("animateTransform"));
    }
}
