//! Adventurer snapshot model: the renderer's sole input.
//!
//! All types here are plain values constructed by the caller for a single
//! render call; the renderer never retains or mutates them. Serde derives
//! exist for the CLI input format, with `#[serde(default)]` throughout so
//! fixtures can stay minimal.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ItemView, Slot};

/// Number of equipment slots on an adventurer.
pub const EQUIPMENT_SLOTS: usize = 8;

/// Number of loose inventory slots in the bag.
pub const BAG_SLOTS: usize = 15;

/// The seven core stats. Each is an independent 0-255 counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub strength: u8,
    pub dexterity: u8,
    pub vitality: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
    pub luck: u8,
}

impl Stats {
    /// Maximum health derived from vitality: `100 + vitality * 15`.
    ///
    /// Computed in `u16`, where the worst case (vitality 255) is 3925 -
    /// overflow is impossible by representation, and the result is never
    /// below 100.
    pub fn max_health(&self) -> u16 {
        100 + u16::from(self.vitality) * 15
    }
}

/// One item: a catalog id plus its experience counter.
///
/// Id 0 is the empty item, 1..=101 index the catalog, and anything above
/// is carried as "unknown" rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: u8,
    pub xp: u16,
}

impl Item {
    /// Catalog-resolved view of this item. Derived on demand, never cached.
    pub fn view(&self) -> ItemView {
        catalog::resolve(self.id)
    }

    /// True if this slot holds nothing.
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}

/// The eight worn equipment slots. Slots are independent and may be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    pub weapon: Item,
    pub chest: Item,
    pub head: Item,
    pub waist: Item,
    pub foot: Item,
    pub hand: Item,
    pub neck: Item,
    pub ring: Item,
}

impl Equipment {
    /// All slots in render order, paired with the slot they occupy.
    pub fn slots(&self) -> [(Slot, Item); EQUIPMENT_SLOTS] {
        [
            (Slot::Weapon, self.weapon),
            (Slot::Chest, self.chest),
            (Slot::Head, self.head),
            (Slot::Waist, self.waist),
            (Slot::Foot, self.foot),
            (Slot::Hand, self.hand),
            (Slot::Neck, self.neck),
            (Slot::Ring, self.ring),
        ]
    }

    /// The item worn in `slot`. `Slot::None` never holds an item.
    pub fn get(&self, slot: Slot) -> Option<Item> {
        match slot {
            Slot::Weapon => Some(self.weapon),
            Slot::Chest => Some(self.chest),
            Slot::Head => Some(self.head),
            Slot::Waist => Some(self.waist),
            Slot::Foot => Some(self.foot),
            Slot::Hand => Some(self.hand),
            Slot::Neck => Some(self.neck),
            Slot::Ring => Some(self.ring),
            Slot::None => None,
        }
    }
}

/// Fifteen unordered loose-inventory slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag(pub [Item; BAG_SLOTS]);

impl Bag {
    pub fn items(&self) -> &[Item; BAG_SLOTS] {
        &self.0
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|item| !item.is_empty()).count()
    }
}

/// An immutable per-render description of one adventurer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdventurerSnapshot {
    /// Display name; conceptually unbounded, display-truncated.
    pub name: String,
    /// Current health. 0 means dead.
    pub health: u16,
    pub xp: u16,
    pub level: u8,
    pub gold: u16,
    /// Health of the beast currently engaged; above 0 signals combat.
    pub beast_health: u16,
    pub stat_upgrades_available: u8,
    pub stats: Stats,
    pub equipment: Equipment,
    pub bag: Bag,
    /// Opaque seed carried through for display only.
    pub entropy_seed: u32,
    /// Opaque action counter carried through for display only.
    pub action_count: u16,
}

impl AdventurerSnapshot {
    /// Maximum health for this snapshot's vitality.
    pub fn max_health(&self) -> u16 {
        self.stats.max_health()
    }

    /// True once health has reached zero.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// True while a beast with health remaining is engaged.
    pub fn in_combat(&self) -> bool {
        self.beast_health > 0
    }
}
