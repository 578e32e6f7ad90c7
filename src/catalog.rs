//! Static item catalog: id -> (display name, tier, category, equip slot).
//!
//! The table is authored game data. Ids group into equipment families of
//! five descending tiers (necklaces and rings ahead of them are irregular),
//! and [`resolve`] is total over all of `u8`: 0 is the empty item, 1..=101
//! are catalog entries, anything above is "unknown" rather than an error.
//!
//! Also hosts the greatness curve, the bounded display level derived from
//! an item's experience counter.

/// Item rarity rank. `T1` is the best, `T5` the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    None,
    T1,
    T2,
    T3,
    T4,
    T5,
}

impl Tier {
    /// Display name for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::None => "None",
            Tier::T1 => "T1",
            Tier::T2 => "T2",
            Tier::T3 => "T3",
            Tier::T4 => "T4",
            Tier::T5 => "T5",
        }
    }
}

/// Item material/damage family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    None,
    /// Cloth armor and magic weapons.
    ClothOrMagic,
    /// Hide armor and blade weapons.
    HideOrBlade,
    /// Metal armor and bludgeon weapons.
    MetalOrBludgeon,
    Necklace,
    Ring,
}

impl Category {
    /// Display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::None => "None",
            Category::ClothOrMagic => "Cloth/Magic",
            Category::HideOrBlade => "Hide/Blade",
            Category::MetalOrBludgeon => "Metal/Bludgeon",
            Category::Necklace => "Necklace",
            Category::Ring => "Ring",
        }
    }
}

/// Equipment slot an item occupies when worn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    None,
    Weapon,
    Chest,
    Head,
    Waist,
    Foot,
    Hand,
    Neck,
    Ring,
}

impl Slot {
    /// Display name for this slot.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::None => "None",
            Slot::Weapon => "Weapon",
            Slot::Chest => "Chest",
            Slot::Head => "Head",
            Slot::Waist => "Waist",
            Slot::Foot => "Foot",
            Slot::Hand => "Hand",
            Slot::Neck => "Neck",
            Slot::Ring => "Ring",
        }
    }
}

/// A catalog-resolved view of an item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemView {
    pub id: u8,
    pub name: &'static str,
    pub tier: Tier,
    pub category: Category,
    pub slot: Slot,
}

impl ItemView {
    /// True for the canonical empty view (id 0).
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }

    /// True for ids past the end of the catalog.
    pub fn is_unknown(&self) -> bool {
        self.id > CATALOG_SIZE
    }
}

/// Number of authored catalog entries.
pub const CATALOG_SIZE: u8 = 101;

struct Entry {
    name: &'static str,
    tier: Tier,
    category: Category,
    slot: Slot,
}

impl Entry {
    const fn new(name: &'static str, tier: Tier, category: Category, slot: Slot) -> Self {
        Self { name, tier, category, slot }
    }
}

/// The authored table, indexed by `id - 1`.
static CATALOG: [Entry; CATALOG_SIZE as usize] = [
    // 1-3: necklaces
    Entry::new("Pendant", Tier::T1, Category::Necklace, Slot::Neck),
    Entry::new("Necklace", Tier::T1, Category::Necklace, Slot::Neck),
    Entry::new("Amulet", Tier::T1, Category::Necklace, Slot::Neck),
    // 4-8: rings
    Entry::new("Silver Ring", Tier::T2, Category::Ring, Slot::Ring),
    Entry::new("Bronze Ring", Tier::T3, Category::Ring, Slot::Ring),
    Entry::new("Platinum Ring", Tier::T1, Category::Ring, Slot::Ring),
    Entry::new("Titanium Ring", Tier::T1, Category::Ring, Slot::Ring),
    Entry::new("Gold Ring", Tier::T1, Category::Ring, Slot::Ring),
    // 9-16: magic weapons (wands, then tomes)
    Entry::new("Ghost Wand", Tier::T1, Category::ClothOrMagic, Slot::Weapon),
    Entry::new("Grave Wand", Tier::T2, Category::ClothOrMagic, Slot::Weapon),
    Entry::new("Bone Wand", Tier::T3, Category::ClothOrMagic, Slot::Weapon),
    Entry::new("Wand", Tier::T5, Category::ClothOrMagic, Slot::Weapon),
    Entry::new("Grimoire", Tier::T1, Category::ClothOrMagic, Slot::Weapon),
    Entry::new("Chronicle", Tier::T2, Category::ClothOrMagic, Slot::Weapon),
    Entry::new("Tome", Tier::T3, Category::ClothOrMagic, Slot::Weapon),
    Entry::new("Book", Tier::T5, Category::ClothOrMagic, Slot::Weapon),
    // 17-21: cloth chest armor
    Entry::new("Divine Robe", Tier::T1, Category::ClothOrMagic, Slot::Chest),
    Entry::new("Silk Robe", Tier::T2, Category::ClothOrMagic, Slot::Chest),
    Entry::new("Linen Robe", Tier::T3, Category::ClothOrMagic, Slot::Chest),
    Entry::new("Robe", Tier::T4, Category::ClothOrMagic, Slot::Chest),
    Entry::new("Shirt", Tier::T5, Category::ClothOrMagic, Slot::Chest),
    // 22-26: cloth head armor
    Entry::new("Crown", Tier::T1, Category::ClothOrMagic, Slot::Head),
    Entry::new("Divine Hood", Tier::T2, Category::ClothOrMagic, Slot::Head),
    Entry::new("Silk Hood", Tier::T3, Category::ClothOrMagic, Slot::Head),
    Entry::new("Linen Hood", Tier::T4, Category::ClothOrMagic, Slot::Head),
    Entry::new("Hood", Tier::T5, Category::ClothOrMagic, Slot::Head),
    // 27-31: cloth waist armor
    Entry::new("Brightsilk Sash", Tier::T1, Category::ClothOrMagic, Slot::Waist),
    Entry::new("Silk Sash", Tier::T2, Category::ClothOrMagic, Slot::Waist),
    Entry::new("Wool Sash", Tier::T3, Category::ClothOrMagic, Slot::Waist),
    Entry::new("Linen Sash", Tier::T4, Category::ClothOrMagic, Slot::Waist),
    Entry::new("Sash", Tier::T5, Category::ClothOrMagic, Slot::Waist),
    // 32-36: cloth foot armor
    Entry::new("Divine Slippers", Tier::T1, Category::ClothOrMagic, Slot::Foot),
    Entry::new("Silk Slippers", Tier::T2, Category::ClothOrMagic, Slot::Foot),
    Entry::new("Wool Shoes", Tier::T3, Category::ClothOrMagic, Slot::Foot),
    Entry::new("Linen Shoes", Tier::T4, Category::ClothOrMagic, Slot::Foot),
    Entry::new("Shoes", Tier::T5, Category::ClothOrMagic, Slot::Foot),
    // 37-41: cloth hand armor
    Entry::new("Divine Gloves", Tier::T1, Category::ClothOrMagic, Slot::Hand),
    Entry::new("Silk Gloves", Tier::T2, Category::ClothOrMagic, Slot::Hand),
    Entry::new("Wool Gloves", Tier::T3, Category::ClothOrMagic, Slot::Hand),
    Entry::new("Linen Gloves", Tier::T4, Category::ClothOrMagic, Slot::Hand),
    Entry::new("Gloves", Tier::T5, Category::ClothOrMagic, Slot::Hand),
    // 42-46: blade weapons
    Entry::new("Katana", Tier::T1, Category::HideOrBlade, Slot::Weapon),
    Entry::new("Falchion", Tier::T2, Category::HideOrBlade, Slot::Weapon),
    Entry::new("Scimitar", Tier::T3, Category::HideOrBlade, Slot::Weapon),
    Entry::new("Long Sword", Tier::T4, Category::HideOrBlade, Slot::Weapon),
    Entry::new("Short Sword", Tier::T5, Category::HideOrBlade, Slot::Weapon),
    // 47-51: hide chest armor
    Entry::new("Demon Husk", Tier::T1, Category::HideOrBlade, Slot::Chest),
    Entry::new("Dragonskin Armor", Tier::T2, Category::HideOrBlade, Slot::Chest),
    Entry::new("Studded Leather Armor", Tier::T3, Category::HideOrBlade, Slot::Chest),
    Entry::new("Hard Leather Armor", Tier::T4, Category::HideOrBlade, Slot::Chest),
    Entry::new("Leather Armor", Tier::T5, Category::HideOrBlade, Slot::Chest),
    // 52-56: hide head armor
    Entry::new("Demon Crown", Tier::T1, Category::HideOrBlade, Slot::Head),
    Entry::new("Dragon's Crown", Tier::T2, Category::HideOrBlade, Slot::Head),
    Entry::new("War Cap", Tier::T3, Category::HideOrBlade, Slot::Head),
    Entry::new("Leather Cap", Tier::T4, Category::HideOrBlade, Slot::Head),
    Entry::new("Cap", Tier::T5, Category::HideOrBlade, Slot::Head),
    // 57-61: hide waist armor
    Entry::new("Demonhide Belt", Tier::T1, Category::HideOrBlade, Slot::Waist),
    Entry::new("Dragonskin Belt", Tier::T2, Category::HideOrBlade, Slot::Waist),
    Entry::new("Studded Leather Belt", Tier::T3, Category::HideOrBlade, Slot::Waist),
    Entry::new("Hard Leather Belt", Tier::T4, Category::HideOrBlade, Slot::Waist),
    Entry::new("Leather Belt", Tier::T5, Category::HideOrBlade, Slot::Waist),
    // 62-66: hide foot armor
    Entry::new("Demonhide Boots", Tier::T1, Category::HideOrBlade, Slot::Foot),
    Entry::new("Dragonskin Boots", Tier::T2, Category::HideOrBlade, Slot::Foot),
    Entry::new("Studded Leather Boots", Tier::T3, Category::HideOrBlade, Slot::Foot),
    Entry::new("Hard Leather Boots", Tier::T4, Category::HideOrBlade, Slot::Foot),
    Entry::new("Leather Boots", Tier::T5, Category::HideOrBlade, Slot::Foot),
    // 67-71: hide hand armor
    Entry::new("Demon's Hands", Tier::T1, Category::HideOrBlade, Slot::Hand),
    Entry::new("Dragonskin Gloves", Tier::T2, Category::HideOrBlade, Slot::Hand),
    Entry::new("Studded Leather Gloves", Tier::T3, Category::HideOrBlade, Slot::Hand),
    Entry::new("Hard Leather Gloves", Tier::T4, Category::HideOrBlade, Slot::Hand),
    Entry::new("Leather Gloves", Tier::T5, Category::HideOrBlade, Slot::Hand),
    // 72-76: bludgeon weapons
    Entry::new("Warhammer", Tier::T1, Category::MetalOrBludgeon, Slot::Weapon),
    Entry::new("Quarterstaff", Tier::T2, Category::MetalOrBludgeon, Slot::Weapon),
    Entry::new("Maul", Tier::T3, Category::MetalOrBludgeon, Slot::Weapon),
    Entry::new("Mace", Tier::T4, Category::MetalOrBludgeon, Slot::Weapon),
    Entry::new("Club", Tier::T5, Category::MetalOrBludgeon, Slot::Weapon),
    // 77-81: metal chest armor
    Entry::new("Holy Chestplate", Tier::T1, Category::MetalOrBludgeon, Slot::Chest),
    Entry::new("Ornate Chestplate", Tier::T2, Category::MetalOrBludgeon, Slot::Chest),
    Entry::new("Plate Mail", Tier::T3, Category::MetalOrBludgeon, Slot::Chest),
    Entry::new("Chain Mail", Tier::T4, Category::MetalOrBludgeon, Slot::Chest),
    Entry::new("Ring Mail", Tier::T5, Category::MetalOrBludgeon, Slot::Chest),
    // 82-86: metal head armor
    Entry::new("Ancient Helm", Tier::T1, Category::MetalOrBludgeon, Slot::Head),
    Entry::new("Ornate Helm", Tier::T2, Category::MetalOrBludgeon, Slot::Head),
    Entry::new("Great Helm", Tier::T3, Category::MetalOrBludgeon, Slot::Head),
    Entry::new("Full Helm", Tier::T4, Category::MetalOrBludgeon, Slot::Head),
    Entry::new("Helm", Tier::T5, Category::MetalOrBludgeon, Slot::Head),
    // 87-91: metal waist armor
    Entry::new("Ornate Belt", Tier::T1, Category::MetalOrBludgeon, Slot::Waist),
    Entry::new("War Belt", Tier::T2, Category::MetalOrBludgeon, Slot::Waist),
    Entry::new("Plated Belt", Tier::T3, Category::MetalOrBludgeon, Slot::Waist),
    Entry::new("Mesh Belt", Tier::T4, Category::MetalOrBludgeon, Slot::Waist),
    Entry::new("Heavy Belt", Tier::T5, Category::MetalOrBludgeon, Slot::Waist),
    // 92-96: metal foot armor
    Entry::new("Holy Greaves", Tier::T1, Category::MetalOrBludgeon, Slot::Foot),
    Entry::new("Ornate Greaves", Tier::T2, Category::MetalOrBludgeon, Slot::Foot),
    Entry::new("Greaves", Tier::T3, Category::MetalOrBludgeon, Slot::Foot),
    Entry::new("Chain Boots", Tier::T4, Category::MetalOrBludgeon, Slot::Foot),
    Entry::new("Heavy Boots", Tier::T5, Category::MetalOrBludgeon, Slot::Foot),
    // 97-101: metal hand armor
    Entry::new("Holy Gauntlets", Tier::T1, Category::MetalOrBludgeon, Slot::Hand),
    Entry::new("Ornate Gauntlets", Tier::T2, Category::MetalOrBludgeon, Slot::Hand),
    Entry::new("Gauntlets", Tier::T3, Category::MetalOrBludgeon, Slot::Hand),
    Entry::new("Chain Gloves", Tier::T4, Category::MetalOrBludgeon, Slot::Hand),
    Entry::new("Heavy Gloves", Tier::T5, Category::MetalOrBludgeon, Slot::Hand),
];

/// Resolve an item id to its catalog view. Total over all of `u8`.
///
/// - id 0: the canonical empty view (everything `None`, empty name)
/// - id 1..=101: the authored table entry
/// - id above 101: unknown placeholder, `None` tier/category/slot
///
/// # Examples
///
/// ```
/// use herocard::catalog::{resolve, Slot, Tier};
///
/// assert_eq!(resolve(42).name, "Katana");
/// assert_eq!(resolve(42).tier, Tier::T1);
/// assert_eq!(resolve(42).slot, Slot::Weapon);
/// assert_eq!(resolve(0).name, "");
/// assert_eq!(resolve(255).tier, Tier::None);
/// ```
pub fn resolve(id: u8) -> ItemView {
    if id == 0 {
        return ItemView {
            id,
            name: "",
            tier: Tier::None,
            category: Category::None,
            slot: Slot::None,
        };
    }
    if id <= CATALOG_SIZE {
        let entry = &CATALOG[id as usize - 1];
        return ItemView {
            id,
            name: entry.name,
            tier: entry.tier,
            category: entry.category,
            slot: entry.slot,
        };
    }
    ItemView {
        id,
        name: "Unknown",
        tier: Tier::None,
        category: Category::None,
        slot: Slot::None,
    }
}

/// Greatness never exceeds this display level.
pub const MAX_GREATNESS: u8 = 20;

/// Bounded display level derived from an item's experience counter.
///
/// `greatness(xp) = clamp(isqrt(xp), 1, 20)`: growth decelerates with
/// experience, an unleveled item still shows level 1, and the badge caps
/// at [`MAX_GREATNESS`].
pub fn greatness(xp: u16) -> u8 {
    isqrt(u32::from(xp)).clamp(1, u32::from(MAX_GREATNESS)) as u8
}

/// Floor integer square root via Newton's method. Converges in a handful
/// of iterations for 32-bit input.
fn isqrt(value: u32) -> u32 {
    if value < 2 {
        return value;
    }
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}
