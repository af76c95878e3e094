use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

use crate::quality::QUALITY_MAX;

/// Item category, resolved once from the item name.
///
/// Every name that is not one of the four special literals is `Normal`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Legendary,
    AgedBrie,
    BackstagePasses,
    Conjured,
    Normal,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 5] = [
        ItemCategory::Legendary,
        ItemCategory::AgedBrie,
        ItemCategory::BackstagePasses,
        ItemCategory::Conjured,
        ItemCategory::Normal,
    ];

    /// Lenient lookup used by `Item::new`: unknown names fall back to `Normal`.
    pub fn classify(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.canonical_name() == name)
            .unwrap_or(ItemCategory::Normal)
    }

    /// The literal item name that selects this category.
    pub fn canonical_name(self) -> &'static str {
        match self {
            ItemCategory::Legendary => "Sulfuras, Hand of Ragnaros",
            ItemCategory::AgedBrie => "Aged Brie",
            ItemCategory::BackstagePasses => "Backstage passes to a TAFKAL80ETC concert",
            ItemCategory::Conjured => "Conjured",
            ItemCategory::Normal => "Normal",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Strict parse: only the five canonical literals are accepted.
impl FromStr for ItemCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.canonical_name() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown item name: {s:?}")))
    }
}

/// Inventory item: a plain record advanced one day at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: ItemCategory,
    sell_in: i32,
    quality: i32,
}

impl Item {
    /// Build an item as-is. Any quality and any name are accepted.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::classify(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    /// Build an item from a known category, clamping quality to at most
    /// `QUALITY_MAX`. No lower clamp is applied here.
    pub fn validated(category: ItemCategory, sell_in: i32, quality: i32) -> Self {
        Self {
            name: category.canonical_name().to_string(),
            category,
            sell_in,
            quality: quality.min(QUALITY_MAX),
        }
    }

    /// Like [`Item::validated`], but takes the name as text and rejects
    /// anything outside the canonical literals.
    pub fn validated_from_name(name: &str, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let category = name.parse::<ItemCategory>()?;
        Ok(Self::validated(category, sell_in, quality))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Successor record: same name and category, new counters.
    pub(crate) fn next_day(&self, sell_in: i32, quality: i32) -> Self {
        Self {
            name: self.name.clone(),
            category: self.category,
            sell_in,
            quality,
        }
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item. The category is derived, so it is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}
