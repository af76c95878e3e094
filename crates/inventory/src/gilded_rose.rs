use crate::item::Item;
use crate::rules::update_item;

/// The inn's inventory: an ordered list of items advanced one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Compute the next day's items.
    ///
    /// Output has the same length and order as the held items. The held items
    /// are left untouched; keep the result to continue the simulation.
    pub fn update_quality(&self) -> Vec<Item> {
        tracing::debug!(items = self.items.len(), "updating inventory");
        self.items.iter().map(update_item).collect()
    }

    /// Replace the held items with the next day's items.
    pub fn advance_day(&mut self) {
        self.items = self.update_quality();
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

/// A missing collection behaves like an empty one.
impl From<Option<Vec<Item>>> for GildedRose {
    fn from(items: Option<Vec<Item>>) -> Self {
        Self::new(items.unwrap_or_default())
    }
}

impl FromIterator<Item> for GildedRose {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
