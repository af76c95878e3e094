//! Per-category day rules.
//!
//! Every rule reads the item's counters as they were *before* the day ends
//! and returns a new record; the input is never modified.

use crate::item::{Item, ItemCategory};
use crate::quality::{
    LEGENDARY_QUALITY, QUALITY_MIN, decrease_quality, decrease_sell_in, increase_quality,
    is_past_date,
};

/// Advance a single item by one day according to its category.
pub fn update_item(item: &Item) -> Item {
    let next = match item.category() {
        ItemCategory::Legendary => update_legendary(item),
        ItemCategory::AgedBrie => update_aged_brie(item),
        ItemCategory::BackstagePasses => update_backstage_passes(item),
        ItemCategory::Conjured => update_conjured(item),
        ItemCategory::Normal => update_normal(item),
    };

    tracing::trace!(
        item = item.name(),
        category = ?item.category(),
        sell_in = item.sell_in(),
        quality = item.quality(),
        next_sell_in = next.sell_in(),
        next_quality = next.quality(),
        "item advanced"
    );

    next
}

/// Never sold, never changes; quality is pinned regardless of input.
fn update_legendary(item: &Item) -> Item {
    item.next_day(item.sell_in(), LEGENDARY_QUALITY)
}

fn update_aged_brie(item: &Item) -> Item {
    item.next_day(decrease_sell_in(item.sell_in()), increase_quality(item.quality()))
}

fn update_backstage_passes(item: &Item) -> Item {
    let sell_in = item.sell_in();
    let quality = item.quality();

    // Concert day: worthless from here on.
    if sell_in == 0 {
        return item.next_day(decrease_sell_in(sell_in), QUALITY_MIN);
    }

    // sell_in == 5 matches none of the branches and keeps its quality.
    let next_quality = if sell_in > 10 {
        increase_quality(quality)
    } else if sell_in > 5 {
        increase_quality(increase_quality(quality))
    } else if sell_in < 5 {
        increase_quality(increase_quality(increase_quality(quality)))
    } else {
        quality
    };

    item.next_day(decrease_sell_in(sell_in), next_quality)
}

/// Twice the normal decay, but no extra doubling past the sell date.
fn update_conjured(item: &Item) -> Item {
    item.next_day(
        decrease_sell_in(item.sell_in()),
        decrease_quality(decrease_quality(item.quality())),
    )
}

fn update_normal(item: &Item) -> Item {
    let sell_in = item.sell_in();
    let quality = if is_past_date(sell_in) {
        decrease_quality(decrease_quality(item.quality()))
    } else {
        decrease_quality(item.quality())
    };

    item.next_day(decrease_sell_in(sell_in), quality)
}
