//! Quality and sell-in primitives shared by every update rule.

/// Lowest quality an ordinary item can reach through an update.
pub const QUALITY_MIN: i32 = 0;

/// Highest quality an ordinary item can reach through an update.
pub const QUALITY_MAX: i32 = 50;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// One step down, clamped into `[QUALITY_MIN, QUALITY_MAX]`.
pub fn decrease_quality(quality: i32) -> i32 {
    quality.saturating_sub(1).clamp(QUALITY_MIN, QUALITY_MAX)
}

/// One step up, clamped into `[QUALITY_MIN, QUALITY_MAX]`.
pub fn increase_quality(quality: i32) -> i32 {
    quality.saturating_add(1).clamp(QUALITY_MIN, QUALITY_MAX)
}

/// Sell-in has no lower bound; it only saturates at `i32::MIN`.
pub fn decrease_sell_in(sell_in: i32) -> i32 {
    sell_in.saturating_sub(1)
}

pub fn is_past_date(sell_in: i32) -> bool {
    sell_in <= 0
}
