//! Gilded Rose inventory rules.
//!
//! This crate contains the nightly update rules for the inn's stock,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod gilded_rose;
pub mod item;
pub mod quality;
pub mod rules;

pub use gilded_rose::GildedRose;
pub use item::{Item, ItemCategory};
pub use quality::{LEGENDARY_QUALITY, QUALITY_MAX, QUALITY_MIN};
pub use rules::update_item;
