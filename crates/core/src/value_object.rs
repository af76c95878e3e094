//! Value object trait: equality by value, not identity.
//!
//! Inventory items have no identity of their own. Two items with the same
//! name, sell-in and quality are the same item as far as the rules care.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one from the old: a day update never touches its input, it
/// returns fresh records.
///
/// The trait requires:
/// - **Clone**: values are copied, never shared mutably
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: shows up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
