//! Value object trait: equality by value, not identity.
//!
//! Dunning state, configuration and actions have **no identity**. Two values
//! with the same attributes are interchangeable, and a "change" always means
//! building a new value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// create a new one with the new values; a previously returned value is never
/// touched again.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values are copied, not shared
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Timeout {
///     business_days: u32,
/// }
///
/// impl ValueObject for Timeout {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
