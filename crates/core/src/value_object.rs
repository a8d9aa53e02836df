//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. [`Money`](crate::Money) is the value object used for
/// prices and valuations.
///
/// - **Value Object**: no identity (two values with the same fields are equal)
/// - **Entity**: has identity (two entities with the same id are the same record)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
