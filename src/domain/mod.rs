//! Domain layer: entities, value objects, and pure business rules.

pub mod booking;
pub mod foundation;
pub mod membership;
