//! Data models
//!
//! Entity documents as the shipping API serves them (camelCase JSON,
//! MongoDB-style `_id` strings). All cross-entity references are soft
//! string keys; nothing here is validated against referential integrity.

pub mod container;
pub mod expense;
pub mod intake;
pub mod shipment;

// Re-exports
pub use container::*;
pub use expense::*;
pub use intake::*;
pub use shipment::*;
