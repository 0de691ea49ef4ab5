//! Shared types for the Lading back-office
//!
//! Common types used across the client and engine crates: entity models
//! mirrored from the shipping API, request/response payloads, and small
//! utility helpers.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Container, ContainerNumbers, CostLine, Expense, ExpenseBulkCreate, ExpenseUpdate,
    IntakeRecord, Shipment, ShipmentBulkCreate, ShipmentContainerEntry, ShipmentUpdate,
};
pub use response::UidResponse;
