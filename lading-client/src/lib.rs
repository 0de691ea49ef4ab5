//! Lading Client - HTTP client for the shipping API
//!
//! Provides network-based HTTP calls to the remote shipping REST service.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::ShippingApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{
    Container, Expense, ExpenseBulkCreate, ExpenseUpdate, IntakeRecord, Shipment,
    ShipmentBulkCreate, ShipmentUpdate,
};
