//! Lading Engine - invoice reconciliation and intake for the shipping back-office
//!
//! The engine mirrors five remote collections (shipments, containers,
//! warehouse records, customer records, expenses) in a shared read-through
//! [`store::DataStore`], joins them by invoice and container number in the
//! [`joiner::Joiner`], derives financial metrics in [`metrics`], and drives
//! the container intake workflow through the [`intake::IntakeQueue`] state
//! machine. All writes go through the [`lading_client::ShippingApi`] seam.

pub mod config;
pub mod drafts;
pub mod error;
pub mod filter;
pub mod intake;
pub mod joiner;
pub mod metrics;
pub mod report;
pub mod selection;
pub mod store;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use filter::{DateRange, ShipmentFilter};
pub use intake::{CommitSummary, IntakeForm, IntakePhase, IntakeQueue};
pub use joiner::Joiner;
pub use store::DataStore;
