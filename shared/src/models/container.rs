//! Container Model

use serde::{Deserialize, Serialize};

/// Container entity
///
/// One per physical container, created together with its parent shipment.
/// `unique_id` is the opaque lookup key; `container_number` is the
/// human-readable identifier painted on the box.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub unique_id: String,
    pub container_number: String,
    #[serde(default)]
    pub seal_number1: Option<String>,
    #[serde(default)]
    pub seal_number2: Option<String>,
    /// Weight in kilograms.
    #[serde(default)]
    pub gross_weight: f64,
    /// Weight in kilograms.
    #[serde(default)]
    pub net_weight: f64,
    #[serde(default)]
    pub no_of_bags: i64,
    #[serde(default)]
    pub status: Option<String>,
}
