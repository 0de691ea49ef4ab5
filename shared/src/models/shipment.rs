//! Shipment Model

use serde::{Deserialize, Serialize};

/// Container numbers as stored on a shipment document.
///
/// Old records carry a single string, bulk-created ones a list. Both shapes
/// exist in the live collection, so this stays an untagged enum and callers
/// go through [`Shipment::container_numbers`] for a normalized view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ContainerNumbers {
    One(String),
    Many(Vec<String>),
}

impl ContainerNumbers {
    /// Normalize to a list of container numbers.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ContainerNumbers::One(n) => vec![n.clone()],
            ContainerNumbers::Many(list) => list.clone(),
        }
    }
}

/// Shipment entity
///
/// Created once via the bulk entry form together with its containers and
/// immutable afterwards except for explicit edit/delete actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub invoice_number: String,
    #[serde(default)]
    pub bl_number: String,
    /// Scalar or list on the wire, absent on some legacy records.
    #[serde(default)]
    pub container_number: Option<ContainerNumbers>,
    /// Opaque unique IDs of the containers created with this shipment.
    #[serde(default)]
    pub container_ids: Vec<String>,
    #[serde(default)]
    pub goods_name: String,
    #[serde(default)]
    pub shipping_line: String,
    #[serde(default)]
    pub arrival_port: String,
    #[serde(default)]
    pub country_of_origin: String,
    /// Weight in kilograms.
    #[serde(default)]
    pub gross_weight: f64,
    /// Weight in kilograms.
    #[serde(default)]
    pub net_weight: f64,
    #[serde(default)]
    pub no_of_bags: i64,
    /// Declared value in VND, fixed at creation time and never re-derived.
    #[serde(default)]
    pub total_value_vnd: f64,
    /// Price in USD per kilogram.
    #[serde(default)]
    pub price_per_kg_usd: f64,
    /// VND per USD at creation time.
    #[serde(default)]
    pub exchange_rate: f64,
    /// Estimated arrival (ISO date).
    #[serde(default)]
    pub eta: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Shipment {
    /// Container numbers normalized to a list.
    ///
    /// A missing or empty `containerNumber` field yields an empty list.
    pub fn container_numbers(&self) -> Vec<String> {
        self.container_number
            .as_ref()
            .map(ContainerNumbers::to_vec)
            .unwrap_or_default()
    }
}

/// One container row of the bulk shipment entry form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentContainerEntry {
    /// Server-issued opaque ID (`GET /api/generate-uid`).
    pub unique_id: String,
    pub container_number: String,
    #[serde(default)]
    pub seal1: String,
    #[serde(default)]
    pub seal2: String,
    #[serde(default)]
    pub gross_weight: f64,
    #[serde(default)]
    pub net_weight: f64,
    #[serde(default)]
    pub no_of_bags: i64,
}

/// Bulk create payload (`POST /api/shipment/bulk`)
///
/// Shipment-level weights and bag count are the roll-up of the container
/// rows; `total_value_vnd` is computed by the caller at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentBulkCreate {
    pub containers: Vec<ShipmentContainerEntry>,
    pub invoice_number: String,
    pub bl_number: String,
    pub gross_weight: f64,
    pub net_weight: f64,
    pub no_of_bags: i64,
    pub shipping_line: String,
    pub goods_name: String,
    pub arrival_port: String,
    pub country_of_origin: String,
    pub eta: String,
    pub price_per_kg_usd: f64,
    pub exchange_rate: f64,
    pub total_value_vnd: f64,
}

/// Update payload (`PUT /api/shipment/update/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentUpdate {
    pub invoice_number: String,
    pub bl_number: String,
    pub goods_name: String,
    pub shipping_line: String,
    pub arrival_port: String,
    pub net_weight: f64,
    pub total_value_vnd: f64,
    pub eta: Option<String>,
}
