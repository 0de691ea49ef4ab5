//! Intake Record Model
//!
//! A warehouse record and a customer record share one document shape; they
//! only live in different collections depending on where the goods went.

use serde::{Deserialize, Serialize};

/// `saleTarget` value routing goods into a warehouse.
pub const SALE_TARGET_WAREHOUSE: &str = "warehouse";
/// `saleTarget` value routing goods directly to a named customer.
pub const SALE_TARGET_CUSTOMER: &str = "customer";

fn default_sale_target() -> String {
    SALE_TARGET_WAREHOUSE.to_string()
}

/// Intake record entity
///
/// One per physical container received into a warehouse or routed directly
/// to a customer. References its shipment by invoice and container number
/// only (soft keys, never enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub container_number: String,
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub bl_number: String,
    #[serde(default)]
    pub seal_number1: Option<String>,
    #[serde(default)]
    pub seal_number2: Option<String>,

    // -- Shipment subset copied at intake time --
    /// Weight in kilograms.
    #[serde(default)]
    pub gross_weight: f64,
    /// Weight in kilograms.
    #[serde(default)]
    pub net_weight: f64,
    #[serde(default)]
    pub number_of_bags: i64,
    /// Declared value in VND.
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub shipping_line: String,
    #[serde(default)]
    pub name_of_goods: String,
    #[serde(default)]
    pub arrival_port: String,

    // -- What actually arrived --
    #[serde(default)]
    pub warehouse_name: String,
    /// ISO date.
    #[serde(default)]
    pub received_date: String,
    #[serde(default)]
    pub bags_received: i64,
    /// Weight in kilograms.
    #[serde(default)]
    pub net_weight_received: f64,
    #[serde(default)]
    pub truck_number: String,
    #[serde(default)]
    pub trucking_agent: String,
    /// Customs house agent.
    #[serde(default)]
    pub cha: String,
    #[serde(default)]
    pub notes: String,

    // -- Routing --
    #[serde(default)]
    pub selling_direct: bool,
    /// Free text; old documents carry values like "customer 1". Routing
    /// compares against [`SALE_TARGET_CUSTOMER`] exactly.
    #[serde(default = "default_sale_target")]
    pub sale_target: String,
    #[serde(default)]
    pub customer_name: String,
}

impl IntakeRecord {
    /// True when this record belongs in the customer collection rather than
    /// the warehouse collection.
    pub fn is_customer_bound(&self) -> bool {
        self.selling_direct && self.sale_target == SALE_TARGET_CUSTOMER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_target_defaults_to_warehouse() {
        let record: IntakeRecord = serde_json::from_str(r#"{"containerNumber":"C1"}"#).unwrap();
        assert_eq!(record.sale_target, SALE_TARGET_WAREHOUSE);
    }

    #[test]
    fn test_customer_bound_predicate() {
        let mut record: IntakeRecord =
            serde_json::from_str(r#"{"containerNumber":"C1"}"#).unwrap();
        assert!(!record.is_customer_bound());

        record.selling_direct = true;
        assert!(!record.is_customer_bound());

        record.sale_target = SALE_TARGET_CUSTOMER.to_string();
        assert!(record.is_customer_bound());

        // Legacy free-text targets stay warehouse-bound; the comparison is
        // exact.
        record.sale_target = "customer 1".to_string();
        assert!(!record.is_customer_bound());
    }
}
