//! Draft builders for the two bulk entry forms
//!
//! Drafts accumulate user input in memory and validate on `build`, so a
//! missing required field is caught before anything is sent over the wire.

use shared::models::{CostLine, ExpenseBulkCreate, ShipmentBulkCreate, ShipmentContainerEntry};

use crate::error::{EngineError, EngineResult};
use crate::metrics::DEFAULT_EXCHANGE_RATE;

/// Bulk shipment entry: container rows plus shipment-level fields.
///
/// Gross/net weight and bag totals always roll up from the container rows;
/// the declared VND value is derived once here and stored with the
/// shipment, never recomputed later.
#[derive(Debug, Clone)]
pub struct ShipmentDraft {
    pub invoice_number: String,
    pub bl_number: String,
    pub shipping_line: String,
    pub goods_name: String,
    pub arrival_port: String,
    pub country_of_origin: String,
    /// ISO date.
    pub eta: String,
    pub price_per_kg_usd: f64,
    pub exchange_rate: f64,
    pub containers: Vec<ShipmentContainerEntry>,
}

impl Default for ShipmentDraft {
    fn default() -> Self {
        Self {
            invoice_number: String::new(),
            bl_number: String::new(),
            shipping_line: String::new(),
            goods_name: String::new(),
            arrival_port: String::new(),
            country_of_origin: String::new(),
            eta: String::new(),
            price_per_kg_usd: 0.0,
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            containers: Vec::new(),
        }
    }
}

impl ShipmentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_container(&mut self, entry: ShipmentContainerEntry) {
        self.containers.push(entry);
    }

    /// Remove a container row by its opaque ID.
    pub fn remove_container(&mut self, unique_id: &str) {
        self.containers.retain(|c| c.unique_id != unique_id);
    }

    pub fn total_gross_weight(&self) -> f64 {
        self.containers.iter().map(|c| c.gross_weight).sum()
    }

    pub fn total_net_weight(&self) -> f64 {
        self.containers.iter().map(|c| c.net_weight).sum()
    }

    pub fn total_bags(&self) -> i64 {
        self.containers.iter().map(|c| c.no_of_bags).sum()
    }

    /// Declared value in VND: net weight × USD price per kg × exchange rate.
    pub fn total_value_vnd(&self) -> f64 {
        self.total_net_weight() * self.price_per_kg_usd * self.exchange_rate
    }

    /// Validate and produce the bulk create payload.
    pub fn build(&self) -> EngineResult<ShipmentBulkCreate> {
        if self.invoice_number.trim().is_empty() {
            return Err(EngineError::Validation("invoice number is required".into()));
        }
        if self.bl_number.trim().is_empty() {
            return Err(EngineError::Validation("BL number is required".into()));
        }
        if self.eta.trim().is_empty() {
            return Err(EngineError::Validation("ETA is required".into()));
        }
        if self.price_per_kg_usd <= 0.0 {
            return Err(EngineError::Validation(
                "price per kg must be positive".into(),
            ));
        }
        if self.exchange_rate <= 0.0 {
            return Err(EngineError::Validation(
                "exchange rate must be positive".into(),
            ));
        }
        if self.containers.is_empty()
            || self
                .containers
                .iter()
                .any(|c| c.container_number.trim().is_empty())
        {
            return Err(EngineError::Validation(
                "every container row needs a container number".into(),
            ));
        }

        Ok(ShipmentBulkCreate {
            containers: self.containers.clone(),
            invoice_number: self.invoice_number.clone(),
            bl_number: self.bl_number.clone(),
            gross_weight: self.total_gross_weight(),
            net_weight: self.total_net_weight(),
            no_of_bags: self.total_bags(),
            shipping_line: self.shipping_line.clone(),
            goods_name: self.goods_name.clone(),
            arrival_port: self.arrival_port.clone(),
            country_of_origin: self.country_of_origin.clone(),
            eta: self.eta.clone(),
            price_per_kg_usd: self.price_per_kg_usd,
            exchange_rate: self.exchange_rate,
            total_value_vnd: self.total_value_vnd(),
        })
    }
}

/// Bulk expense entry against a set of selected containers.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub container_numbers: Vec<String>,
    /// ISO date.
    pub expense_date: String,
    pub remarks: String,
    pub costs: Vec<CostLine>,
}

impl ExpenseDraft {
    /// Start a draft for the selected containers, with one empty cost row.
    pub fn for_containers(container_numbers: Vec<String>) -> Self {
        Self {
            container_numbers,
            expense_date: String::new(),
            remarks: String::new(),
            costs: vec![CostLine::default()],
        }
    }

    pub fn add_cost_row(&mut self) {
        self.costs.push(CostLine::default());
    }

    /// Remove a cost row; the last remaining row cannot be removed.
    pub fn remove_cost_row(&mut self, index: usize) {
        if self.costs.len() > 1 && index < self.costs.len() {
            self.costs.remove(index);
        }
    }

    /// Running total in VND.
    pub fn total(&self) -> f64 {
        self.costs.iter().map(|c| c.amount.unwrap_or(0.0)).sum()
    }

    /// Validate and produce the bulk create payload.
    pub fn build(&self) -> EngineResult<ExpenseBulkCreate> {
        if self.container_numbers.is_empty() {
            return Err(EngineError::Validation("no containers selected".into()));
        }
        if self.expense_date.trim().is_empty() {
            return Err(EngineError::Validation("expense date is required".into()));
        }
        if self
            .costs
            .iter()
            .any(|c| c.cost_type.trim().is_empty() || c.amount.is_none())
        {
            return Err(EngineError::Validation(
                "every cost line needs a type and an amount".into(),
            ));
        }

        Ok(ExpenseBulkCreate {
            container_numbers: self.container_numbers.clone(),
            expense_date: self.expense_date.clone(),
            remarks: self.remarks.clone(),
            costs: self.costs.clone(),
        })
    }
}
