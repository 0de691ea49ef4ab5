//! Expense Model

use serde::{Deserialize, Serialize};

/// One cost line of an expense document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    #[serde(default)]
    pub cost_type: String,
    /// Amount in VND. Missing amounts count as zero, never as an error.
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Expense entity
///
/// One per bulk-create event, referencing an invoice and the container
/// numbers the costs apply to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub container_numbers: Vec<String>,
    /// ISO date.
    #[serde(default)]
    pub expense_date: Option<String>,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub costs: Vec<CostLine>,
}

impl Expense {
    /// Sum of all cost-line amounts, in VND.
    pub fn total(&self) -> f64 {
        self.costs.iter().map(|c| c.amount.unwrap_or(0.0)).sum()
    }
}

/// Bulk create payload (`POST /api/expenses/bulk-create`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBulkCreate {
    pub container_numbers: Vec<String>,
    pub expense_date: String,
    pub remarks: String,
    pub costs: Vec<CostLine>,
}

/// Update payload (`PUT /api/expenses/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub expense_date: String,
    pub remarks: String,
    pub costs: Vec<CostLine>,
}
