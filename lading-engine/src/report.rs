//! Report shaping for document export
//!
//! The engine only assembles the joined data a document needs; turning a
//! report into a paginated PDF/HTML document is the job of an external
//! rendering collaborator behind [`ReportRenderer`].

use serde::Serialize;

use shared::models::{Expense, IntakeRecord, Shipment};
use shared::util::today_iso;

use crate::error::{EngineError, EngineResult};
use crate::metrics::total_expense_for_invoice;

/// Everything a warehouse receipt report for one invoice contains.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceReport {
    pub invoice_number: String,
    /// ISO date the report was generated.
    pub report_date: String,
    /// The invoice's shipment, when one exists in the working set.
    pub shipment: Option<Shipment>,
    pub records: Vec<IntakeRecord>,
    pub expenses: Vec<Expense>,
    /// Sum of all expense cost lines, in VND.
    pub total_expense: f64,
}

/// Everything a shipment details report contains.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentReport {
    pub report_date: String,
    pub shipment: Shipment,
    pub records: Vec<IntakeRecord>,
    pub expenses: Vec<Expense>,
}

/// Assemble the warehouse receipt report for one invoice.
///
/// Fails when the invoice has no warehouse records; that is caught here,
/// before any renderer is invoked.
pub fn build_invoice_report(
    invoice_number: &str,
    shipments: &[Shipment],
    records: &[IntakeRecord],
    expenses: &[Expense],
) -> EngineResult<InvoiceReport> {
    let invoice_records: Vec<IntakeRecord> = records
        .iter()
        .filter(|r| r.invoice_number == invoice_number)
        .cloned()
        .collect();
    if invoice_records.is_empty() {
        return Err(EngineError::NotFound(format!(
            "no warehouse records for invoice {}",
            invoice_number
        )));
    }

    let invoice_expenses: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.invoice_number == invoice_number)
        .cloned()
        .collect();
    let total_expense = total_expense_for_invoice(&invoice_expenses, invoice_number);

    Ok(InvoiceReport {
        invoice_number: invoice_number.to_string(),
        report_date: today_iso(),
        shipment: shipments
            .iter()
            .find(|s| s.invoice_number == invoice_number)
            .cloned(),
        records: invoice_records,
        expenses: invoice_expenses,
        total_expense,
    })
}

/// Assemble the details report for one shipment.
pub fn build_shipment_report(
    shipment: &Shipment,
    records: &[IntakeRecord],
    expenses: &[Expense],
) -> ShipmentReport {
    let invoice = &shipment.invoice_number;
    ShipmentReport {
        report_date: today_iso(),
        shipment: shipment.clone(),
        records: records
            .iter()
            .filter(|r| &r.invoice_number == invoice)
            .cloned()
            .collect(),
        expenses: expenses
            .iter()
            .filter(|e| &e.invoice_number == invoice)
            .cloned()
            .collect(),
    }
}

/// External document-rendering collaborator.
///
/// Implementations take a shaped report and produce the bytes of a
/// paginated document.
pub trait ReportRenderer {
    fn render_invoice(&self, report: &InvoiceReport) -> EngineResult<Vec<u8>>;
    fn render_shipment(&self, report: &ShipmentReport) -> EngineResult<Vec<u8>>;
}
