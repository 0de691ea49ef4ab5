//! Cross-entity joiner
//!
//! Joins the fetched collections by invoice number and container number.
//! Every match is an exact, case-sensitive string comparison; invoice
//! numbers are free text and nothing enforces referential integrity, so the
//! soft-join policy lives in this one module and nowhere else.

use std::collections::HashMap;

use shared::models::{Container, Expense, Shipment};

/// Shipment-derived metadata for one container number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub container_number: String,
    pub invoice_number: String,
    /// Parent shipment document ID, when the document carries one.
    pub shipment_id: Option<String>,
}

/// Lookup indexes over one snapshot of the collections.
///
/// Cheap to rebuild; callers rebuild it whenever the underlying collections
/// change rather than patching it in place.
#[derive(Debug, Default)]
pub struct Joiner {
    expenses_by_invoice: HashMap<String, Vec<Expense>>,
    container_refs: HashMap<String, ContainerRef>,
    containers_by_uid: HashMap<String, Container>,
}

impl Joiner {
    /// Build the indexes from one snapshot of the collections.
    pub fn build(shipments: &[Shipment], containers: &[Container], expenses: &[Expense]) -> Self {
        let mut expenses_by_invoice: HashMap<String, Vec<Expense>> = HashMap::new();
        for expense in expenses {
            expenses_by_invoice
                .entry(expense.invoice_number.clone())
                .or_default()
                .push(expense.clone());
        }

        // A shipment with no container list contributes nothing here.
        let mut container_refs = HashMap::new();
        for shipment in shipments {
            for number in shipment.container_numbers() {
                container_refs.insert(
                    number.clone(),
                    ContainerRef {
                        container_number: number,
                        invoice_number: shipment.invoice_number.clone(),
                        shipment_id: shipment.id.clone(),
                    },
                );
            }
        }

        let containers_by_uid = containers
            .iter()
            .map(|c| (c.unique_id.clone(), c.clone()))
            .collect();

        Self {
            expenses_by_invoice,
            container_refs,
            containers_by_uid,
        }
    }

    /// Every expense document for an invoice. Invoices with no expenses map
    /// to an empty slice; this never fails.
    pub fn expenses_for_invoice(&self, invoice_number: &str) -> &[Expense] {
        self.expenses_by_invoice
            .get(invoice_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Shipment-derived metadata for a container number.
    pub fn container_ref(&self, container_number: &str) -> Option<&ContainerRef> {
        self.container_refs.get(container_number)
    }

    /// Full container detail by its opaque unique ID.
    pub fn container_by_uid(&self, unique_id: &str) -> Option<&Container> {
        self.containers_by_uid.get(unique_id)
    }

    /// Containers belonging to a shipment, matched through its
    /// `containerIds` list of opaque IDs.
    pub fn containers_for_shipment(&self, shipment: &Shipment) -> Vec<&Container> {
        shipment
            .container_ids
            .iter()
            .filter_map(|uid| self.containers_by_uid.get(uid))
            .collect()
    }
}
