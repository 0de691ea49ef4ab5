//! Date-range and search filters
//!
//! Filtering is deliberately looser than joining: search is
//! case-insensitive substring matching, while all cross-entity joins stay
//! exact. Both behaviors are load-bearing and must not be unified.

use chrono::NaiveDate;

use shared::models::{Expense, Shipment};
use shared::util::parse_iso_date;

/// Inclusive calendar date range. Unset bounds always pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Parse bounds from ISO date strings; malformed bounds become unset.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_iso_date),
            to: to.and_then(parse_iso_date),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether a record dated `date` passes the range.
    ///
    /// A record with a missing or unparseable date fails any bound that is
    /// set, and passes when both bounds are unset.
    pub fn contains(&self, date: Option<&str>) -> bool {
        let parsed = date.and_then(parse_iso_date);

        if let Some(from) = self.from {
            match parsed {
                Some(d) if d >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = self.to {
            match parsed {
                Some(d) if d <= to => {}
                _ => return false,
            }
        }
        true
    }
}

/// Shipment table filter: free-text search, invoice filter, creation date.
#[derive(Debug, Clone, Default)]
pub struct ShipmentFilter {
    /// Case-insensitive substring match on BL or invoice number.
    pub search: String,
    /// Case-insensitive substring match on invoice number only.
    pub invoice: String,
    pub dates: DateRange,
}

impl ShipmentFilter {
    pub fn matches(&self, shipment: &Shipment) -> bool {
        let search = self.search.to_lowercase();
        let search_match = search.is_empty()
            || shipment.bl_number.to_lowercase().contains(&search)
            || shipment.invoice_number.to_lowercase().contains(&search);

        let invoice = self.invoice.to_lowercase();
        let invoice_match =
            invoice.is_empty() || shipment.invoice_number.to_lowercase().contains(&invoice);

        search_match && invoice_match && self.dates.contains(shipment.created_at.as_deref())
    }

    pub fn apply<'a>(&self, shipments: &'a [Shipment]) -> Vec<&'a Shipment> {
        shipments.iter().filter(|s| self.matches(s)).collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Filter expenses by expense date.
pub fn filter_expenses<'a>(expenses: &'a [Expense], dates: &DateRange) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| dates.contains(e.expense_date.as_deref()))
        .collect()
}
