//! Derived financial metrics
//!
//! Pure functions over the fetched collections. Everything here is cheap
//! enough to recompute eagerly whenever the collections or the active
//! filter change; nothing is cached.

use std::collections::HashSet;

use serde::Serialize;
use shared::models::{Expense, Shipment};

/// VND per USD used for display when a shipment carries no rate of its own.
pub const DEFAULT_EXCHANGE_RATE: f64 = 24_500.0;

/// Total expense for one invoice, in VND.
///
/// Sums every cost line across every expense document whose invoice number
/// matches exactly. Missing amounts count as zero.
pub fn total_expense_for_invoice(expenses: &[Expense], invoice_number: &str) -> f64 {
    expenses
        .iter()
        .filter(|e| e.invoice_number == invoice_number)
        .map(Expense::total)
        .sum()
}

/// Net value of a shipment: declared value plus all associated expenses.
pub fn net_value(shipment: &Shipment, expenses: &[Expense]) -> f64 {
    shipment.total_value_vnd + total_expense_for_invoice(expenses, &shipment.invoice_number)
}

/// Price per metric ton in VND, derived from the stored declared value.
///
/// Zero when the shipment has no net weight; this never divides by zero.
pub fn price_per_metric_ton(shipment: &Shipment) -> f64 {
    if shipment.net_weight > 0.0 {
        (shipment.total_value_vnd * 1000.0) / shipment.net_weight
    } else {
        0.0
    }
}

/// Price per metric ton in USD, using the shipment's own exchange rate when
/// it carries one.
pub fn price_per_metric_ton_usd(shipment: &Shipment) -> f64 {
    let rate = if shipment.exchange_rate > 0.0 {
        shipment.exchange_rate
    } else {
        DEFAULT_EXCHANGE_RATE
    };
    price_per_metric_ton(shipment) / rate
}

/// Headline dashboard figures.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    /// Declared inventory value in VND.
    pub total_value_vnd: f64,
    pub total_containers: usize,
    pub active_shipments: usize,
}

/// Fold the dashboard figures over the currently filtered shipments.
pub fn dashboard_stats(shipments: &[Shipment]) -> DashboardStats {
    DashboardStats {
        total_value_vnd: shipments.iter().map(|s| s.total_value_vnd).sum(),
        total_containers: shipments.iter().map(|s| s.container_ids.len()).sum(),
        active_shipments: shipments.len(),
    }
}

/// Declared / expense / net totals for a filtered shipment set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilteredTotals {
    pub declared_vnd: f64,
    pub expenses_vnd: f64,
    pub net_vnd: f64,
}

pub fn filtered_totals(shipments: &[Shipment], expenses: &[Expense]) -> FilteredTotals {
    let declared_vnd: f64 = shipments.iter().map(|s| s.total_value_vnd).sum();
    let expenses_vnd: f64 = shipments
        .iter()
        .map(|s| total_expense_for_invoice(expenses, &s.invoice_number))
        .sum();
    FilteredTotals {
        declared_vnd,
        expenses_vnd,
        net_vnd: declared_vnd + expenses_vnd,
    }
}

/// Expense dashboard figures.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpenseStats {
    pub total_expense: f64,
    /// Distinct container numbers across the expense set.
    pub total_containers: usize,
    /// Rounded to whole VND; zero when no containers are referenced.
    pub avg_per_container: f64,
}

pub fn expense_stats(expenses: &[Expense]) -> ExpenseStats {
    let total_expense: f64 = expenses.iter().map(Expense::total).sum();
    let total_containers = expenses
        .iter()
        .flat_map(|e| e.container_numbers.iter())
        .collect::<HashSet<_>>()
        .len();
    let avg_per_container = if total_containers > 0 {
        (total_expense / total_containers as f64).round()
    } else {
        0.0
    };
    ExpenseStats {
        total_expense,
        total_containers,
        avg_per_container,
    }
}

/// Format a VND amount with thousands separators, e.g. `₫ 1,234,567`.
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("₫ -{}", grouped)
    } else {
        format!("₫ {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CostLine;

    fn shipment(invoice: &str, value: f64, net_weight: f64) -> Shipment {
        Shipment {
            id: None,
            invoice_number: invoice.to_string(),
            bl_number: String::new(),
            container_number: None,
            container_ids: Vec::new(),
            goods_name: String::new(),
            shipping_line: String::new(),
            arrival_port: String::new(),
            country_of_origin: String::new(),
            gross_weight: 0.0,
            net_weight,
            no_of_bags: 0,
            total_value_vnd: value,
            price_per_kg_usd: 0.0,
            exchange_rate: 0.0,
            eta: None,
            created_at: None,
        }
    }

    fn expense(invoice: &str, containers: &[&str], amounts: &[f64]) -> Expense {
        Expense {
            id: None,
            invoice_number: invoice.to_string(),
            container_numbers: containers.iter().map(|c| c.to_string()).collect(),
            expense_date: None,
            remarks: String::new(),
            costs: amounts
                .iter()
                .map(|a| CostLine {
                    cost_type: "Local charges".to_string(),
                    amount: Some(*a),
                })
                .collect(),
        }
    }

    #[test]
    fn test_total_expense_spans_documents() {
        let expenses = vec![
            expense("INV-1", &[], &[100.0, 50.0]),
            expense("INV-1", &[], &[25.0]),
            expense("INV-2", &[], &[999.0]),
        ];
        assert_eq!(total_expense_for_invoice(&expenses, "INV-1"), 175.0);
    }

    #[test]
    fn test_total_expense_zero_for_unknown_invoice() {
        assert_eq!(total_expense_for_invoice(&[], "INV-1"), 0.0);
    }

    #[test]
    fn test_net_value_is_declared_plus_expenses() {
        let s = shipment("INV-1", 1_000_000.0, 25_000.0);
        let expenses = vec![expense("INV-1", &[], &[200_000.0, 300_000.0])];
        assert_eq!(
            net_value(&s, &expenses),
            s.total_value_vnd + total_expense_for_invoice(&expenses, "INV-1")
        );
        assert_eq!(net_value(&s, &expenses), 1_500_000.0);
    }

    #[test]
    fn test_price_per_metric_ton() {
        let s = shipment("INV-1", 490_000_000.0, 25_000.0);
        assert_eq!(price_per_metric_ton(&s), 19_600_000.0);
    }

    #[test]
    fn test_price_per_metric_ton_zero_weight() {
        let s = shipment("INV-1", 490_000_000.0, 0.0);
        assert_eq!(price_per_metric_ton(&s), 0.0);
    }

    #[test]
    fn test_price_per_metric_ton_usd_default_rate() {
        let s = shipment("INV-1", 490_000_000.0, 25_000.0);
        assert_eq!(price_per_metric_ton_usd(&s), 19_600_000.0 / 24_500.0);
    }

    #[test]
    fn test_dashboard_stats_fold() {
        let mut a = shipment("INV-1", 100.0, 0.0);
        a.container_ids = vec!["U-1".to_string(), "U-2".to_string()];
        let mut b = shipment("INV-2", 200.0, 0.0);
        b.container_ids = vec!["U-3".to_string()];

        let stats = dashboard_stats(&[a, b]);
        assert_eq!(stats.total_value_vnd, 300.0);
        assert_eq!(stats.total_containers, 3);
        assert_eq!(stats.active_shipments, 2);
    }

    #[test]
    fn test_expense_stats_distinct_containers() {
        let expenses = vec![
            expense("INV-1", &["C1", "C2"], &[100.0]),
            expense("INV-2", &["C2", "C3"], &[200.0]),
        ];
        let stats = expense_stats(&expenses);
        assert_eq!(stats.total_expense, 300.0);
        assert_eq!(stats.total_containers, 3);
        assert_eq!(stats.avg_per_container, 100.0);
    }

    #[test]
    fn test_expense_stats_no_containers() {
        let stats = expense_stats(&[expense("INV-1", &[], &[100.0])]);
        assert_eq!(stats.avg_per_container, 0.0);
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(0.0), "₫ 0");
        assert_eq!(format_vnd(1_234.0), "₫ 1,234");
        assert_eq!(format_vnd(1_234_567.4), "₫ 1,234,567");
        assert_eq!(format_vnd(-9_500.0), "₫ -9,500");
    }
}
