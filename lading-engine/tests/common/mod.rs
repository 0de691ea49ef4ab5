#![allow(dead_code)]

//! In-memory `ShippingApi` for engine tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use lading_client::{ClientError, ClientResult, ShippingApi};
use shared::models::{
    Container, ContainerNumbers, CostLine, Expense, ExpenseBulkCreate, ExpenseUpdate,
    IntakeRecord, Shipment, ShipmentBulkCreate, ShipmentUpdate,
};

/// Mock shipping API backed by in-memory collections, with per-operation
/// failure switches and call counters.
#[derive(Default)]
pub struct MockApi {
    pub shipments: Mutex<Vec<Shipment>>,
    pub containers: Mutex<Vec<Container>>,
    pub warehouse_records: Mutex<Vec<IntakeRecord>>,
    pub customer_records: Mutex<Vec<IntakeRecord>>,
    pub expenses: Mutex<Vec<Expense>>,

    pub shipment_fetches: AtomicUsize,
    pub expense_fetches: AtomicUsize,
    pub warehouse_creates: AtomicUsize,
    pub customer_creates: AtomicUsize,

    pub fail_customer_fetch: AtomicBool,
    pub fail_creates: AtomicBool,
    pub fail_deletes: AtomicBool,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn simulated() -> ClientError {
        ClientError::Internal("simulated failure".to_string())
    }
}

#[async_trait]
impl ShippingApi for MockApi {
    async fn fetch_shipments(&self) -> ClientResult<Vec<Shipment>> {
        self.shipment_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.shipments.lock().unwrap().clone())
    }

    async fn fetch_shipments_page(&self, page: u32, limit: u32) -> ClientResult<Vec<Shipment>> {
        self.shipment_fetches.fetch_add(1, Ordering::SeqCst);
        let all = self.shipments.lock().unwrap();
        let start = ((page.max(1) - 1) * limit) as usize;
        Ok(all.iter().skip(start).take(limit as usize).cloned().collect())
    }

    async fn fetch_containers(&self) -> ClientResult<Vec<Container>> {
        Ok(self.containers.lock().unwrap().clone())
    }

    async fn fetch_warehouse_records(&self) -> ClientResult<Vec<IntakeRecord>> {
        Ok(self.warehouse_records.lock().unwrap().clone())
    }

    async fn fetch_customer_records(&self) -> ClientResult<Vec<IntakeRecord>> {
        if self.fail_customer_fetch.load(Ordering::SeqCst) {
            return Err(ClientError::NotFound("customer endpoint absent".to_string()));
        }
        Ok(self.customer_records.lock().unwrap().clone())
    }

    async fn fetch_expenses(&self) -> ClientResult<Vec<Expense>> {
        self.expense_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.expenses.lock().unwrap().clone())
    }

    async fn generate_uid(&self) -> ClientResult<String> {
        Ok(uuid::Uuid::new_v4().to_string())
    }

    async fn create_shipment_bulk(&self, payload: &ShipmentBulkCreate) -> ClientResult<Shipment> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(Self::simulated());
        }
        let shipment = Shipment {
            id: Some(uuid::Uuid::new_v4().to_string()),
            invoice_number: payload.invoice_number.clone(),
            bl_number: payload.bl_number.clone(),
            container_number: Some(ContainerNumbers::Many(
                payload
                    .containers
                    .iter()
                    .map(|c| c.container_number.clone())
                    .collect(),
            )),
            container_ids: payload.containers.iter().map(|c| c.unique_id.clone()).collect(),
            goods_name: payload.goods_name.clone(),
            shipping_line: payload.shipping_line.clone(),
            arrival_port: payload.arrival_port.clone(),
            country_of_origin: payload.country_of_origin.clone(),
            gross_weight: payload.gross_weight,
            net_weight: payload.net_weight,
            no_of_bags: payload.no_of_bags,
            total_value_vnd: payload.total_value_vnd,
            price_per_kg_usd: payload.price_per_kg_usd,
            exchange_rate: payload.exchange_rate,
            eta: Some(payload.eta.clone()),
            created_at: None,
        };
        self.shipments.lock().unwrap().push(shipment.clone());
        Ok(shipment)
    }

    async fn create_warehouse_record(&self, record: &IntakeRecord) -> ClientResult<IntakeRecord> {
        self.warehouse_creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(Self::simulated());
        }
        let mut stored = record.clone();
        stored.id = Some(uuid::Uuid::new_v4().to_string());
        self.warehouse_records.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn create_customer_record(&self, record: &IntakeRecord) -> ClientResult<IntakeRecord> {
        self.customer_creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(Self::simulated());
        }
        let mut stored = record.clone();
        stored.id = Some(uuid::Uuid::new_v4().to_string());
        self.customer_records.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn create_expenses_bulk(
        &self,
        payload: &ExpenseBulkCreate,
    ) -> ClientResult<Vec<Expense>> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(Self::simulated());
        }
        let created: Vec<Expense> = payload
            .container_numbers
            .iter()
            .map(|_| Expense {
                id: Some(uuid::Uuid::new_v4().to_string()),
                invoice_number: String::new(),
                container_numbers: payload.container_numbers.clone(),
                expense_date: Some(payload.expense_date.clone()),
                remarks: payload.remarks.clone(),
                costs: payload.costs.clone(),
            })
            .collect();
        self.expenses.lock().unwrap().extend(created.clone());
        Ok(created)
    }

    async fn update_shipment(&self, id: &str, update: &ShipmentUpdate) -> ClientResult<Shipment> {
        let mut shipments = self.shipments.lock().unwrap();
        let shipment = shipments
            .iter_mut()
            .find(|s| s.id.as_deref() == Some(id))
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
        shipment.invoice_number = update.invoice_number.clone();
        shipment.bl_number = update.bl_number.clone();
        shipment.goods_name = update.goods_name.clone();
        shipment.shipping_line = update.shipping_line.clone();
        shipment.arrival_port = update.arrival_port.clone();
        shipment.net_weight = update.net_weight;
        shipment.total_value_vnd = update.total_value_vnd;
        shipment.eta = update.eta.clone();
        Ok(shipment.clone())
    }

    async fn update_expense(&self, id: &str, update: &ExpenseUpdate) -> ClientResult<Expense> {
        let mut expenses = self.expenses.lock().unwrap();
        let expense = expenses
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
        expense.expense_date = Some(update.expense_date.clone());
        expense.remarks = update.remarks.clone();
        expense.costs = update.costs.clone();
        Ok(expense.clone())
    }

    async fn delete_shipment(&self, id: &str) -> ClientResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Self::simulated());
        }
        self.shipments
            .lock()
            .unwrap()
            .retain(|s| s.id.as_deref() != Some(id));
        Ok(())
    }

    async fn delete_warehouse_record(&self, id: &str) -> ClientResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Self::simulated());
        }
        self.warehouse_records
            .lock()
            .unwrap()
            .retain(|r| r.id.as_deref() != Some(id));
        Ok(())
    }

    async fn delete_customer_record(&self, id: &str) -> ClientResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Self::simulated());
        }
        self.customer_records
            .lock()
            .unwrap()
            .retain(|r| r.id.as_deref() != Some(id));
        Ok(())
    }

    async fn delete_expense(&self, id: &str) -> ClientResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Self::simulated());
        }
        self.expenses
            .lock()
            .unwrap()
            .retain(|e| e.id.as_deref() != Some(id));
        Ok(())
    }
}

// ========== Entity builders ==========

pub fn shipment(id: &str, invoice: &str, containers: &[&str]) -> Shipment {
    Shipment {
        id: Some(id.to_string()),
        invoice_number: invoice.to_string(),
        bl_number: format!("BL-{}", invoice),
        container_number: Some(ContainerNumbers::Many(
            containers.iter().map(|c| c.to_string()).collect(),
        )),
        container_ids: Vec::new(),
        goods_name: "Rice 5%".to_string(),
        shipping_line: "MAERSK".to_string(),
        arrival_port: "Cat Lai".to_string(),
        country_of_origin: "INDIA".to_string(),
        gross_weight: 26_000.0,
        net_weight: 25_000.0,
        no_of_bags: 500,
        total_value_vnd: 300_000_000.0,
        price_per_kg_usd: 0.48,
        exchange_rate: 24_500.0,
        eta: Some("2024-03-01".to_string()),
        created_at: Some("2024-01-10".to_string()),
    }
}

pub fn expense(id: &str, invoice: &str, amount: f64) -> Expense {
    Expense {
        id: Some(id.to_string()),
        invoice_number: invoice.to_string(),
        container_numbers: Vec::new(),
        expense_date: Some("2024-01-20".to_string()),
        remarks: String::new(),
        costs: vec![CostLine {
            cost_type: "Local charges".to_string(),
            amount: Some(amount),
        }],
    }
}
