//! The `ShippingApi` trait
//!
//! The engine crate talks to the remote service exclusively through this
//! trait, so the reconciliation and intake logic can be exercised against an
//! in-memory implementation in tests.

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{
    Container, Expense, ExpenseBulkCreate, ExpenseUpdate, IntakeRecord, Shipment,
    ShipmentBulkCreate, ShipmentUpdate,
};

/// Typed operations of the shipping REST service.
///
/// No call retries and none can be cancelled once issued; every error is
/// terminal for that attempt.
#[async_trait]
pub trait ShippingApi: Send + Sync {
    async fn fetch_shipments(&self) -> ClientResult<Vec<Shipment>>;
    async fn fetch_shipments_page(&self, page: u32, limit: u32) -> ClientResult<Vec<Shipment>>;
    async fn fetch_containers(&self) -> ClientResult<Vec<Container>>;
    async fn fetch_warehouse_records(&self) -> ClientResult<Vec<IntakeRecord>>;
    async fn fetch_customer_records(&self) -> ClientResult<Vec<IntakeRecord>>;
    async fn fetch_expenses(&self) -> ClientResult<Vec<Expense>>;

    async fn generate_uid(&self) -> ClientResult<String>;

    async fn create_shipment_bulk(&self, payload: &ShipmentBulkCreate) -> ClientResult<Shipment>;
    async fn create_warehouse_record(&self, record: &IntakeRecord) -> ClientResult<IntakeRecord>;
    async fn create_customer_record(&self, record: &IntakeRecord) -> ClientResult<IntakeRecord>;
    async fn create_expenses_bulk(&self, payload: &ExpenseBulkCreate)
        -> ClientResult<Vec<Expense>>;

    async fn update_shipment(&self, id: &str, update: &ShipmentUpdate) -> ClientResult<Shipment>;
    async fn update_expense(&self, id: &str, update: &ExpenseUpdate) -> ClientResult<Expense>;

    async fn delete_shipment(&self, id: &str) -> ClientResult<()>;
    async fn delete_warehouse_record(&self, id: &str) -> ClientResult<()>;
    async fn delete_customer_record(&self, id: &str) -> ClientResult<()>;
    async fn delete_expense(&self, id: &str) -> ClientResult<()>;
}

#[async_trait]
impl ShippingApi for HttpClient {
    async fn fetch_shipments(&self) -> ClientResult<Vec<Shipment>> {
        HttpClient::fetch_shipments(self).await
    }

    async fn fetch_shipments_page(&self, page: u32, limit: u32) -> ClientResult<Vec<Shipment>> {
        HttpClient::fetch_shipments_page(self, page, limit).await
    }

    async fn fetch_containers(&self) -> ClientResult<Vec<Container>> {
        HttpClient::fetch_containers(self).await
    }

    async fn fetch_warehouse_records(&self) -> ClientResult<Vec<IntakeRecord>> {
        HttpClient::fetch_warehouse_records(self).await
    }

    async fn fetch_customer_records(&self) -> ClientResult<Vec<IntakeRecord>> {
        HttpClient::fetch_customer_records(self).await
    }

    async fn fetch_expenses(&self) -> ClientResult<Vec<Expense>> {
        HttpClient::fetch_expenses(self).await
    }

    async fn generate_uid(&self) -> ClientResult<String> {
        HttpClient::generate_uid(self).await
    }

    async fn create_shipment_bulk(&self, payload: &ShipmentBulkCreate) -> ClientResult<Shipment> {
        HttpClient::create_shipment_bulk(self, payload).await
    }

    async fn create_warehouse_record(&self, record: &IntakeRecord) -> ClientResult<IntakeRecord> {
        HttpClient::create_warehouse_record(self, record).await
    }

    async fn create_customer_record(&self, record: &IntakeRecord) -> ClientResult<IntakeRecord> {
        HttpClient::create_customer_record(self, record).await
    }

    async fn create_expenses_bulk(
        &self,
        payload: &ExpenseBulkCreate,
    ) -> ClientResult<Vec<Expense>> {
        HttpClient::create_expenses_bulk(self, payload).await
    }

    async fn update_shipment(&self, id: &str, update: &ShipmentUpdate) -> ClientResult<Shipment> {
        HttpClient::update_shipment(self, id, update).await
    }

    async fn update_expense(&self, id: &str, update: &ExpenseUpdate) -> ClientResult<Expense> {
        HttpClient::update_expense(self, id, update).await
    }

    async fn delete_shipment(&self, id: &str) -> ClientResult<()> {
        HttpClient::delete_shipment(self, id).await
    }

    async fn delete_warehouse_record(&self, id: &str) -> ClientResult<()> {
        HttpClient::delete_warehouse_record(self, id).await
    }

    async fn delete_customer_record(&self, id: &str) -> ClientResult<()> {
        HttpClient::delete_customer_record(self, id).await
    }

    async fn delete_expense(&self, id: &str) -> ClientResult<()> {
        HttpClient::delete_expense(self, id).await
    }
}
