//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    Container, Expense, ExpenseBulkCreate, ExpenseUpdate, IntakeRecord, Shipment,
    ShipmentBulkCreate, ShipmentUpdate,
};
use shared::response::UidResponse;

/// HTTP client for making network requests to the shipping API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        let client = builder.build().expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, discarding the response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }

        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    fn status_error(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }

    // ========== Shipment API ==========

    /// Fetch every shipment
    pub async fn fetch_shipments(&self) -> ClientResult<Vec<Shipment>> {
        self.get("/api/shipment/all").await
    }

    /// Fetch one page of shipments
    pub async fn fetch_shipments_page(&self, page: u32, limit: u32) -> ClientResult<Vec<Shipment>> {
        self.get(&format!("/api/shipment/all?page={}&limit={}", page, limit))
            .await
    }

    /// Submit a shipment together with its containers
    pub async fn create_shipment_bulk(
        &self,
        payload: &ShipmentBulkCreate,
    ) -> ClientResult<Shipment> {
        self.post("/api/shipment/bulk", payload).await
    }

    /// Update a shipment, returning the updated document
    pub async fn update_shipment(
        &self,
        id: &str,
        update: &ShipmentUpdate,
    ) -> ClientResult<Shipment> {
        self.put(&format!("/api/shipment/update/{}", id), update)
            .await
    }

    /// Delete a shipment
    pub async fn delete_shipment(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/shipment/delete/{}", id)).await
    }

    // ========== Container API ==========

    /// Fetch every container
    pub async fn fetch_containers(&self) -> ClientResult<Vec<Container>> {
        self.get("/api/container/all").await
    }

    /// Request a fresh opaque container ID from the server
    pub async fn generate_uid(&self) -> ClientResult<String> {
        let response: UidResponse = self.get("/api/generate-uid").await?;
        Ok(response.uid)
    }

    // ========== Warehouse API ==========

    /// Fetch every warehouse record
    pub async fn fetch_warehouse_records(&self) -> ClientResult<Vec<IntakeRecord>> {
        self.get("/api/warehouse/all").await
    }

    /// Create one warehouse record, returning the stored document
    pub async fn create_warehouse_record(
        &self,
        record: &IntakeRecord,
    ) -> ClientResult<IntakeRecord> {
        self.post("/api/warehouse", record).await
    }

    /// Delete a warehouse record
    pub async fn delete_warehouse_record(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/warehouse/{}", id)).await
    }

    // ========== Customer API ==========

    /// Fetch every customer record
    pub async fn fetch_customer_records(&self) -> ClientResult<Vec<IntakeRecord>> {
        self.get("/api/customer/all").await
    }

    /// Create one customer record, returning the stored document
    pub async fn create_customer_record(
        &self,
        record: &IntakeRecord,
    ) -> ClientResult<IntakeRecord> {
        self.post("/api/customer", record).await
    }

    /// Delete a customer record
    pub async fn delete_customer_record(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/customer/{}", id)).await
    }

    // ========== Expense API ==========

    /// Fetch every expense document
    pub async fn fetch_expenses(&self) -> ClientResult<Vec<Expense>> {
        self.get("/api/expenses/all").await
    }

    /// Create one expense document per selected container
    pub async fn create_expenses_bulk(
        &self,
        payload: &ExpenseBulkCreate,
    ) -> ClientResult<Vec<Expense>> {
        self.post("/api/expenses/bulk-create", payload).await
    }

    /// Update an expense document
    pub async fn update_expense(&self, id: &str, update: &ExpenseUpdate) -> ClientResult<Expense> {
        self.put(&format!("/api/expenses/{}", id), update).await
    }

    /// Delete an expense document
    pub async fn delete_expense(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/expenses/{}", id)).await
    }
}
