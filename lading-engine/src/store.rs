//! Shared data store
//!
//! One read-through cache per entity type, shared by every screen, instead
//! of the redundant per-component fetches the business previously lived
//! with. The store only mirrors server state for the duration of a view
//! session: mutations go to the API first and the cache is patched on
//! success, so a failed write leaves local state at its pre-attempt values.

use std::sync::Arc;

use tokio::sync::RwLock;

use lading_client::ShippingApi;
use shared::models::{
    Container, Expense, ExpenseBulkCreate, ExpenseUpdate, IntakeRecord, Shipment,
    ShipmentBulkCreate, ShipmentUpdate,
};

use crate::config::DEFAULT_PAGE_LIMIT;
use crate::error::EngineResult;
use crate::joiner::Joiner;

/// One consistent copy of every collection.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub shipments: Vec<Shipment>,
    pub containers: Vec<Container>,
    pub warehouse_records: Vec<IntakeRecord>,
    pub customer_records: Vec<IntakeRecord>,
    pub expenses: Vec<Expense>,
}

impl StoreSnapshot {
    /// Build the join indexes over this snapshot.
    pub fn joiner(&self) -> Joiner {
        Joiner::build(&self.shipments, &self.containers, &self.expenses)
    }
}

/// Read-through cache over the shipping API.
pub struct DataStore<A: ShippingApi> {
    api: Arc<A>,
    page_limit: u32,
    shipments: RwLock<Option<Vec<Shipment>>>,
    containers: RwLock<Option<Vec<Container>>>,
    warehouse_records: RwLock<Option<Vec<IntakeRecord>>>,
    customer_records: RwLock<Option<Vec<IntakeRecord>>>,
    expenses: RwLock<Option<Vec<Expense>>>,
}

impl<A: ShippingApi> DataStore<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            page_limit: DEFAULT_PAGE_LIMIT,
            shipments: RwLock::new(None),
            containers: RwLock::new(None),
            warehouse_records: RwLock::new(None),
            customer_records: RwLock::new(None),
            expenses: RwLock::new(None),
        }
    }

    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit;
        self
    }

    /// The API handle this store writes through.
    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Fetch every collection concurrently and replace the cache.
    ///
    /// The four core collections must all load; the customer-records fetch
    /// is a soft dependency and falls back to an empty list so the rest of
    /// the view can still render.
    pub async fn refresh_all(&self) -> EngineResult<()> {
        let (shipments, containers, warehouse, expenses, customers) = tokio::join!(
            self.api.fetch_shipments(),
            self.api.fetch_containers(),
            self.api.fetch_warehouse_records(),
            self.api.fetch_expenses(),
            self.api.fetch_customer_records(),
        );

        let shipments = shipments?;
        let containers = containers?;
        let warehouse = warehouse?;
        let expenses = expenses?;
        let customers = match customers {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Customer records unavailable, continuing with empty list");
                Vec::new()
            }
        };

        tracing::info!(
            shipments = shipments.len(),
            containers = containers.len(),
            warehouse = warehouse.len(),
            customers = customers.len(),
            expenses = expenses.len(),
            "Collections refreshed"
        );

        *self.shipments.write().await = Some(shipments);
        *self.containers.write().await = Some(containers);
        *self.warehouse_records.write().await = Some(warehouse);
        *self.customer_records.write().await = Some(customers);
        *self.expenses.write().await = Some(expenses);
        Ok(())
    }

    /// Drop every cached collection; the next read fetches fresh data.
    pub async fn invalidate_all(&self) {
        *self.shipments.write().await = None;
        *self.containers.write().await = None;
        *self.warehouse_records.write().await = None;
        *self.customer_records.write().await = None;
        *self.expenses.write().await = None;
    }

    // ========== Read-through accessors ==========

    pub async fn shipments(&self) -> EngineResult<Vec<Shipment>> {
        if let Some(cached) = self.shipments.read().await.as_ref() {
            return Ok(cached.clone());
        }
        let fetched = self.api.fetch_shipments().await?;
        *self.shipments.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    pub async fn containers(&self) -> EngineResult<Vec<Container>> {
        if let Some(cached) = self.containers.read().await.as_ref() {
            return Ok(cached.clone());
        }
        let fetched = self.api.fetch_containers().await?;
        *self.containers.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    pub async fn warehouse_records(&self) -> EngineResult<Vec<IntakeRecord>> {
        if let Some(cached) = self.warehouse_records.read().await.as_ref() {
            return Ok(cached.clone());
        }
        let fetched = self.api.fetch_warehouse_records().await?;
        *self.warehouse_records.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    /// Customer records, soft-failing to an empty list when the endpoint
    /// is unavailable.
    pub async fn customer_records(&self) -> EngineResult<Vec<IntakeRecord>> {
        if let Some(cached) = self.customer_records.read().await.as_ref() {
            return Ok(cached.clone());
        }
        let fetched = match self.api.fetch_customer_records().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Customer records unavailable, continuing with empty list");
                Vec::new()
            }
        };
        *self.customer_records.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    pub async fn expenses(&self) -> EngineResult<Vec<Expense>> {
        if let Some(cached) = self.expenses.read().await.as_ref() {
            return Ok(cached.clone());
        }
        let fetched = self.api.fetch_expenses().await?;
        *self.expenses.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    /// A consistent snapshot of all five collections, loading any that are
    /// not cached yet.
    pub async fn snapshot(&self) -> EngineResult<StoreSnapshot> {
        let (shipments, containers, warehouse_records, customer_records, expenses) = tokio::join!(
            self.shipments(),
            self.containers(),
            self.warehouse_records(),
            self.customer_records(),
            self.expenses(),
        );
        Ok(StoreSnapshot {
            shipments: shipments?,
            containers: containers?,
            warehouse_records: warehouse_records?,
            customer_records: customer_records?,
            expenses: expenses?,
        })
    }

    /// Load one page of shipments into the cache, replacing it for page 1
    /// and appending otherwise. Returns whether more pages may remain (a
    /// page shorter than the limit means the end was reached).
    pub async fn load_shipments_page(&self, page: u32) -> EngineResult<bool> {
        let fetched = self
            .api
            .fetch_shipments_page(page, self.page_limit)
            .await?;
        let more = fetched.len() as u32 >= self.page_limit;

        let mut guard = self.shipments.write().await;
        if page <= 1 {
            *guard = Some(fetched);
        } else {
            guard.get_or_insert_with(Vec::new).extend(fetched);
        }
        Ok(more)
    }

    // ========== Write-through mutations ==========

    /// Submit a bulk shipment. The server creates the containers alongside,
    /// so both caches are invalidated rather than patched.
    pub async fn create_shipment_bulk(
        &self,
        payload: &ShipmentBulkCreate,
    ) -> EngineResult<Shipment> {
        let created = self.api.create_shipment_bulk(payload).await?;
        *self.shipments.write().await = None;
        *self.containers.write().await = None;
        tracing::info!(invoice = %payload.invoice_number, "Bulk shipment submitted");
        Ok(created)
    }

    pub async fn update_shipment(
        &self,
        id: &str,
        update: &ShipmentUpdate,
    ) -> EngineResult<Shipment> {
        let updated = self.api.update_shipment(id, update).await?;
        if let Some(list) = self.shipments.write().await.as_mut() {
            if let Some(slot) = list.iter_mut().find(|s| s.id.as_deref() == Some(id)) {
                *slot = updated.clone();
            }
        }
        Ok(updated)
    }

    pub async fn delete_shipment(&self, id: &str) -> EngineResult<()> {
        self.api.delete_shipment(id).await?;
        if let Some(list) = self.shipments.write().await.as_mut() {
            list.retain(|s| s.id.as_deref() != Some(id));
        }
        Ok(())
    }

    pub async fn delete_warehouse_record(&self, id: &str) -> EngineResult<()> {
        self.api.delete_warehouse_record(id).await?;
        if let Some(list) = self.warehouse_records.write().await.as_mut() {
            list.retain(|r| r.id.as_deref() != Some(id));
        }
        Ok(())
    }

    pub async fn delete_customer_record(&self, id: &str) -> EngineResult<()> {
        self.api.delete_customer_record(id).await?;
        if let Some(list) = self.customer_records.write().await.as_mut() {
            list.retain(|r| r.id.as_deref() != Some(id));
        }
        Ok(())
    }

    pub async fn create_expenses_bulk(
        &self,
        payload: &ExpenseBulkCreate,
    ) -> EngineResult<Vec<Expense>> {
        let created = self.api.create_expenses_bulk(payload).await?;
        *self.expenses.write().await = None;
        tracing::info!(
            containers = payload.container_numbers.len(),
            "Bulk expenses submitted"
        );
        Ok(created)
    }

    pub async fn update_expense(&self, id: &str, update: &ExpenseUpdate) -> EngineResult<Expense> {
        let updated = self.api.update_expense(id, update).await?;
        if let Some(list) = self.expenses.write().await.as_mut() {
            if let Some(slot) = list.iter_mut().find(|e| e.id.as_deref() == Some(id)) {
                *slot = updated.clone();
            }
        }
        Ok(updated)
    }

    pub async fn delete_expense(&self, id: &str) -> EngineResult<()> {
        self.api.delete_expense(id).await?;
        if let Some(list) = self.expenses.write().await.as_mut() {
            list.retain(|e| e.id.as_deref() != Some(id));
        }
        Ok(())
    }
}
