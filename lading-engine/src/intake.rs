//! Container intake workflow
//!
//! A user picks a shipment, works through its containers one at a time,
//! queues an intake entry per container, and finally commits the whole
//! batch. Queue entries are keyed by container number: re-selecting a
//! queued container edits it in place, and queueing it again replaces the
//! earlier entry. Two different shipments sharing a container number would
//! therefore merge in the queue; nothing upstream prevents that today.

use futures::future;

use lading_client::ShippingApi;
use shared::models::{IntakeRecord, SALE_TARGET_WAREHOUSE, Shipment};
use shared::util::today_iso;

use crate::error::{EngineError, EngineResult};

/// Warehouse preselected on a fresh intake form.
pub const DEFAULT_WAREHOUSE: &str = "Thanh Binh";

/// Where the intake workflow currently stands.
///
/// `Submitting` stands in for the original UI's "request pending" flag: it
/// blocks a second commit from the same session, but it is not a cross-task
/// lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakePhase {
    #[default]
    Idle,
    ContainerListLoaded,
    EditingContainer,
    Submitting,
}

/// One container of the chosen shipment, with the shipment context the
/// intake form pre-fills from.
#[derive(Debug, Clone)]
pub struct ContainerSlot {
    pub container_number: String,
    pub shipment: Shipment,
}

/// User-editable intake form. Weight/bag/value fields left empty fall back
/// to the shipment's own figures when the entry is queued.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    pub warehouse_name: String,
    /// ISO date.
    pub received_date: String,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
    pub number_of_bags: Option<i64>,
    pub value: Option<f64>,
    pub bags_received: i64,
    pub net_weight_received: f64,
    pub truck_number: String,
    pub trucking_agent: String,
    pub cha: String,
    pub notes: String,
    pub selling_direct: bool,
    /// Compared against `"customer"` exactly when partitioning the commit.
    pub sale_target: String,
    pub customer_name: String,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self {
            warehouse_name: DEFAULT_WAREHOUSE.to_string(),
            received_date: today_iso(),
            gross_weight: None,
            net_weight: None,
            number_of_bags: None,
            value: None,
            bags_received: 0,
            net_weight_received: 0.0,
            truck_number: String::new(),
            trucking_agent: String::new(),
            cha: String::new(),
            notes: String::new(),
            selling_direct: false,
            sale_target: SALE_TARGET_WAREHOUSE.to_string(),
            customer_name: String::new(),
        }
    }
}

impl IntakeForm {
    /// Rebuild the form from a queued entry, for re-editing.
    fn from_record(record: &IntakeRecord) -> Self {
        Self {
            warehouse_name: record.warehouse_name.clone(),
            received_date: record.received_date.clone(),
            gross_weight: Some(record.gross_weight),
            net_weight: Some(record.net_weight),
            number_of_bags: Some(record.number_of_bags),
            value: Some(record.value),
            bags_received: record.bags_received,
            net_weight_received: record.net_weight_received,
            truck_number: record.truck_number.clone(),
            trucking_agent: record.trucking_agent.clone(),
            cha: record.cha.clone(),
            notes: record.notes.clone(),
            selling_direct: record.selling_direct,
            sale_target: record.sale_target.clone(),
            customer_name: record.customer_name.clone(),
        }
    }

    /// Merge the form with the shipment context into a create payload.
    fn into_record(self, slot: &ContainerSlot) -> IntakeRecord {
        let shipment = &slot.shipment;
        IntakeRecord {
            id: None,
            container_number: slot.container_number.clone(),
            invoice_number: shipment.invoice_number.clone(),
            bl_number: shipment.bl_number.clone(),
            seal_number1: None,
            seal_number2: None,
            gross_weight: self.gross_weight.unwrap_or(shipment.gross_weight),
            net_weight: self.net_weight.unwrap_or(shipment.net_weight),
            number_of_bags: self.number_of_bags.unwrap_or(shipment.no_of_bags),
            value: self.value.unwrap_or(shipment.total_value_vnd),
            shipping_line: shipment.shipping_line.clone(),
            name_of_goods: shipment.goods_name.clone(),
            arrival_port: shipment.arrival_port.clone(),
            warehouse_name: self.warehouse_name,
            received_date: self.received_date,
            bags_received: self.bags_received,
            net_weight_received: self.net_weight_received,
            truck_number: self.truck_number,
            trucking_agent: self.trucking_agent,
            cha: self.cha,
            notes: self.notes,
            selling_direct: self.selling_direct,
            sale_target: self.sale_target,
            customer_name: self.customer_name,
        }
    }
}

/// Outcome of a successful [`IntakeQueue::commit_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitSummary {
    pub warehouse_created: usize,
    pub customer_created: usize,
}

/// The intake queue state machine.
///
/// All transitions are purely in-memory except [`Self::commit_all`], which
/// performs the network writes. After a successful commit the caller is
/// expected to refresh its data store.
#[derive(Debug, Default)]
pub struct IntakeQueue {
    phase: IntakePhase,
    containers: Vec<ContainerSlot>,
    queue: Vec<IntakeRecord>,
    active: Option<String>,
}

impl IntakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> IntakePhase {
        self.phase
    }

    /// Working list of containers extracted from the chosen shipment.
    pub fn container_slots(&self) -> &[ContainerSlot] {
        &self.containers
    }

    /// Queued entries, in queueing order.
    pub fn queue(&self) -> &[IntakeRecord] {
        &self.queue
    }

    /// Container number currently bound to the form, if any.
    pub fn active_container(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_queued(&self, container_number: &str) -> bool {
        self.queue
            .iter()
            .any(|r| r.container_number == container_number)
    }

    /// The queued entry for a container, if present.
    pub fn queued(&self, container_number: &str) -> Option<&IntakeRecord> {
        self.queue
            .iter()
            .find(|r| r.container_number == container_number)
    }

    /// Extract the shipment's containers into a fresh working list.
    ///
    /// Normalizes the scalar-or-list container field; a shipment without
    /// containers yields an empty list, not an error. Resets the queue.
    pub fn load_containers(&mut self, shipment: &Shipment) {
        self.containers = shipment
            .container_numbers()
            .into_iter()
            .map(|container_number| ContainerSlot {
                container_number,
                shipment: shipment.clone(),
            })
            .collect();
        self.queue.clear();
        self.active = None;
        self.phase = IntakePhase::ContainerListLoaded;

        tracing::debug!(
            invoice = %shipment.invoice_number,
            containers = self.containers.len(),
            "Intake container list loaded"
        );
    }

    /// Bind a container to the form.
    ///
    /// Re-entrant: selecting an already-queued container returns its saved
    /// form values for editing; otherwise a fresh form pre-filled from
    /// shipment defaults.
    pub fn select_container(&mut self, container_number: &str) -> EngineResult<IntakeForm> {
        if !self
            .containers
            .iter()
            .any(|c| c.container_number == container_number)
        {
            return Err(EngineError::NotFound(format!(
                "container {} is not part of the loaded shipment",
                container_number
            )));
        }

        let form = match self.queued(container_number) {
            Some(record) => IntakeForm::from_record(record),
            None => IntakeForm::default(),
        };

        self.active = Some(container_number.to_string());
        self.phase = IntakePhase::EditingContainer;
        Ok(form)
    }

    /// Queue the active container's form, then advance to the next
    /// container that is not yet queued.
    ///
    /// Upserts by container number: a container queued twice is replaced,
    /// never duplicated. Returns the container number that became active,
    /// or `None` when every container is queued.
    pub fn queue_current(&mut self, form: IntakeForm) -> EngineResult<Option<String>> {
        let active = self.active.clone().ok_or_else(|| {
            EngineError::InvalidState("no container selected for intake".to_string())
        })?;
        let slot = self
            .containers
            .iter()
            .find(|c| c.container_number == active)
            .ok_or_else(|| EngineError::NotFound(format!("container {} not loaded", active)))?;

        let record = form.into_record(slot);
        match self
            .queue
            .iter_mut()
            .find(|r| r.container_number == active)
        {
            Some(existing) => *existing = record,
            None => self.queue.push(record),
        }

        let next = self
            .containers
            .iter()
            .map(|c| c.container_number.clone())
            .find(|n| !self.is_queued(n));

        match &next {
            Some(number) => {
                self.active = Some(number.clone());
                self.phase = IntakePhase::EditingContainer;
            }
            None => {
                self.active = None;
                self.phase = IntakePhase::ContainerListLoaded;
            }
        }
        Ok(next)
    }

    /// Drop a queued entry. The active selection is left as it is.
    pub fn remove_queued(&mut self, container_number: &str) {
        self.queue.retain(|r| r.container_number != container_number);
    }

    /// Dispatch the whole queue: one create call per entry, concurrently,
    /// partitioned into the customer and warehouse collections.
    ///
    /// On any failure the queue and selection are preserved unchanged so
    /// the user can retry; no partial-success reconciliation is attempted.
    pub async fn commit_all<A: ShippingApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> EngineResult<CommitSummary> {
        if self.phase == IntakePhase::Submitting {
            return Err(EngineError::InvalidState(
                "intake commit already in flight".to_string(),
            ));
        }
        if self.queue.is_empty() {
            return Err(EngineError::Validation("intake queue is empty".to_string()));
        }

        let prev_phase = self.phase;
        self.phase = IntakePhase::Submitting;

        let warehouse_calls: Vec<_> = self
            .queue
            .iter()
            .filter(|r| !r.is_customer_bound())
            .map(|r| api.create_warehouse_record(r))
            .collect();
        let customer_calls: Vec<_> = self
            .queue
            .iter()
            .filter(|r| r.is_customer_bound())
            .map(|r| api.create_customer_record(r))
            .collect();

        let (warehouse_results, customer_results) = tokio::join!(
            future::join_all(warehouse_calls),
            future::join_all(customer_calls),
        );

        let warehouse_created = warehouse_results.len();
        let customer_created = customer_results.len();

        if let Some(err) = warehouse_results
            .into_iter()
            .chain(customer_results)
            .find_map(Result::err)
        {
            self.phase = prev_phase;
            tracing::warn!(error = %err, "Intake commit failed, queue preserved");
            return Err(err.into());
        }

        self.queue.clear();
        self.containers.clear();
        self.active = None;
        self.phase = IntakePhase::Idle;

        tracing::info!(
            warehouse = warehouse_created,
            customer = customer_created,
            "Intake queue committed"
        );
        Ok(CommitSummary {
            warehouse_created,
            customer_created,
        })
    }
}
