use uuid::Uuid;

use crate::domain::errors::WorkflowError;
use crate::domain::order::{OrderFilter, OrderView, StatusCounts};
use crate::domain::ports::OrderStore;
use crate::domain::status::{self, OrderStatus};

/// The admin order workflow: joined listings, status counts, and validated
/// status transitions. The sole path through which an order's status changes.
pub struct OrderWorkflow<S> {
    store: S,
}

impl<S: OrderStore> OrderWorkflow<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<OrderView>, WorkflowError> {
        self.store.query_orders(filter)
    }

    pub fn get_order(&self, id: Uuid) -> Result<OrderView, WorkflowError> {
        self.store.find_order(id)?.ok_or(WorkflowError::NotFound)
    }

    pub fn count_by_status(&self) -> Result<StatusCounts, WorkflowError> {
        self.store.status_counts()
    }

    /// Validate the requested edge against the current status, then persist
    /// through the store's conditional update. An invalid edge is rejected
    /// before any write is issued.
    pub fn request_transition(
        &self,
        id: Uuid,
        target: OrderStatus,
    ) -> Result<OrderView, WorkflowError> {
        let order = self.get_order(id)?;
        status::validate_transition(order.status, target)?;
        let updated = self.store.update_status(id, order.status, target)?;
        log::info!(
            "order {} moved {} -> {}",
            updated.id,
            order.status,
            updated.status
        );
        Ok(updated)
    }
}
