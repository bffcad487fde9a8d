use uuid::Uuid;

use super::errors::WorkflowError;
use super::order::{OrderFilter, OrderView, StatusCounts};
use super::status::OrderStatus;

/// Contract of the external order store. Reads are all-or-nothing: a failed
/// join surfaces `StoreUnavailable` rather than a partial result.
pub trait OrderStore: Send + Sync + 'static {
    /// Joined orders matching `filter`, most-recently-created first.
    fn query_orders(&self, filter: &OrderFilter) -> Result<Vec<OrderView>, WorkflowError>;

    fn find_order(&self, id: Uuid) -> Result<Option<OrderView>, WorkflowError>;

    /// Conditional write: persists `next` only while the stored status still
    /// equals `expected`. Fails with `NotFound` if the order is gone and
    /// `Conflict` if another writer moved the status in between.
    fn update_status(
        &self,
        id: Uuid,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<OrderView, WorkflowError>;

    fn status_counts(&self) -> Result<StatusCounts, WorkflowError>;
}
