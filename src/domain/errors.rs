use thiserror::Error;

use super::status::OrderStatus;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("order not found")]
    NotFound,

    #[error("administrative capability required")]
    Forbidden,

    #[error("order status changed concurrently (now {actual}), reload and retry")]
    Conflict { actual: OrderStatus },

    #[error("order store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}
