use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::errors::WorkflowError;

/// Lifecycle status of an order. Serialized (JSON and database) as the
/// snake_case tag, e.g. `"return_requested"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Delivered,
    Complete,
    Cancelled,
    ReturnRequested,
}

/// A transition the console may offer for an order in a given status,
/// paired with the label shown on the contextual control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminAction {
    pub target: OrderStatus,
    pub label: &'static str,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipping,
        OrderStatus::Delivered,
        OrderStatus::Complete,
        OrderStatus::Cancelled,
        OrderStatus::ReturnRequested,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Complete => "complete",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::ReturnRequested => "return_requested",
        }
    }

    /// The actions available from this status. Kept in lock-step with
    /// `can_transition_to`; `actions_match_edges` below enforces that.
    ///
    /// `return_requested` is reachable only out-of-band (storefront side),
    /// so no action here targets it and none leaves it.
    pub fn available_actions(self) -> &'static [AdminAction] {
        match self {
            OrderStatus::Pending => &[
                AdminAction {
                    target: OrderStatus::Confirmed,
                    label: "Confirm Order",
                },
                AdminAction {
                    target: OrderStatus::Cancelled,
                    label: "Reject Order",
                },
            ],
            OrderStatus::Confirmed => &[AdminAction {
                target: OrderStatus::Shipping,
                label: "Start Shipping",
            }],
            OrderStatus::Shipping => &[AdminAction {
                target: OrderStatus::Delivered,
                label: "Mark as Delivered",
            }],
            OrderStatus::Delivered => &[AdminAction {
                target: OrderStatus::Complete,
                label: "Mark Complete",
            }],
            OrderStatus::Complete | OrderStatus::Cancelled | OrderStatus::ReturnRequested => &[],
        }
    }

    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        matches!(
            (self, target),
            (OrderStatus::Pending, OrderStatus::Confirmed)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Confirmed, OrderStatus::Shipping)
                | (OrderStatus::Shipping, OrderStatus::Delivered)
                | (OrderStatus::Delivered, OrderStatus::Complete)
        )
    }

    pub fn is_terminal(self) -> bool {
        self.available_actions().is_empty()
    }
}

/// Reject any `(from, to)` pair that is not an edge of the adjacency table.
pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), WorkflowError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(WorkflowError::InvalidTransition { from, to })
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "shipping" => Ok(OrderStatus::Shipping),
            "delivered" => Ok(OrderStatus::Delivered),
            "complete" => Ok(OrderStatus::Complete),
            "cancelled" => Ok(OrderStatus::Cancelled),
            "return_requested" => Ok(OrderStatus::ReturnRequested),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
