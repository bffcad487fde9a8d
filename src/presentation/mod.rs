pub mod invoice;

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::status::OrderStatus;

/// Display label for a status. Presentation-owned; the status engine itself
/// knows nothing about rendering.
pub fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pending",
        OrderStatus::Confirmed => "Confirmed",
        OrderStatus::Shipping => "Shipping",
        OrderStatus::Delivered => "Delivered",
        OrderStatus::Complete => "Complete",
        OrderStatus::Cancelled => "Cancelled",
        OrderStatus::ReturnRequested => "Return Requested",
    }
}

/// Badge color used by the console for a status.
pub fn status_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "#f59e0b",
        OrderStatus::Confirmed => "#3b82f6",
        OrderStatus::Shipping => "#8b5cf6",
        OrderStatus::Delivered => "#10b981",
        OrderStatus::Complete => "#6b7280",
        OrderStatus::Cancelled => "#ef4444",
        OrderStatus::ReturnRequested => "#f97316",
    }
}

/// Console tabs. `Drive` is the unfiltered view; `Monitoring` groups the
/// in-flight statuses for the operational dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderTab {
    Drive,
    New,
    Confirmed,
    Shipping,
    Delivered,
    Monitoring,
    ReturnRequested,
}

impl OrderTab {
    /// Statuses the tab restricts to; `None` means no restriction.
    pub fn statuses(self) -> Option<&'static [OrderStatus]> {
        match self {
            OrderTab::Drive => None,
            OrderTab::New => Some(&[OrderStatus::Pending]),
            OrderTab::Confirmed => Some(&[OrderStatus::Confirmed]),
            OrderTab::Shipping => Some(&[OrderStatus::Shipping]),
            OrderTab::Delivered => Some(&[OrderStatus::Delivered]),
            OrderTab::Monitoring => Some(&[
                OrderStatus::Pending,
                OrderStatus::Confirmed,
                OrderStatus::Shipping,
            ]),
            OrderTab::ReturnRequested => Some(&[OrderStatus::ReturnRequested]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_label_and_color() {
        for status in OrderStatus::ALL {
            assert!(!status_label(status).is_empty());
            assert!(status_color(status).starts_with('#'));
        }
    }

    #[test]
    fn drive_tab_is_unfiltered() {
        assert!(OrderTab::Drive.statuses().is_none());
    }

    #[test]
    fn new_tab_shows_pending_orders() {
        assert_eq!(OrderTab::New.statuses(), Some(&[OrderStatus::Pending][..]));
    }

    #[test]
    fn monitoring_tab_covers_the_in_flight_statuses() {
        assert_eq!(
            OrderTab::Monitoring.statuses(),
            Some(&[OrderStatus::Pending, OrderStatus::Confirmed, OrderStatus::Shipping][..])
        );
    }

    #[test]
    fn tab_names_deserialize_from_snake_case() {
        let tab: OrderTab = serde_json::from_str("\"return_requested\"").unwrap();
        assert_eq!(tab, OrderTab::ReturnRequested);
        let tab: OrderTab = serde_json::from_str("\"drive\"").unwrap();
        assert_eq!(tab, OrderTab::Drive);
    }
}
