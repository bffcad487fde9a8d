use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::status::OrderStatus;

/// Snapshot of one ordered product, immutable after checkout. `product_name`,
/// `price` and `image_url` are copied at order time and do not track the live
/// product record.
#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image_url: Option<String>,
}

impl OrderItemView {
    pub fn line_total(&self) -> BigDecimal {
        self.price.clone() * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct DeliveryAddressView {
    pub address_line: String,
    pub city: String,
    pub phone_number: String,
    pub map_link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CustomerProfileView {
    pub full_name: String,
}

/// An order joined with its line items, delivery address and customer
/// profile, as the console displays it. The address and profile are
/// non-owning lookups and may be absent.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: OrderStatus,
    pub total_amount: BigDecimal,
    pub delivery_fee: Option<BigDecimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItemView>,
    pub delivery_address: Option<DeliveryAddressView>,
    pub customer: Option<CustomerProfileView>,
}

/// Delivery fee applied when an order carries none.
pub fn default_delivery_fee() -> BigDecimal {
    BigDecimal::from(5)
}

impl OrderView {
    pub fn items_subtotal(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::from(0), |acc, item| acc + item.line_total())
    }

    pub fn delivery_fee_or_default(&self) -> BigDecimal {
        self.delivery_fee.clone().unwrap_or_else(default_delivery_fee)
    }
}

/// Restriction applied by `list_orders`. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status_in: Option<Vec<OrderStatus>>,
    pub search: Option<String>,
}

impl OrderFilter {
    pub fn by_status(statuses: &[OrderStatus]) -> Self {
        Self {
            status_in: Some(statuses.to_vec()),
            ..Self::default()
        }
    }

    pub fn matches(&self, order: &OrderView) -> bool {
        self.matches_status(order) && self.matches_search(order)
    }

    pub fn matches_status(&self, order: &OrderView) -> bool {
        match &self.status_in {
            Some(statuses) => statuses.contains(&order.status),
            None => true,
        }
    }

    /// Case-insensitive substring match against the order id or the joined
    /// customer full name. A blank search term matches everything.
    pub fn matches_search(&self, order: &OrderView) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        if order.id.to_string().to_lowercase().contains(&term) {
            return true;
        }
        order
            .customer
            .as_ref()
            .map(|c| c.full_name.to_lowercase().contains(&term))
            .unwrap_or(false)
    }
}

/// Orders per status, as shown on the console's tab badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: i64,
    pub confirmed: i64,
    pub shipping: i64,
    pub delivered: i64,
    pub complete: i64,
    pub cancelled: i64,
    pub return_requested: i64,
}

impl StatusCounts {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (OrderStatus, i64)>) -> Self {
        let mut counts = Self::default();
        for (status, count) in pairs {
            *counts.slot(status) += count;
        }
        counts
    }

    fn slot(&mut self, status: OrderStatus) -> &mut i64 {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Confirmed => &mut self.confirmed,
            OrderStatus::Shipping => &mut self.shipping,
            OrderStatus::Delivered => &mut self.delivered,
            OrderStatus::Complete => &mut self.complete,
            OrderStatus::Cancelled => &mut self.cancelled,
            OrderStatus::ReturnRequested => &mut self.return_requested,
        }
    }

    pub fn get(&self, status: OrderStatus) -> i64 {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Confirmed => self.confirmed,
            OrderStatus::Shipping => self.shipping,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Complete => self.complete,
            OrderStatus::Cancelled => self.cancelled,
            OrderStatus::ReturnRequested => self.return_requested,
        }
    }

    /// Union of the in-flight statuses (pending, confirmed, shipping). An
    /// order has exactly one status, so summing the three buckets counts each
    /// order at most once.
    pub fn monitoring(&self) -> i64 {
        self.pending + self.confirmed + self.shipping
    }

    pub fn total(&self) -> i64 {
        OrderStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn item(price: &str, quantity: i32) -> OrderItemView {
        OrderItemView {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            product_name: "Ceramic Mug".to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            quantity,
            image_url: None,
        }
    }

    fn order(status: OrderStatus, customer_name: Option<&str>) -> OrderView {
        let now = Utc::now();
        OrderView {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            status,
            total_amount: BigDecimal::from(25),
            delivery_fee: Some(BigDecimal::from(5)),
            created_at: now,
            updated_at: now,
            items: vec![item("10.00", 2)],
            delivery_address: None,
            customer: customer_name.map(|name| CustomerProfileView {
                full_name: name.to_string(),
            }),
        }
    }

    #[test]
    fn items_subtotal_sums_line_totals() {
        let mut o = order(OrderStatus::Pending, None);
        o.items = vec![item("10.00", 2), item("3.50", 3)];
        assert_eq!(o.items_subtotal(), BigDecimal::from_str("30.50").unwrap());
    }

    #[test]
    fn missing_delivery_fee_falls_back_to_default() {
        let mut o = order(OrderStatus::Pending, None);
        o.delivery_fee = None;
        assert_eq!(o.delivery_fee_or_default(), default_delivery_fee());
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = OrderFilter::default();
        assert!(filter.matches(&order(OrderStatus::Complete, Some("Jane Smith"))));
    }

    #[test]
    fn status_filter_restricts_to_listed_statuses() {
        let filter = OrderFilter::by_status(&[OrderStatus::Pending, OrderStatus::Shipping]);
        assert!(filter.matches(&order(OrderStatus::Pending, None)));
        assert!(filter.matches(&order(OrderStatus::Shipping, None)));
        assert!(!filter.matches(&order(OrderStatus::Delivered, None)));
    }

    #[test]
    fn search_matches_customer_name_case_insensitively() {
        let filter = OrderFilter {
            search: Some("SMITH".to_string()),
            ..OrderFilter::default()
        };
        assert!(filter.matches(&order(OrderStatus::Pending, Some("Jane Smith"))));
        assert!(!filter.matches(&order(OrderStatus::Pending, Some("Bob Jones"))));
        assert!(!filter.matches(&order(OrderStatus::Pending, None)));
    }

    #[test]
    fn search_matches_order_id_substring() {
        let o = order(OrderStatus::Pending, None);
        let fragment = o.id.to_string()[..8].to_uppercase();
        let filter = OrderFilter {
            search: Some(fragment),
            ..OrderFilter::default()
        };
        assert!(filter.matches(&o));
    }

    #[test]
    fn blank_search_matches_everything() {
        let filter = OrderFilter {
            search: Some("   ".to_string()),
            ..OrderFilter::default()
        };
        assert!(filter.matches(&order(OrderStatus::Cancelled, None)));
    }

    #[test]
    fn counts_monitoring_is_union_of_in_flight_buckets() {
        let counts = StatusCounts::from_pairs([
            (OrderStatus::Pending, 2),
            (OrderStatus::Confirmed, 1),
            (OrderStatus::Shipping, 1),
            (OrderStatus::Complete, 1),
        ]);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.confirmed, 1);
        assert_eq!(counts.shipping, 1);
        assert_eq!(counts.delivered, 0);
        assert_eq!(counts.complete, 1);
        assert_eq!(counts.monitoring(), 4);
        assert_eq!(counts.total(), 5);
    }
}
