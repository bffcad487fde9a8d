use bigdecimal::BigDecimal;

use crate::domain::order::OrderView;
use crate::presentation::status_label;

/// Render an order as a self-contained printable invoice document.
///
/// Pure: no I/O, nothing persisted. The grand total line shows the order's
/// snapshot `total_amount` verbatim; it is never recomputed from the items,
/// so a divergent subtotal + fee stays visible instead of being papered over.
pub fn render_invoice(order: &OrderView) -> String {
    let customer_name = order
        .customer
        .as_ref()
        .map(|c| c.full_name.as_str())
        .unwrap_or("Customer");

    let address = match &order.delivery_address {
        Some(a) => format!("{}, {} ({})", a.address_line, a.city, a.phone_number),
        None => "No delivery address on file".to_string(),
    };

    let rows: String = order
        .items
        .iter()
        .map(|item| {
            format!(
                "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
                escape(&item.product_name),
                item.quantity,
                money(&item.price),
                money(&item.line_total()),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Invoice {id}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; color: #111; }}
h1 {{ font-size: 1.4rem; }}
table {{ width: 100%; border-collapse: collapse; margin-top: 1rem; }}
th, td {{ border-bottom: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; }}
td.num, th.num {{ text-align: right; }}
tfoot td {{ border-bottom: none; }}
tfoot tr.grand td {{ font-weight: bold; border-top: 2px solid #111; }}
</style>
</head>
<body>
<h1>Invoice</h1>
<p>Order <strong>{id}</strong><br>
Placed {created}<br>
Status: {status}</p>
<p>{customer}<br>{address}</p>
<table>
<thead><tr><th>Item</th><th class="num">Qty</th><th class="num">Unit price</th><th class="num">Total</th></tr></thead>
<tbody>
{rows}</tbody>
<tfoot>
<tr><td colspan="3">Subtotal</td><td class="num">{subtotal}</td></tr>
<tr><td colspan="3">Delivery fee</td><td class="num">{fee}</td></tr>
<tr class="grand"><td colspan="3">Total</td><td class="num">{total}</td></tr>
</tfoot>
</table>
</body>
</html>
"#,
        id = order.id,
        created = order.created_at.format("%Y-%m-%d %H:%M"),
        status = status_label(order.status),
        customer = escape(customer_name),
        address = escape(&address),
        rows = rows,
        subtotal = money(&order.items_subtotal()),
        fee = money(&order.delivery_fee_or_default()),
        total = money(&order.total_amount),
    )
}

fn money(amount: &BigDecimal) -> String {
    format!("${}", amount.with_scale(2))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::order::{CustomerProfileView, DeliveryAddressView, OrderItemView};
    use crate::domain::status::OrderStatus;

    fn delivered_order() -> OrderView {
        let now = Utc::now();
        OrderView {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            status: OrderStatus::Delivered,
            total_amount: BigDecimal::from(25),
            delivery_fee: Some(BigDecimal::from(5)),
            created_at: now,
            updated_at: now,
            items: vec![OrderItemView {
                id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
                product_name: "Ceramic Mug".to_string(),
                price: BigDecimal::from(10),
                quantity: 2,
                image_url: None,
            }],
            delivery_address: Some(DeliveryAddressView {
                address_line: "12 Harbor Road".to_string(),
                city: "Portsmouth".to_string(),
                phone_number: "555-0142".to_string(),
                map_link: None,
            }),
            customer: Some(CustomerProfileView {
                full_name: "Jane Smith".to_string(),
            }),
        }
    }

    #[test]
    fn renders_subtotal_fee_and_total() {
        let html = render_invoice(&delivered_order());
        assert!(html.contains("$20.00"));
        assert!(html.contains("$5.00"));
        assert!(html.contains("$25.00"));
        assert!(html.contains("Delivered"));
        assert!(html.contains("Jane Smith"));
        assert!(html.contains("12 Harbor Road"));
        assert!(html.contains("Ceramic Mug"));
    }

    #[test]
    fn grand_total_is_the_snapshot_even_when_it_diverges() {
        let mut order = delivered_order();
        order.total_amount = BigDecimal::from_str("99.99").unwrap();
        let html = render_invoice(&order);
        assert!(html.contains("$99.99"));
        assert!(html.contains("$20.00"));
    }

    #[test]
    fn missing_delivery_fee_renders_the_default() {
        let mut order = delivered_order();
        order.delivery_fee = None;
        let html = render_invoice(&order);
        assert!(html.contains("$5.00"));
    }

    #[test]
    fn product_names_are_html_escaped() {
        let mut order = delivered_order();
        order.items[0].product_name = "Mug <XL> & saucer".to_string();
        let html = render_invoice(&order);
        assert!(html.contains("Mug &lt;XL&gt; &amp; saucer"));
        assert!(!html.contains("Mug <XL>"));
    }

    #[test]
    fn missing_address_renders_a_placeholder() {
        let mut order = delivered_order();
        order.delivery_address = None;
        let html = render_invoice(&order);
        assert!(html.contains("No delivery address on file"));
    }
}
