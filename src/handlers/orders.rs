use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::order_workflow::OrderWorkflow;
use crate::auth::AdminActor;
use crate::domain::order::{OrderFilter, OrderView, StatusCounts};
use crate::domain::status::OrderStatus;
use crate::errors::AppError;
use crate::infrastructure::order_store::DieselOrderStore;
use crate::presentation::{self, invoice, OrderTab};

pub type Workflow = OrderWorkflow<DieselOrderStore>;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListOrdersQuery {
    /// Console tab to restrict the listing to. Defaults to the unfiltered
    /// "drive" view.
    pub tab: Option<OrderTab>,
    /// Case-insensitive substring match against order id or customer name.
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionRequest {
    pub target: OrderStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    pub target: OrderStatus,
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
    pub quantity: i32,
    pub line_total: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryAddressResponse {
    pub address_line: String,
    pub city: String,
    pub phone_number: String,
    pub map_link: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: Option<String>,
    pub status: OrderStatus,
    pub status_label: String,
    pub status_color: String,
    pub total_amount: String,
    pub delivery_fee: String,
    pub created_at: String,
    pub updated_at: String,
    pub items: Vec<OrderItemResponse>,
    pub delivery_address: Option<DeliveryAddressResponse>,
    /// Transitions the console may offer for this order, derived from the
    /// current status.
    pub available_actions: Vec<ActionResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    pub items: Vec<OrderResponse>,
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusCountsResponse {
    pub pending: i64,
    pub confirmed: i64,
    pub shipping: i64,
    pub delivered: i64,
    pub complete: i64,
    pub cancelled: i64,
    pub return_requested: i64,
    pub monitoring: i64,
    pub total: i64,
}

fn order_to_response(view: &OrderView) -> OrderResponse {
    OrderResponse {
        id: view.id,
        customer_id: view.customer_id,
        customer_name: view.customer.as_ref().map(|c| c.full_name.clone()),
        status: view.status,
        status_label: presentation::status_label(view.status).to_string(),
        status_color: presentation::status_color(view.status).to_string(),
        total_amount: view.total_amount.to_string(),
        delivery_fee: view.delivery_fee_or_default().to_string(),
        created_at: view.created_at.to_rfc3339(),
        updated_at: view.updated_at.to_rfc3339(),
        items: view
            .items
            .iter()
            .map(|i| OrderItemResponse {
                id: i.id,
                product_id: i.product_id,
                product_name: i.product_name.clone(),
                price: i.price.to_string(),
                quantity: i.quantity,
                line_total: i.line_total().to_string(),
                image_url: i.image_url.clone(),
            })
            .collect(),
        delivery_address: view.delivery_address.as_ref().map(|a| DeliveryAddressResponse {
            address_line: a.address_line.clone(),
            city: a.city.clone(),
            phone_number: a.phone_number.clone(),
            map_link: a.map_link.clone(),
        }),
        available_actions: view
            .status
            .available_actions()
            .iter()
            .map(|a| ActionResponse {
                target: a.target,
                label: a.label.to_string(),
            })
            .collect(),
    }
}

fn counts_to_response(counts: StatusCounts) -> StatusCountsResponse {
    StatusCountsResponse {
        pending: counts.pending,
        confirmed: counts.confirmed,
        shipping: counts.shipping,
        delivered: counts.delivered,
        complete: counts.complete,
        cancelled: counts.cancelled,
        return_requested: counts.return_requested,
        monitoring: counts.monitoring(),
        total: counts.total(),
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /admin/orders
///
/// Lists orders joined with items, delivery address and customer profile,
/// most-recently-created first, restricted by the selected console tab and
/// free-text search.
#[utoipa::path(
    get,
    path = "/admin/orders",
    params(
        ("tab" = Option<String>, Query, description = "Console tab: drive, new, confirmed, shipping, delivered, monitoring, return_requested"),
        ("search" = Option<String>, Query, description = "Substring match against order id or customer name"),
    ),
    responses(
        (status = 200, description = "Matching orders", body = ListOrdersResponse),
        (status = 403, description = "Administrator access required"),
        (status = 503, description = "Order store unavailable"),
    ),
    tag = "admin-orders"
)]
pub async fn list_orders(
    _admin: AdminActor,
    workflow: web::Data<Workflow>,
    query: web::Query<ListOrdersQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let filter = OrderFilter {
        status_in: query
            .tab
            .and_then(OrderTab::statuses)
            .map(|statuses| statuses.to_vec()),
        search: query.search,
    };

    let views = web::block(move || workflow.list_orders(&filter))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<OrderResponse> = views.iter().map(order_to_response).collect();
    let total = items.len();
    Ok(HttpResponse::Ok().json(ListOrdersResponse { items, total }))
}

/// GET /admin/orders/counts
///
/// Order counts per status, plus the monitoring bucket (pending ∪ confirmed
/// ∪ shipping) and the grand total.
#[utoipa::path(
    get,
    path = "/admin/orders/counts",
    responses(
        (status = 200, description = "Counts per status", body = StatusCountsResponse),
        (status = 403, description = "Administrator access required"),
        (status = 503, description = "Order store unavailable"),
    ),
    tag = "admin-orders"
)]
pub async fn count_orders(
    _admin: AdminActor,
    workflow: web::Data<Workflow>,
) -> Result<HttpResponse, AppError> {
    let counts = web::block(move || workflow.count_by_status())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(counts_to_response(counts)))
}

/// GET /admin/orders/{id}
#[utoipa::path(
    get,
    path = "/admin/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Order not found"),
    ),
    tag = "admin-orders"
)]
pub async fn get_order(
    _admin: AdminActor,
    workflow: web::Data<Workflow>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let view = web::block(move || workflow.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(order_to_response(&view)))
}

/// POST /admin/orders/{id}/status
///
/// Requests a status transition. Only the edges of the fulfillment state
/// machine are accepted; anything else is rejected with 422 and the stored
/// order is left untouched.
#[utoipa::path(
    post,
    path = "/admin/orders/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Order transitioned", body = OrderResponse),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order changed concurrently"),
        (status = 422, description = "Transition not allowed from the current status"),
    ),
    tag = "admin-orders"
)]
pub async fn transition_order(
    _admin: AdminActor,
    workflow: web::Data<Workflow>,
    path: web::Path<Uuid>,
    body: web::Json<TransitionRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let target = body.into_inner().target;

    let view = web::block(move || workflow.request_transition(order_id, target))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(order_to_response(&view)))
}

/// GET /admin/orders/{id}/invoice
///
/// A self-contained printable invoice document. Generated on demand and not
/// persisted.
#[utoipa::path(
    get,
    path = "/admin/orders/{id}/invoice",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Printable invoice", body = String, content_type = "text/html"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Order not found"),
    ),
    tag = "admin-orders"
)]
pub async fn order_invoice(
    _admin: AdminActor,
    workflow: web::Data<Workflow>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let view = web::block(move || workflow.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(invoice::render_invoice(&view)))
}
