pub mod orders;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        orders::list_orders,
        orders::count_orders,
        orders::get_order,
        orders::transition_order,
        orders::order_invoice,
    ),
    components(schemas(
        orders::ListOrdersResponse,
        orders::OrderResponse,
        orders::OrderItemResponse,
        orders::DeliveryAddressResponse,
        orders::ActionResponse,
        orders::StatusCountsResponse,
        orders::TransitionRequest,
        crate::domain::status::OrderStatus,
        crate::presentation::OrderTab,
    )),
    tags(
        (name = "admin-orders", description = "Back-office order workflow")
    )
)]
pub struct ApiDoc;
