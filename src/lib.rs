pub mod application;
pub mod auth;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod presentation;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::order_workflow::OrderWorkflow;
use crate::auth::AdminAuth;
use crate::infrastructure::order_store::DieselOrderStore;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    admin_token: String,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let workflow = web::Data::new(OrderWorkflow::new(DieselOrderStore::new(pool)));
    let admin_auth = web::Data::new(AdminAuth::new(admin_token));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(workflow.clone())
            .app_data(admin_auth.clone())
            .wrap(Logger::default())
            .service(
                web::scope("/admin/orders")
                    .route("", web::get().to(handlers::orders::list_orders))
                    .route("/counts", web::get().to(handlers::orders::count_orders))
                    .route("/{id}", web::get().to(handlers::orders::get_order))
                    .route(
                        "/{id}/status",
                        web::post().to(handlers::orders::transition_order),
                    )
                    .route(
                        "/{id}/invoice",
                        web::get().to(handlers::orders::order_invoice),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", handlers::ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
