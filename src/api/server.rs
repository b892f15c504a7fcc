use std::sync::Arc;

use actix_web::{web, App, HttpServer};

use crate::domain::order::OrderService;
use crate::domain::product::ProductService;
use crate::metrics::Metrics;

use super::{orders, products};

// ============================================================================
// API Server
// ============================================================================

/// Route table for the storefront API. Separated from server startup so
/// tests can mount the exact same surface.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(products::list_products))
            .route("", web::post().to(products::create_product))
            .route("/{id}", web::get().to(products::get_product))
            .route("/{id}", web::put().to(products::update_product))
            .route("/{id}", web::delete().to(products::delete_product))
            .route("/{id}/stock", web::put().to(products::update_stock))
            .route("/{id}/reviews", web::post().to(products::add_review)),
    )
    .service(
        web::scope("/orders")
            .route("", web::post().to(orders::create_order))
            .route("", web::get().to(orders::list_orders))
            // Registered ahead of /{id} so "user" is never read as an order id.
            .route("/user/{email}", web::get().to(orders::list_user_orders))
            .route("/{id}", web::get().to(orders::get_order))
            .route("/{id}/status", web::put().to(orders::update_status)),
    );
}

/// Start the storefront API server
pub async fn start_api_server(
    bind_addr: &str,
    product_service: Arc<ProductService>,
    order_service: Arc<OrderService>,
    metrics: Arc<Metrics>,
) -> std::io::Result<()> {
    tracing::info!("starting storefront API on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(product_service.clone()))
            .app_data(web::Data::new(order_service.clone()))
            .app_data(web::Data::new(metrics.clone()))
            .configure(routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
