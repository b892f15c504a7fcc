use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::order::{CustomerInfo, LineItem, OrderDraft, OrderService, OrderStatus};
use crate::metrics::Metrics;

use super::error::ApiError;
use super::instrumented;

// ============================================================================
// Order Endpoints
// ============================================================================

/// Body of `POST /orders`: the confirmed cart lines plus the customer's
/// contact and shipping details. Totals are computed here, never trusted
/// from the client.
#[derive(Deserialize, Clone, Debug)]
pub struct CreateOrderRequest {
    pub items: Vec<LineItem>,
    pub customer: CustomerInfo,
}

/// Body of `PUT /orders/{id}/status`. Accepts the legacy `confirmed`
/// spelling for the initial state.
#[derive(Deserialize, Clone, Debug)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

pub async fn create_order(
    service: web::Data<Arc<OrderService>>,
    metrics: web::Data<Arc<Metrics>>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "create_order", async {
        let CreateOrderRequest { items, customer } = body.into_inner();
        let order = service.create(OrderDraft { items, customer }).await?;
        metrics.record_order_created();
        Ok(HttpResponse::Created().json(order))
    })
    .await
}

pub async fn get_order(
    service: web::Data<Arc<OrderService>>,
    metrics: web::Data<Arc<Metrics>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "get_order", async {
        let order = service.get(&path).await?;
        Ok(HttpResponse::Ok().json(order))
    })
    .await
}

pub async fn list_orders(
    service: web::Data<Arc<OrderService>>,
    metrics: web::Data<Arc<Metrics>>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "list_orders", async {
        let orders = service.list().await?;
        Ok(HttpResponse::Ok().json(orders))
    })
    .await
}

pub async fn list_user_orders(
    service: web::Data<Arc<OrderService>>,
    metrics: web::Data<Arc<Metrics>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "list_user_orders", async {
        let orders = service.list_for_email(&path).await?;
        Ok(HttpResponse::Ok().json(orders))
    })
    .await
}

pub async fn update_status(
    service: web::Data<Arc<OrderService>>,
    metrics: web::Data<Arc<Metrics>>,
    path: web::Path<String>,
    body: web::Json<StatusUpdate>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "update_status", async {
        let next = body.status;
        let order = service.transition(&path, next).await?;
        metrics.record_order_transition(&next.to_string());
        Ok(HttpResponse::Ok().json(order))
    })
    .await
}
