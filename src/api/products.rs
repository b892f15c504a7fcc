use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::product::{NewProduct, ProductPatch, ProductService, ReviewInput};
use crate::metrics::Metrics;

use super::error::ApiError;
use super::instrumented;

// ============================================================================
// Product Endpoints
// ============================================================================

/// Body of `PUT /products/{id}/stock`.
#[derive(Deserialize, Clone, Debug)]
pub struct StockAdjustment {
    pub quantity: u32,
}

pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
    metrics: web::Data<Arc<Metrics>>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "list_products", async {
        let products = service.list().await?;
        Ok(HttpResponse::Ok().json(products))
    })
    .await
}

pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    metrics: web::Data<Arc<Metrics>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "get_product", async {
        let product = service.get(&path).await?;
        Ok(HttpResponse::Ok().json(product))
    })
    .await
}

pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    metrics: web::Data<Arc<Metrics>>,
    body: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "create_product", async {
        let product = service.create(body.into_inner()).await?;
        metrics.record_product_created();
        Ok(HttpResponse::Created().json(product))
    })
    .await
}

pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    metrics: web::Data<Arc<Metrics>>,
    path: web::Path<String>,
    body: web::Json<ProductPatch>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "update_product", async {
        let product = service.update(&path, body.into_inner()).await?;
        Ok(HttpResponse::Ok().json(product))
    })
    .await
}

pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    metrics: web::Data<Arc<Metrics>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "delete_product", async {
        service.delete(&path).await?;
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "product deleted successfully"
        })))
    })
    .await
}

pub async fn update_stock(
    service: web::Data<Arc<ProductService>>,
    metrics: web::Data<Arc<Metrics>>,
    path: web::Path<String>,
    body: web::Json<StockAdjustment>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "update_stock", async {
        let product = service.decrement_stock(&path, body.quantity).await?;
        Ok(HttpResponse::Ok().json(product))
    })
    .await
}

pub async fn add_review(
    service: web::Data<Arc<ProductService>>,
    metrics: web::Data<Arc<Metrics>>,
    path: web::Path<String>,
    body: web::Json<ReviewInput>,
) -> Result<HttpResponse, ApiError> {
    instrumented(&metrics, "add_review", async {
        let product = service.add_review(&path, body.into_inner()).await?;
        Ok(HttpResponse::Created().json(product))
    })
    .await
}
