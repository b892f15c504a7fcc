// Private module declarations
mod remote;

pub mod fallback;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::Product;
use crate::metrics::Metrics;

// Re-export for public API
pub use remote::HttpCatalog;

// ============================================================================
// Catalog Source
// ============================================================================
//
// Supplies product records: remote service first, fixed local list second.
// The catalog must always render something, so a remote failure is recovered
// here and never surfaced to the caller as an error.
//
// ============================================================================

/// The remote half of the catalog. Failures are expected and recoverable;
/// `fetch_by_id` returns `Ok(None)` for a clean miss and `Err` for anything
/// that should trigger the fallback.
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    async fn fetch_all(&self) -> anyhow::Result<Vec<Product>>;
    async fn fetch_by_id(&self, id: &str) -> anyhow::Result<Option<Product>>;
}

pub struct CatalogSource {
    remote: Arc<dyn RemoteCatalog>,
    metrics: Option<Arc<Metrics>>,
}

impl CatalogSource {
    pub fn new(remote: Arc<dyn RemoteCatalog>) -> Self {
        Self {
            remote,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn record_fallback(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.record_catalog_fallback();
        }
    }

    /// Every product the catalog can offer right now. Always succeeds.
    pub async fn list_products(&self) -> Vec<Product> {
        match self.remote.fetch_all().await {
            Ok(products) => products,
            Err(err) => {
                tracing::warn!(error = %err, "remote catalog unavailable, serving fallback list");
                self.record_fallback();
                fallback::products()
            }
        }
    }

    /// One product by id, from whichever source has it. `None` means the id
    /// exists in neither source.
    pub async fn get_product(&self, id: &str) -> Option<Product> {
        match self.remote.fetch_by_id(id).await {
            Ok(Some(product)) => return Some(product),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(product_id = %id, error = %err, "remote catalog unavailable, trying fallback list");
                self.record_fallback();
            }
        }

        fallback::products().into_iter().find(|p| p.id == id)
    }
}
