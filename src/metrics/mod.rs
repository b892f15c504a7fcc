// Private module declaration
mod server;

use prometheus::{
    HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGaugeVec, Opts, Registry,
};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - API request outcomes and latency
// - Order creation and status transitions
// - Catalog fallback activations
// - Document counts per collection
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    // API Metrics
    pub api_requests_total: IntCounterVec,
    pub api_request_duration: HistogramVec,
    pub api_errors_total: IntCounterVec,

    // Order Metrics
    pub orders_created_total: IntCounter,
    pub order_transitions_total: IntCounterVec,

    // Catalog Metrics
    pub products_created_total: IntCounter,
    pub catalog_fallback_total: IntCounter,

    // Store Metrics
    pub store_documents: IntGaugeVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        // API Metrics
        let api_requests_total = IntCounterVec::new(
            Opts::new("api_requests_total", "Total API requests handled"),
            &["endpoint"],
        )?;
        registry.register(Box::new(api_requests_total.clone()))?;

        let api_request_duration = HistogramVec::new(
            HistogramOpts::new("api_request_duration_seconds", "API request duration")
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["endpoint"],
        )?;
        registry.register(Box::new(api_request_duration.clone()))?;

        let api_errors_total = IntCounterVec::new(
            Opts::new("api_errors_total", "Total API requests that failed"),
            &["endpoint", "kind"],
        )?;
        registry.register(Box::new(api_errors_total.clone()))?;

        // Order Metrics
        let orders_created_total = IntCounter::new(
            "orders_created_total",
            "Total orders accepted at checkout",
        )?;
        registry.register(Box::new(orders_created_total.clone()))?;

        let order_transitions_total = IntCounterVec::new(
            Opts::new("order_transitions_total", "Order status transitions applied"),
            &["to"],
        )?;
        registry.register(Box::new(order_transitions_total.clone()))?;

        // Catalog Metrics
        let products_created_total = IntCounter::new(
            "products_created_total",
            "Total products added to the catalog",
        )?;
        registry.register(Box::new(products_created_total.clone()))?;

        let catalog_fallback_total = IntCounter::new(
            "catalog_fallback_total",
            "Times the fixed local catalog was served instead of the remote",
        )?;
        registry.register(Box::new(catalog_fallback_total.clone()))?;

        // Store Metrics
        let store_documents = IntGaugeVec::new(
            Opts::new("store_documents", "Documents currently stored"),
            &["collection"],
        )?;
        registry.register(Box::new(store_documents.clone()))?;

        Ok(Self {
            registry,
            api_requests_total,
            api_request_duration,
            api_errors_total,
            orders_created_total,
            order_transitions_total,
            products_created_total,
            catalog_fallback_total,
            store_documents,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record a handled request
    pub fn record_request(&self, endpoint: &str, duration_secs: f64) {
        self.api_requests_total.with_label_values(&[endpoint]).inc();
        self.api_request_duration
            .with_label_values(&[endpoint])
            .observe(duration_secs);
    }

    /// Helper to record a failed request
    pub fn record_error(&self, endpoint: &str, kind: &str) {
        self.api_errors_total
            .with_label_values(&[endpoint, kind])
            .inc();
    }

    /// Helper to record an accepted order
    pub fn record_order_created(&self) {
        self.orders_created_total.inc();
    }

    /// Helper to record an applied status transition
    pub fn record_order_transition(&self, to: &str) {
        self.order_transitions_total.with_label_values(&[to]).inc();
    }

    /// Helper to record a catalog addition
    pub fn record_product_created(&self) {
        self.products_created_total.inc();
    }

    /// Helper to record a fallback-catalog activation
    pub fn record_catalog_fallback(&self) {
        self.catalog_fallback_total.inc();
    }

    /// Helper to publish a collection's document count
    pub fn set_store_documents(&self, collection: &str, count: usize) {
        self.store_documents
            .with_label_values(&[collection])
            .set(count as i64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        assert!(metrics.registry.gather().len() > 0);
    }

    #[test]
    fn test_record_request() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request("create_order", 0.05);

        let gathered = metrics.registry.gather();
        let requests = gathered
            .iter()
            .find(|m| m.name() == "api_requests_total")
            .unwrap();
        assert_eq!(requests.metric[0].counter.value, Some(1.0));
    }

    #[test]
    fn test_record_order_lifecycle() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_created();
        metrics.record_order_transition("shipped");
        metrics.record_order_transition("cancelled");

        let gathered = metrics.registry.gather();
        let created = gathered
            .iter()
            .find(|m| m.name() == "orders_created_total")
            .unwrap();
        assert_eq!(created.metric[0].counter.value, Some(1.0));

        let transitions = gathered
            .iter()
            .find(|m| m.name() == "order_transitions_total")
            .unwrap();
        assert_eq!(transitions.metric.len(), 2); // Two different target labels
    }

    #[test]
    fn test_store_documents_gauge() {
        let metrics = Metrics::new().unwrap();
        metrics.set_store_documents("products", 7);

        let gathered = metrics.registry.gather();
        let gauge = gathered
            .iter()
            .find(|m| m.name() == "store_documents")
            .unwrap();
        assert_eq!(gauge.metric[0].gauge.value, Some(7.0));
    }
}
