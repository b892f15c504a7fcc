// Private module declarations
mod error;
mod orders;
mod products;
mod server;

use std::future::Future;
use std::time::Instant;

use crate::metrics::Metrics;

// Re-export for public API
pub use error::ApiError;
pub use server::{routes, start_api_server};

// ============================================================================
// REST Surface
// ============================================================================
//
// JSON boundary over the product and order services. Request bodies are
// explicit typed schemas deserialized before any logic runs; nothing reads
// loose JSON.
//
// ============================================================================

/// Run a handler body with request metrics around it.
pub(crate) async fn instrumented<F>(
    metrics: &Metrics,
    endpoint: &'static str,
    fut: F,
) -> Result<actix_web::HttpResponse, ApiError>
where
    F: Future<Output = Result<actix_web::HttpResponse, ApiError>>,
{
    let started = Instant::now();
    let result = fut.await;

    metrics.record_request(endpoint, started.elapsed().as_secs_f64());
    if let Err(err) = &result {
        metrics.record_error(endpoint, err.kind());
    }

    result
}
