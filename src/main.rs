use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storefront::api::start_api_server;
use storefront::catalog::{CatalogSource, HttpCatalog};
use storefront::config::AppConfig;
use storefront::domain::order::{Order, OrderService};
use storefront::domain::product::{Product, ProductService};
use storefront::metrics::{start_metrics_server, Metrics};
use storefront::store::{Collection, MemoryCollection};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(?config, "starting storefront service");

    // === 1. Initialize metrics and the metrics server ===
    let metrics = Arc::new(Metrics::new()?);
    let registry = Arc::new(metrics.registry().clone());
    let metrics_port = config.metrics_port;
    actix_web::rt::spawn(async move {
        if let Err(e) = start_metrics_server(registry, metrics_port).await {
            tracing::error!("metrics server error: {}", e);
        }
    });

    // === 2. Create the document store collections ===
    let products: Arc<dyn Collection<Product>> = Arc::new(MemoryCollection::new("products"));
    let orders: Arc<dyn Collection<Order>> = Arc::new(MemoryCollection::new("orders"));

    // === 3. Seed the catalog ===
    // Remote catalog first, fixed local list when it is unreachable; either
    // way the store always has something to render.
    if products.count().await? == 0 {
        let catalog = CatalogSource::new(Arc::new(HttpCatalog::new(config.catalog_url.as_str())))
            .with_metrics(metrics.clone());
        for product in catalog.list_products().await {
            if let Err(err) = products.insert(product).await {
                tracing::warn!(error = %err, "skipping seed product");
            }
        }
        tracing::info!(count = products.count().await?, "catalog seeded");
    }
    metrics.set_store_documents("products", products.count().await?);
    metrics.set_store_documents("orders", orders.count().await?);

    // === 4. Build services and run the API ===
    let product_service = Arc::new(ProductService::new(products));
    let order_service = Arc::new(OrderService::new(orders, config.tax_rate_percent));

    start_api_server(&config.bind_addr, product_service, order_service, metrics).await?;

    Ok(())
}
