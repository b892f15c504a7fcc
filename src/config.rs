use std::env;

// ============================================================================
// Application Configuration
// ============================================================================
//
// All settings come from STOREFRONT_* environment variables with sensible
// defaults, so the binary runs with no configuration at all.
//
// ============================================================================

/// Default GST-style tax rate applied at checkout, in percent.
///
/// This is a fixed business contract reproduced from observed behavior, not
/// derived; change it here (or via STOREFRONT_TAX_PERCENT), never at call
/// sites.
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 18;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Address the REST API binds to.
    pub bind_addr: String,
    /// Port for the separate metrics/health server.
    pub metrics_port: u16,
    /// Checkout tax rate in percent.
    pub tax_rate_percent: u32,
    /// Base URL of the remote catalog service.
    pub catalog_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("STOREFRONT_BIND")
                .unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            metrics_port: env::var("STOREFRONT_METRICS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9090),
            tax_rate_percent: env::var("STOREFRONT_TAX_PERCENT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_TAX_RATE_PERCENT),
            catalog_url: env::var("STOREFRONT_CATALOG_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            metrics_port: 9090,
            tax_rate_percent: DEFAULT_TAX_RATE_PERCENT,
            catalog_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}
