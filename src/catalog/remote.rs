use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::product::Product;

use super::RemoteCatalog;

// ============================================================================
// HTTP Remote Catalog
// ============================================================================

pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RemoteCatalog for HttpCatalog {
    async fn fetch_all(&self) -> anyhow::Result<Vec<Product>> {
        let response = self
            .client
            .get(format!("{}/products", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        // A malformed payload is as much a failure as a refused connection;
        // the caller's fallback policy handles both.
        Ok(response.json().await?)
    }

    async fn fetch_by_id(&self, id: &str) -> anyhow::Result<Option<Product>> {
        let response = self
            .client
            .get(format!("{}/products/{}", self.base_url, id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response.error_for_status()?;
        Ok(Some(response.json().await?))
    }
}
