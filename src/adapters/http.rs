use crate::domain::model::RawProduct;
use crate::domain::ports::InventorySource;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;

pub const PRODUCTS_PATH: &str = "produtos";

/// 上游庫存服務的 HTTP 客戶端。每次呼叫只發出一個 GET，無逾時與重試。
#[derive(Debug, Clone)]
pub struct InventoryClient {
    client: Client,
    products_url: String,
}

impl InventoryClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let products_url = format!("{}/{}", base_url.trim_end_matches('/'), PRODUCTS_PATH);
        validate_url("upstream_url", &products_url)?;

        Ok(Self {
            client: Client::new(),
            products_url,
        })
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }
}

#[async_trait]
impl InventorySource for InventoryClient {
    async fn fetch_products(&self) -> Result<Vec<RawProduct>> {
        tracing::debug!("Making API request to: {}", self.products_url);
        let response = self
            .client
            .get(&self.products_url)
            .send()
            .await
            .map_err(|e| upstream_error(format!("request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        // 非 2xx 時直接丟棄 response，連線交回連線池
        if !status.is_success() {
            return Err(upstream_error(format!("unexpected status {}", status)));
        }

        let products: Vec<RawProduct> = response
            .json()
            .await
            .map_err(|e| upstream_error(format!("invalid product list: {}", e)))?;

        tracing::debug!("Fetched {} products", products.len());
        Ok(products)
    }
}

fn upstream_error(reason: String) -> ReportError {
    tracing::error!("❌ Inventory service unavailable: {}", reason);
    ReportError::UpstreamUnavailable { reason }
}
