use crate::core::normalizer::normalize_all;
use crate::core::InventorySource;
use crate::domain::model::{InventoryRow, ReportDocument, ReportFormat};
use crate::render;
use crate::utils::error::Result;
use std::sync::Arc;

/// 抓取 → 正規化 → 產生報表。不保存任何跨請求狀態。
#[derive(Clone)]
pub struct ReportEngine {
    source: Arc<dyn InventorySource>,
}

impl ReportEngine {
    pub fn new(source: Arc<dyn InventorySource>) -> Self {
        Self { source }
    }

    pub async fn rows(&self) -> Result<Vec<InventoryRow>> {
        tracing::debug!("Extracting products...");
        let raw_products = self.source.fetch_products().await?;
        tracing::debug!("Extracted {} products", raw_products.len());

        Ok(normalize_all(&raw_products))
    }

    pub async fn run(&self, format: ReportFormat) -> Result<ReportDocument> {
        let rows = self.rows().await?;

        let document = render::render(format, &rows)?;
        tracing::info!(
            "Rendered {:?} report: {} rows, {} bytes",
            format,
            rows.len(),
            document.bytes().len()
        );

        Ok(document)
    }
}
