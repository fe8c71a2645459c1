use crate::domain::model::RawProduct;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 庫存資料來源；正式環境為 HTTP 客戶端，測試可替換
#[async_trait]
pub trait InventorySource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<RawProduct>>;
}

pub trait ConfigProvider: Send + Sync {
    fn upstream_url(&self) -> &str;
    fn bind_addr(&self) -> &str;
    fn allowed_origin(&self) -> &str;
}
