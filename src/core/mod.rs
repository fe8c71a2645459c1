pub mod normalizer;
pub mod report;

pub use crate::domain::model::{InventoryRow, RawProduct, ReportDocument, ReportFormat};
pub use crate::domain::ports::{ConfigProvider, InventorySource};
pub use crate::utils::error::Result;
