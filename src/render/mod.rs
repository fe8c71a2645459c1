pub mod layout;
pub mod pdf;
pub mod spreadsheet;

use crate::domain::model::{InventoryRow, ReportDocument, ReportFormat};
use crate::utils::error::Result;

pub use layout::{PageGeometry, REPORT_TITLE};

/// 依格式產生報表；三種格式共用同一份正規化資料
pub fn render(format: ReportFormat, rows: &[InventoryRow]) -> Result<ReportDocument> {
    let bytes = match format {
        ReportFormat::Json => serde_json::to_vec(rows)?,
        ReportFormat::Spreadsheet => spreadsheet::render_spreadsheet(rows)?,
        ReportFormat::Pdf => pdf::render_pdf(rows, &PageGeometry::a4(), REPORT_TITLE)?,
    };

    Ok(ReportDocument::new(format, bytes))
}
