use crate::core::report::ReportEngine;
use crate::domain::model::ReportFormat;
use crate::utils::error::ReportError;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

/// GET /relatorio/estoque
pub async fn inventory_json(State(engine): State<ReportEngine>) -> Result<Response, ReportError> {
    download(&engine, ReportFormat::Json).await
}

/// GET /relatorio/estoque/excel
pub async fn inventory_spreadsheet(
    State(engine): State<ReportEngine>,
) -> Result<Response, ReportError> {
    download(&engine, ReportFormat::Spreadsheet).await
}

/// GET /relatorio/estoque/pdf
pub async fn inventory_pdf(State(engine): State<ReportEngine>) -> Result<Response, ReportError> {
    download(&engine, ReportFormat::Pdf).await
}

async fn download(engine: &ReportEngine, format: ReportFormat) -> Result<Response, ReportError> {
    let document = engine.run(format).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(document.media_type()),
    );
    if let Some(name) = document.filename() {
        headers.insert(header::CONTENT_DISPOSITION, attachment(name)?);
    }

    Ok((StatusCode::OK, headers, document.into_bytes()).into_response())
}

fn attachment(filename: &str) -> Result<HeaderValue, ReportError> {
    HeaderValue::from_str(&format!("attachment; filename={filename}")).map_err(|e| {
        ReportError::RenderError {
            message: format!("invalid download filename {:?}: {}", filename, e),
        }
    })
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        tracing::error!("❌ Report request failed: {}", self);
        let body = Json(serde_json::json!({ "detail": self.user_friendly_message() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
