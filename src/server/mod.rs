pub mod handlers;

use crate::adapters::InventoryClient;
use crate::config::ServiceSettings;
use crate::core::report::ReportEngine;
use crate::core::ConfigProvider;
use crate::utils::error::{ReportError, Result};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

pub const INVENTORY_ROUTE: &str = "/relatorio/estoque";
pub const SPREADSHEET_ROUTE: &str = "/relatorio/estoque/excel";
pub const PDF_ROUTE: &str = "/relatorio/estoque/pdf";

pub fn router(engine: ReportEngine, allowed_origin: &str) -> Result<Router> {
    Ok(Router::new()
        .route(INVENTORY_ROUTE, get(handlers::inventory_json))
        .route(SPREADSHEET_ROUTE, get(handlers::inventory_spreadsheet))
        .route(PDF_ROUTE, get(handlers::inventory_pdf))
        .layer(cors_layer(allowed_origin)?)
        .with_state(engine))
}

/// 只允許單一來源；帶憑證時不能用萬用字元，改為回映請求的方法與標頭
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin =
        HeaderValue::from_str(allowed_origin).map_err(|e| ReportError::InvalidConfigValueError {
            field: "server.allowed_origin".to_string(),
            value: allowed_origin.to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

pub async fn serve(settings: &ServiceSettings) -> Result<()> {
    let addr = settings.socket_addr()?;
    let client = InventoryClient::new(settings.upstream_url())?;
    tracing::info!("Upstream inventory endpoint: {}", client.products_url());

    let app = router(ReportEngine::new(Arc::new(client)), settings.allowed_origin())?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🚀 Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
