use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use httpmock::prelude::*;
use inventory_report::server::{self, INVENTORY_ROUTE, PDF_ROUTE, SPREADSHEET_ROUTE};
use inventory_report::{InventoryClient, ReportEngine};
use std::io::Read;
use std::sync::Arc;
use tower::ServiceExt;

const ORIGIN: &str = "http://localhost:5173";

fn app_for(server: &MockServer) -> axum::Router {
    let client = InventoryClient::new(&server.base_url()).unwrap();
    server::router(ReportEngine::new(Arc::new(client)), ORIGIN).unwrap()
}

async fn get(app: axum::Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn mock_products(server: &MockServer, products: serde_json::Value) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/produtos");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(products);
        })
        .await
}

#[tokio::test]
async fn test_json_report_end_to_end() {
    let server = MockServer::start_async().await;
    let api_mock = mock_products(
        &server,
        serde_json::json!([
            {"nome": "Widget", "estoque": {"quantidade": 5}},
            {"nome": "Gadget"}
        ]),
    )
    .await;

    let response = get(app_for(&server), INVENTORY_ROUTE).await;

    api_mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        body,
        serde_json::json!([
            {"name": "Widget", "quantity": 5},
            {"name": "Gadget", "quantity": 0}
        ])
    );
}

#[tokio::test]
async fn test_spreadsheet_report_end_to_end() {
    let server = MockServer::start_async().await;
    mock_products(
        &server,
        serde_json::json!([
            {"nome": "Widget", "estoque": {"quantidade": 5}},
            {"nome": "Gadget"},
            {"estoque": {"quantidade": 9}}
        ]),
    )
    .await;

    let response = get(app_for(&server), SPREADSHEET_ROUTE).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=relatorio_estoque.xlsx"
    );

    let bytes = body_bytes(response).await;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut sheet = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut sheet)
        .unwrap();

    assert_eq!(sheet.matches("<row ").count(), 4);
    let header = sheet.find("Product name").unwrap();
    let widget = sheet.find("Widget").unwrap();
    let gadget = sheet.find("Gadget").unwrap();
    let unnamed = sheet.find("No name").unwrap();
    assert!(header < widget && widget < gadget && gadget < unnamed);
}

#[tokio::test]
async fn test_pdf_report_end_to_end() {
    let server = MockServer::start_async().await;
    let products: Vec<serde_json::Value> = (0..70)
        .map(|i| serde_json::json!({"nome": format!("Item {}", i), "estoque": {"quantidade": i}}))
        .collect();
    mock_products(&server, serde_json::Value::Array(products)).await;

    let response = get(app_for(&server), PDF_ROUTE).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=relatorio_estoque.pdf"
    );
    assert!(body_bytes(response).await.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_upstream_503_fails_every_endpoint() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/produtos");
            then.status(503);
        })
        .await;

    for route in [INVENTORY_ROUTE, SPREADSHEET_ROUTE, PDF_ROUTE] {
        let response = get(app_for(&server), route).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{route}");
        assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());

        let body: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, serde_json::json!({"detail": "Failed to fetch products"}));
    }

    api_mock.assert_hits_async(3).await;
}

#[tokio::test]
async fn test_empty_upstream_list() {
    let server = MockServer::start_async().await;
    mock_products(&server, serde_json::json!([])).await;

    let response = get(app_for(&server), INVENTORY_ROUTE).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"[]");
}

#[tokio::test]
async fn test_cors_allows_only_configured_origin() {
    let server = MockServer::start_async().await;
    mock_products(&server, serde_json::json!([])).await;

    let allowed = app_for(&server)
        .oneshot(
            Request::builder()
                .uri(INVENTORY_ROUTE)
                .header(header::ORIGIN, ORIGIN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ORIGIN
    );
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );

    let rejected = app_for(&server)
        .oneshot(
            Request::builder()
                .uri(INVENTORY_ROUTE)
                .header(header::ORIGIN, "http://evil.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(rejected
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = MockServer::start_async().await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri(PDF_ROUTE)
                .header(header::ORIGIN, ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ORIGIN
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET"
    );
}

#[test]
fn test_router_rejects_invalid_origin() {
    let client = InventoryClient::new("http://127.0.0.1:1").unwrap();
    let result = server::router(ReportEngine::new(Arc::new(client)), "http://bad\norigin");
    assert!(result.is_err());
}
