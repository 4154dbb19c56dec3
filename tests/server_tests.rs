//! # Server Tests
//!
//! Drives the axum router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use invoicer::InvoicerError;
use invoicer::export::{PageFormat, Rasterizer};
use invoicer::server::{AppState, FALLBACK_HEADER, ServerConfig, router};
use invoicer::settings::Settings;
use invoicer::template::DEFAULT_TEMPLATE;

const SALE_JSON: &str = include_str!("fixtures/sale.json");
const SETTINGS_TOML: &str = include_str!("fixtures/settings.toml");

struct FakePdf;

impl Rasterizer for FakePdf {
    fn rasterize(&self, html: &str, page: PageFormat) -> Result<Vec<u8>, InvoicerError> {
        Ok(format!("%PDF {} {}", page.name, html.len()).into_bytes())
    }
}

struct NoConverter;

impl Rasterizer for NoConverter {
    fn rasterize(&self, _html: &str, _page: PageFormat) -> Result<Vec<u8>, InvoicerError> {
        Err(InvoicerError::Rasterize("converter not installed".to_string()))
    }
}

fn app(rasterizer: Arc<dyn Rasterizer>) -> Router {
    let config = ServerConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        settings_path: None,
        template_path: None,
        pdf_command: "fake".to_string(),
        page: PageFormat::A4,
    };
    let settings = Settings::from_toml(SETTINGS_TOML).unwrap();
    router(Arc::new(AppState::new(
        config,
        settings,
        DEFAULT_TEMPLATE.to_string(),
        rasterizer,
    )))
}

fn sale() -> Value {
    serde_json::from_str(SALE_JSON).unwrap()
}

async fn post(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_get_template() {
    let response = app(Arc::new(FakePdf))
        .oneshot(Request::get("/api/template").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, DEFAULT_TEMPLATE);
}

#[tokio::test]
async fn test_html_download() {
    let response = post(app(Arc::new(FakePdf)), "/api/invoice/html", json!({"sale": sale()})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"invoice-INV-2026-0107.html\""
    );
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let html = body_text(response).await;
    // Server settings apply
    assert!(html.contains("<h1>Harbour Goods</h1>"));
    assert!(html.contains("£132.75"));
    assert_eq!(html.matches("class=\"item-row").count(), 3);
}

#[tokio::test]
async fn test_html_with_request_template_and_settings() {
    let body = json!({
        "sale": sale(),
        "template": "<b>{{business.name}}</b> {{totals.grand}} {{#loop}}[{{this.name}}]{{/loop}}",
        "settings": {"business": {"name": "Pop-up Stall"}, "system": "not an object"}
    });
    let response = post(app(Arc::new(FakePdf)), "/api/invoice/html", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "<b>Pop-up Stall</b> $132.75 [Linen Shirt][Canvas Tote][Wool Socks]"
    );
}

#[tokio::test]
async fn test_preview_mapped_data() {
    let body = json!({
        "data": {
            "customer": {"name": "Alice"},
            "totals": {"grand": "$50.00"},
            "business": {"brandColor": "#ff0000"},
            "items": [{"name": "Widget", "quantity": 2}, {"name": "Gadget", "quantity": 1}]
        },
        "template": ":root{--accent:#111;} Hello {{customer.name}}, total {{totals.grand}}. {{#loop}}<li>{{this.name}} x{{this.quantity}}</li>{{/loop}}"
    });
    let response = post(app(Arc::new(FakePdf)), "/api/invoice/preview", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        ":root{--accent:#ff0000;} Hello Alice, total $50.00. <li>Widget x2</li><li>Gadget x1</li>"
    );
}

#[tokio::test]
async fn test_pdf_download() {
    let response = post(app(Arc::new(FakePdf)), "/api/invoice/pdf", json!({"sale": sale()})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"invoice-INV-2026-0107.pdf\""
    );
    assert!(response.headers().get(FALLBACK_HEADER).is_none());
    assert!(body_text(response).await.starts_with("%PDF a4 "));
}

#[tokio::test]
async fn test_pdf_falls_back_to_html() {
    let response = post(app(Arc::new(NoConverter)), "/api/invoice/pdf", json!({"sale": sale()})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[FALLBACK_HEADER], "html");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"invoice-INV-2026-0107.html\""
    );
    assert!(body_text(response).await.contains("<h1>Harbour Goods</h1>"));
}

#[tokio::test]
async fn test_malformed_body() {
    let response = post(
        app(Arc::new(FakePdf)),
        "/api/invoice/html",
        json!({"sale": {"id": "x"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(error["success"], false);
    assert!(error["error"].as_str().unwrap().contains("createdAt"));
}
