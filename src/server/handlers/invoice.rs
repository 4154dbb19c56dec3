//! Invoice rendering handlers: print preview, HTML download, PDF download.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, warn};

use crate::export::{Artifact, export_pdf};
use crate::invoice::{InvoiceData, Sale};
use crate::settings::Settings;
use crate::template;

use super::super::state::AppState;

/// Set on PDF responses that carry the HTML fallback instead.
pub const FALLBACK_HEADER: HeaderName = HeaderName::from_static("x-invoicer-fallback");

/// Request body for sale-based rendering.
#[derive(Debug, Deserialize)]
pub struct SaleRequest {
    pub sale: Sale,
    /// Template overriding the server's.
    #[serde(default)]
    pub template: Option<String>,
    /// Settings overriding the server's. Malformed settings fall back to defaults.
    #[serde(default)]
    pub settings: Option<Value>,
}

/// Request body for rendering already-mapped invoice data.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub data: InvoiceData,
    #[serde(default)]
    pub template: Option<String>,
}

/// Handle GET /api/template - the template in use.
pub async fn template(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.template.clone())
}

/// Handle POST /api/invoice/preview - render mapped data for on-screen display.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.body_text()),
    };

    let template = req.template.as_deref().unwrap_or(&state.template);
    Html(template::render(template, &req.data)).into_response()
}

/// Handle POST /api/invoice/html - render a sale as a downloadable HTML file.
pub async fn html(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SaleRequest>, JsonRejection>,
) -> Response {
    let (number, html) = match render_sale(&state, body) {
        Ok(rendered) => rendered,
        Err(response) => return response,
    };

    info!("Rendered HTML invoice {}", number);
    artifact_response(Artifact::Html(html), &number, false)
}

/// Handle POST /api/invoice/pdf - render a sale and convert it to PDF.
///
/// When conversion fails the HTML artifact is returned instead, marked with
/// the `x-invoicer-fallback: html` header.
pub async fn pdf(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SaleRequest>, JsonRejection>,
) -> Response {
    let (number, html) = match render_sale(&state, body) {
        Ok(rendered) => rendered,
        Err(response) => return response,
    };

    // Conversion shells out, run it off the async workers
    let rasterizer = state.rasterizer.clone();
    let page = state.config.page;
    let export_result =
        tokio::task::spawn_blocking(move || export_pdf(rasterizer.as_ref(), html, page)).await;

    match export_result {
        Ok(export) => {
            if export.is_fallback() {
                warn!("Invoice {} served as HTML fallback", number);
            } else {
                info!("Rendered PDF invoice {}", number);
            }
            let fallback = export.is_fallback();
            artifact_response(export.artifact, &number, fallback)
        }
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Task error: {}", e),
        ),
    }
}

/// Decode a sale request and render it with the request's or server's
/// template and settings. Returns the invoice number with the HTML.
fn render_sale(
    state: &AppState,
    body: Result<Json<SaleRequest>, JsonRejection>,
) -> Result<(String, String), Response> {
    let Json(req) =
        body.map_err(|e| error_response(StatusCode::BAD_REQUEST, &e.body_text()))?;

    let request_settings = req.settings.as_ref().map(Settings::from_json_lenient);
    let settings = request_settings.as_ref().unwrap_or(&state.settings);
    let template = req.template.as_deref().unwrap_or(&state.template);

    let data = InvoiceData::from_sale(&req.sale, settings);
    let html = template::render(template, &data);
    Ok((data.invoice.number, html))
}

fn artifact_response(artifact: Artifact, invoice_number: &str, fallback: bool) -> Response {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        artifact.file_name(invoice_number)
    );
    let content_type = artifact.content_type();

    let mut response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.into_bytes(),
    )
        .into_response();

    if fallback {
        response
            .headers_mut()
            .insert(FALLBACK_HEADER, HeaderValue::from_static("html"));
    }
    response
}

/// Generate error response JSON.
fn error_response(status: StatusCode, error_msg: &str) -> Response {
    (status, Json(json!({"success": false, "error": error_msg}))).into_response()
}
