//! # HTTP Server for Invoice Rendering
//!
//! Serves the print, download-HTML and download-PDF actions of the admin UI.
//!
//! ## Usage
//!
//! ```bash
//! invoicer serve --listen 0.0.0.0:8080 --settings settings.toml
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/api/template` | | template in use |
//! | POST | `/api/invoice/preview` | `{data, template?}` | HTML |
//! | POST | `/api/invoice/html` | `{sale, template?, settings?}` | HTML attachment |
//! | POST | `/api/invoice/pdf` | `{sale, template?, settings?}` | PDF, or HTML fallback |

mod handlers;
mod state;

pub use handlers::invoice::FALLBACK_HEADER;
pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::InvoicerError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/template", get(handlers::invoice::template))
        .route("/api/invoice/preview", post(handlers::invoice::preview))
        .route("/api/invoice/html", post(handlers::invoice::html))
        .route("/api/invoice/pdf", post(handlers::invoice::pdf))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use invoicer::export::PageFormat;
/// use invoicer::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), invoicer::error::InvoicerError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     settings_path: None,
///     template_path: None,
///     pdf_command: "wkhtmltopdf".to_string(),
///     page: PageFormat::A4,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), InvoicerError> {
    let listen_addr = config.listen_addr.clone();
    let app_state = Arc::new(AppState::load(config)?);

    info!("Invoicer HTTP server starting...");
    info!("Listening on: {}", listen_addr);
    info!("PDF converter: {}", app_state.config.pdf_command);

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| InvoicerError::Server(format!("Failed to bind to {}: {}", listen_addr, e)))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| InvoicerError::Server(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
