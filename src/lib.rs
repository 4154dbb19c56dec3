//! # Invoicer - Invoice Template Renderer
//!
//! Invoicer turns a stored sale into a finished invoice document. It provides:
//!
//! - **Mapping**: sale snapshot + business settings → pre-formatted invoice data
//! - **Rendering**: a small `{{placeholder}}` template language with one items loop
//! - **Export**: HTML artifacts, and PDF through an external converter with HTML fallback
//! - **Server**: HTTP endpoints for print preview and downloads
//!
//! ## Quick Start
//!
//! ```
//! use invoicer::{
//!     invoice::{InvoiceData, Sale},
//!     settings::Settings,
//!     template,
//! };
//!
//! let sale: Sale = serde_json::from_str(r#"{
//!     "id": "s-1",
//!     "invoiceNumber": "INV-0001",
//!     "createdAt": "2026-05-04T12:00:00+02:00",
//!     "customer": {"name": "Alice"},
//!     "items": [{"productName": "Widget", "unitPrice": 25, "quantity": 2, "total": 50}],
//!     "subtotal": 50, "total": 50, "amountPaid": 50
//! }"#).unwrap();
//!
//! // Project the sale with the current settings
//! let data = InvoiceData::from_sale(&sale, &Settings::default());
//!
//! // Render the bundled template
//! let html = template::render_default(&data);
//! assert!(html.contains("INV-0001"));
//! assert!(html.contains("Widget"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`invoice`] | Sale input, invoice data, mapping |
//! | [`template`] | Template renderer and bundled template |
//! | [`format`] | Currency and date formatting |
//! | [`settings`] | Business and locale profiles |
//! | [`export`] | HTML/PDF artifacts |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod error;
pub mod export;
pub mod format;
pub mod invoice;
pub mod server;
pub mod settings;
pub mod template;

// Re-exports for convenience
pub use error::InvoicerError;
pub use invoice::InvoiceData;
pub use settings::Settings;
