//! # Error Types
//!
//! This module defines error types used at the I/O edges of the invoicer
//! library. Rendering and mapping never fail; only reading inputs, talking
//! to the PDF converter, and serving HTTP can.

use thiserror::Error;

/// Main error type for invoicer operations
#[derive(Debug, Error)]
pub enum InvoicerError {
    /// Sale or template JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be parsed
    #[error("Settings error: {0}")]
    Settings(String),

    /// HTML to PDF conversion failed
    #[error("Rasterize error: {0}")]
    Rasterize(String),

    /// HTTP server failure (bind, accept loop)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
