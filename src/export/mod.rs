//! # Export
//!
//! Turns a rendered invoice into a downloadable artifact: the HTML itself,
//! or a PDF produced by a [`Rasterizer`]. PDF export never fails outright;
//! when conversion breaks, the HTML artifact is handed back instead together
//! with the reason.
//!
//! ## Page Formats
//!
//! | Format | Width | Height |
//! |--------|-------|--------|
//! | A4 | 210 mm | 297 mm |
//! | Letter | 215.9 mm | 279.4 mm |

mod external;

pub use external::ExternalRasterizer;

use tracing::warn;

use crate::error::InvoicerError;

/// Physical page size for PDF output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
    pub name: &'static str,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageFormat {
    pub const A4: PageFormat = PageFormat {
        name: "a4",
        width_mm: 210.0,
        height_mm: 297.0,
    };

    pub const LETTER: PageFormat = PageFormat {
        name: "letter",
        width_mm: 215.9,
        height_mm: 279.4,
    };

    /// Look up a format by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        [Self::A4, Self::LETTER]
            .into_iter()
            .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4
    }
}

/// Converts rendered HTML into PDF bytes.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, html: &str, page: PageFormat) -> Result<Vec<u8>, InvoicerError>;
}

/// A finished invoice document.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Html(String),
    Pdf(Vec<u8>),
}

impl Artifact {
    pub fn content_type(&self) -> &'static str {
        match self {
            Artifact::Html(_) => "text/html; charset=utf-8",
            Artifact::Pdf(_) => "application/pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Artifact::Html(_) => "html",
            Artifact::Pdf(_) => "pdf",
        }
    }

    /// Download file name, e.g. `invoice-INV-0042.pdf`.
    pub fn file_name(&self, invoice_number: &str) -> String {
        let stem: String = invoice_number
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if stem.is_empty() {
            format!("invoice.{}", self.extension())
        } else {
            format!("invoice-{}.{}", stem, self.extension())
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Artifact::Html(html) => html.into_bytes(),
            Artifact::Pdf(bytes) => bytes,
        }
    }
}

/// Result of a PDF export attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub artifact: Artifact,
    /// Why the PDF could not be produced, when `artifact` is the HTML fallback.
    pub fallback_reason: Option<String>,
}

impl Export {
    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Convert HTML to PDF, falling back to the HTML artifact on failure.
pub fn export_pdf(rasterizer: &dyn Rasterizer, html: String, page: PageFormat) -> Export {
    match rasterizer.rasterize(&html, page) {
        Ok(bytes) => Export {
            artifact: Artifact::Pdf(bytes),
            fallback_reason: None,
        },
        Err(e) => {
            warn!("PDF export failed, offering HTML instead: {}", e);
            Export {
                artifact: Artifact::Html(html),
                fallback_reason: Some(e.to_string()),
            }
        }
    }
}
