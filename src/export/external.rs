//! HTML → PDF through an external converter program.
//!
//! Each call gets its own scratch directory holding the HTML input and the
//! PDF output. The directory is removed when the call returns, whether the
//! conversion succeeded or not.

use std::fs;
use std::process::Command;
use tracing::info;

use super::{PageFormat, Rasterizer};
use crate::error::InvoicerError;

/// Default converter: `wkhtmltopdf`.
pub const DEFAULT_PDF_COMMAND: &str = "wkhtmltopdf";

/// Runs `<program> [--page-width W --page-height H] input.html output.pdf`.
#[derive(Debug, Clone)]
pub struct ExternalRasterizer {
    program: String,
    pass_page_size: bool,
}

impl ExternalRasterizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            pass_page_size: true,
        }
    }

    /// Don't pass page size flags (for converters that don't understand them).
    pub fn without_page_size(mut self) -> Self {
        self.pass_page_size = false;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ExternalRasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_PDF_COMMAND)
    }
}

impl Rasterizer for ExternalRasterizer {
    fn rasterize(&self, html: &str, page: PageFormat) -> Result<Vec<u8>, InvoicerError> {
        // Removed when dropped at the end of this call
        let workspace = tempfile::Builder::new().prefix("invoicer-").tempdir()?;
        let input = workspace.path().join("invoice.html");
        let output = workspace.path().join("invoice.pdf");
        fs::write(&input, html)?;

        let mut command = Command::new(&self.program);
        if self.pass_page_size {
            command
                .arg("--page-width")
                .arg(format!("{}mm", page.width_mm))
                .arg("--page-height")
                .arg(format!("{}mm", page.height_mm));
        }
        command.arg(&input).arg(&output);

        info!("Converting invoice to PDF with {} ({})", self.program, page.name);
        let result = command.output().map_err(|e| {
            InvoicerError::Rasterize(format!("failed to run {}: {}", self.program, e))
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(InvoicerError::Rasterize(format!(
                "{} exited with {}: {}",
                self.program,
                result.status,
                stderr.trim()
            )));
        }

        let bytes = fs::read(&output).map_err(|e| {
            InvoicerError::Rasterize(format!("{} produced no output: {}", self.program, e))
        })?;
        if bytes.is_empty() {
            return Err(InvoicerError::Rasterize(format!(
                "{} produced an empty file",
                self.program
            )));
        }
        Ok(bytes)
    }
}
