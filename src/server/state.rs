//! Server state and configuration.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::error::InvoicerError;
use crate::export::{ExternalRasterizer, PageFormat, Rasterizer};
use crate::settings::Settings;
use crate::template::DEFAULT_TEMPLATE;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// TOML settings file; defaults apply when absent
    pub settings_path: Option<PathBuf>,
    /// Template file replacing the bundled one
    pub template_path: Option<PathBuf>,
    /// HTML to PDF converter program (e.g., "wkhtmltopdf")
    pub pdf_command: String,
    /// Page size for PDF output
    pub page: PageFormat,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Settings used when a request doesn't carry its own.
    pub settings: Settings,
    /// Template used when a request doesn't carry its own.
    pub template: String,
    pub rasterizer: Arc<dyn Rasterizer>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        settings: Settings,
        template: String,
        rasterizer: Arc<dyn Rasterizer>,
    ) -> Self {
        Self {
            config,
            settings,
            template,
            rasterizer,
        }
    }

    /// Read the configured settings and template files.
    pub fn load(config: ServerConfig) -> Result<Self, InvoicerError> {
        let settings = match &config.settings_path {
            Some(path) => {
                info!("Loading settings from {}", path.display());
                Settings::load(path)?
            }
            None => Settings::default(),
        };

        let template = match &config.template_path {
            Some(path) => {
                info!("Loading template from {}", path.display());
                fs::read_to_string(path)?
            }
            None => DEFAULT_TEMPLATE.to_string(),
        };

        let rasterizer = Arc::new(ExternalRasterizer::new(config.pdf_command.clone()));
        Ok(Self::new(config, settings, template, rasterizer))
    }
}
