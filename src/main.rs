//! # Invoicer CLI
//!
//! Command-line interface for rendering invoices.
//!
//! ## Usage
//!
//! ```bash
//! # Render a sale to HTML on stdout
//! invoicer render --sale sale.json
//!
//! # Render with business settings and a custom template into a file
//! invoicer render --sale sale.json --settings settings.toml --template my.html -o out.html
//!
//! # Render to PDF (falls back to HTML when the converter fails)
//! invoicer render --sale sale.json --pdf --page letter
//!
//! # Print the bundled template, e.g. as a starting point for customizing
//! invoicer template > my.html
//!
//! # Serve the HTTP API
//! invoicer serve --listen 0.0.0.0:8080 --settings settings.toml
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoicer::{
    InvoicerError,
    export::{Artifact, ExternalRasterizer, PageFormat, export_pdf},
    invoice::{InvoiceData, Sale},
    server::{self, ServerConfig},
    settings::Settings,
    template::{self, DEFAULT_TEMPLATE},
};

/// Invoicer - invoice template renderer
#[derive(Parser, Debug)]
#[command(name = "invoicer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a sale into an invoice document
    Render {
        /// Sale snapshot (JSON)
        #[arg(long, value_name = "FILE")]
        sale: PathBuf,

        /// Business and locale settings (TOML)
        #[arg(long, value_name = "FILE")]
        settings: Option<PathBuf>,

        /// Template replacing the bundled one
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,

        /// Output file (HTML defaults to stdout, PDF to invoice-<number>.pdf)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Convert to PDF
        #[arg(long)]
        pdf: bool,

        /// PDF page format: a4 or letter
        #[arg(long, default_value = "a4")]
        page: String,

        /// HTML to PDF converter program
        #[arg(long, default_value = "wkhtmltopdf")]
        pdf_command: String,
    },

    /// Print the bundled invoice template
    Template,

    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Business and locale settings (TOML)
        #[arg(long, value_name = "FILE")]
        settings: Option<PathBuf>,

        /// Template replacing the bundled one
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,

        /// PDF page format: a4 or letter
        #[arg(long, default_value = "a4")]
        page: String,

        /// HTML to PDF converter program
        #[arg(long, default_value = "wkhtmltopdf")]
        pdf_command: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invoicer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), InvoicerError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            sale,
            settings,
            template: template_path,
            output,
            pdf,
            page,
            pdf_command,
        } => {
            let sale: Sale = serde_json::from_str(&fs::read_to_string(&sale)?)?;
            let settings = match settings {
                Some(path) => Settings::load(&path)?,
                None => Settings::default(),
            };
            let source = match template_path {
                Some(path) => fs::read_to_string(path)?,
                None => DEFAULT_TEMPLATE.to_string(),
            };

            let data = InvoiceData::from_sale(&sale, &settings);
            let html = template::render(&source, &data);

            if !pdf {
                return write_artifact(Artifact::Html(html), &data.invoice.number, output, false);
            }

            let page = parse_page(&page)?;
            let rasterizer = ExternalRasterizer::new(pdf_command);
            let export = export_pdf(&rasterizer, html, page);
            if let Some(reason) = &export.fallback_reason {
                warn!("PDF conversion failed ({}); writing HTML instead", reason);
            }
            write_artifact(export.artifact, &data.invoice.number, output, true)
        }
        Commands::Template => {
            print!("{}", DEFAULT_TEMPLATE);
            Ok(())
        }
        Commands::Serve {
            listen,
            settings,
            template,
            page,
            pdf_command,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                settings_path: settings,
                template_path: template,
                pdf_command,
                page: parse_page(&page)?,
            };
            server::serve(config).await
        }
    }
}

fn parse_page(name: &str) -> Result<PageFormat, InvoicerError> {
    PageFormat::by_name(name).ok_or_else(|| {
        InvoicerError::Settings(format!("Unknown page format '{}' (use a4 or letter)", name))
    })
}

/// Write an artifact to `output`, stdout (HTML only), or a default file name.
///
/// An explicit output path gets its extension corrected to the artifact's
/// kind, so a PDF request that fell back to HTML never lands in `x.pdf`.
fn write_artifact(
    artifact: Artifact,
    invoice_number: &str,
    output: Option<PathBuf>,
    to_file: bool,
) -> Result<(), InvoicerError> {
    let path = match output {
        Some(path) => path.with_extension(artifact.extension()),
        None if !to_file => {
            print!("{}", String::from_utf8_lossy(&artifact.into_bytes()));
            return Ok(());
        }
        None => PathBuf::from(artifact.file_name(invoice_number)),
    };

    save(&path, &artifact.into_bytes())?;
    info!("Saved to {}", path.display());
    Ok(())
}

fn save(path: &Path, bytes: &[u8]) -> Result<(), InvoicerError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
