//! # Settings
//!
//! The business profile (who is issuing the invoice) and the system profile
//! (locale: currency symbol and date pattern) read at render time.
//!
//! Settings are edited by people in an admin screen and stored loosely, so
//! loading them never rejects a value: a field of the wrong type is treated
//! as unset, and a section that is not a table/object falls back to its
//! defaults.
//!
//! ## TOML layout
//!
//! ```toml
//! [business]
//! name = "Corner Shop"
//! brandColor = "#0a7d4f"
//! address = "12 Market Street\nSpringfield"
//!
//! [system]
//! currencySymbol = "€"
//! dateFormat = "yyyy-MM-dd"
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::InvoicerError;
use crate::format::DatePattern;
use crate::invoice::DEFAULT_BRAND_COLOR;

/// Business profile shown in the invoice header, footer and signature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email_secondary: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    /// Opening hours, free text.
    #[serde(deserialize_with = "lenient_string")]
    pub hours: Option<String>,
    /// Multi-line postal address.
    #[serde(deserialize_with = "lenient_string")]
    pub address: Option<String>,
    /// CSS color used for the template's `--accent` variable.
    #[serde(deserialize_with = "lenient_string")]
    pub brand_color: Option<String>,
    /// Terms and conditions printed at the bottom of every invoice.
    #[serde(deserialize_with = "lenient_string")]
    pub terms: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub signature_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub signature_title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub signature_image_url: Option<String>,
}

impl BusinessProfile {
    /// Configured brand color, or `#2c7be5`.
    pub fn brand_color(&self) -> &str {
        self.brand_color.as_deref().unwrap_or(DEFAULT_BRAND_COLOR)
    }
}

/// Locale settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemProfile {
    #[serde(deserialize_with = "lenient_string")]
    pub currency_symbol: Option<String>,
    /// One of the patterns in [`DatePattern`]; anything else means `dd/MM/yyyy`.
    #[serde(deserialize_with = "lenient_string")]
    pub date_format: Option<String>,
}

impl SystemProfile {
    /// Configured currency symbol, or `$`.
    pub fn currency_symbol(&self) -> &str {
        self.currency_symbol.as_deref().unwrap_or("$")
    }

    pub fn date_pattern(&self) -> DatePattern {
        self.date_format
            .as_deref()
            .map(DatePattern::parse)
            .unwrap_or_default()
    }
}

/// Everything the sale mapper reads besides the sale itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "lenient_section")]
    pub business: BusinessProfile,
    #[serde(deserialize_with = "lenient_section")]
    pub system: SystemProfile,
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// Only unreadable files and TOML syntax errors are reported; bad
    /// values inside well-formed TOML fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, InvoicerError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| InvoicerError::Settings(format!("{}: {}", path.display(), e)))
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Build settings from an arbitrary JSON value.
    ///
    /// Never fails: anything that is not an object yields the defaults.
    pub fn from_json_lenient(value: &Value) -> Self {
        if !value.is_object() {
            if !value.is_null() {
                warn!("settings payload is not an object, using defaults");
            }
            return Self::default();
        }
        match serde_json::from_value(value.clone()) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("unreadable settings payload, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

/// Accept any scalar as a string; treat blanks and non-scalars as unset.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let s = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return Ok(None),
    };
    if s.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(s))
    }
}

/// Decode a settings section, falling back to its defaults when malformed.
fn lenient_section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}
