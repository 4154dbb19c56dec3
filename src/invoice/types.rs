//! The renderer's input record.
//!
//! Every field is a plain `String` defaulting to `""`, so an absent value
//! and a blank value render the same way: as nothing. Monetary fields are
//! already formatted by the time they land here.

use serde::{Deserialize, Serialize};

/// Accent color used when the business has not configured one.
pub const DEFAULT_BRAND_COLOR: &str = "#2c7be5";

/// Fully resolved, pre-formatted projection of a sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceData {
    pub invoice: InvoiceHeader,
    pub customer: CustomerInfo,
    pub business: BusinessInfo,
    pub items: Vec<InvoiceItem>,
    pub totals: Totals,
    pub payment: PaymentInfo,
    pub notes: Notes,
    pub terms: String,
    pub signature: Option<Signature>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceHeader {
    pub number: String,
    /// Already formatted with the configured date pattern.
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub logo_url: String,
    pub email_primary: String,
    pub email_secondary: String,
    pub phone: String,
    pub hours: String,
    pub address_line1: String,
    pub address_line2: String,
    /// CSS color written into the template's `--accent` variable.
    pub brand_color: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            logo_url: String::new(),
            email_primary: String::new(),
            email_secondary: String::new(),
            phone: String::new(),
            hours: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            brand_color: DEFAULT_BRAND_COLOR.to_string(),
        }
    }
}

/// One invoice row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceItem {
    pub name: String,
    pub description: String,
    /// Formatted unit price.
    pub price: String,
    pub quantity: u32,
    /// Formatted line total.
    pub total: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: String,
    pub discount: String,
    /// e.g. `(10%)`, or blank when there is no percentage discount.
    pub discount_label: String,
    pub tax: String,
    pub tax_label: String,
    pub grand: String,
    pub paid: String,
    pub due: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: String,
    pub masked_details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notes {
    pub important: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Signature {
    pub image_url: String,
    pub name: String,
    pub title: String,
}
