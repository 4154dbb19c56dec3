//! Sale snapshot: the denormalized record read from the backend before
//! rendering (sale header plus its line items).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A sale as stored, with its line items attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    /// Human-facing invoice number; the sale id is used when absent.
    #[serde(default)]
    pub invoice_number: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub customer: Option<SaleCustomer>,
    #[serde(default)]
    pub items: Vec<SaleItem>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub discount_percent: Option<f64>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Card number, account or reference; masked before it reaches the invoice.
    #[serde(default)]
    pub payment_details: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleCustomer {
    pub name: String,
    /// Free text, one address line per text line.
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_name: String,
    /// Set when the line refers to a product variant rather than the base product.
    #[serde(default)]
    pub variant_id: Option<String>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub total: f64,
}
