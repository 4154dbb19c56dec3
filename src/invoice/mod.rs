//! # Invoice Data
//!
//! The renderer's input record ([`InvoiceData`]) and the projection that
//! builds it from a stored [`Sale`] plus the current [`Settings`].
//!
//! ## Example
//!
//! ```
//! use invoicer::invoice::{InvoiceData, Sale};
//! use invoicer::settings::Settings;
//!
//! let sale: Sale = serde_json::from_str(r#"{
//!     "id": "s-1",
//!     "createdAt": "2026-02-01T09:00:00Z",
//!     "items": [{"productName": "Widget", "unitPrice": 2.5, "quantity": 4, "total": 10}],
//!     "subtotal": 10, "total": 10, "amountPaid": 10
//! }"#).unwrap();
//!
//! let data = InvoiceData::from_sale(&sale, &Settings::default());
//! assert_eq!(data.invoice.date, "01/02/2026");
//! assert_eq!(data.items[0].total, "$10.00");
//! ```
//!
//! [`Settings`]: crate::settings::Settings

mod mapping;
mod sale;
mod types;

pub use mapping::{VARIANT_NOTE, WALK_IN_CUSTOMER, discount_label, mask_details, split_address};
pub use sale::{Sale, SaleCustomer, SaleItem};
pub use types::*;
