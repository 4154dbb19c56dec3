//! Sale snapshot → [`InvoiceData`] projection.
//!
//! All formatting happens here, through the [`crate::format`] helpers, so
//! the renderer only ever sees finished strings.

use super::sale::{Sale, SaleCustomer, SaleItem};
use super::types::*;
use crate::format::format_currency;
use crate::settings::Settings;

/// Description printed under line items that refer to a product variant.
pub const VARIANT_NOTE: &str = "Product variant";

/// Customer name used for sales without a customer record.
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

const DEFAULT_PAYMENT_METHOD: &str = "Cash";
const TAX_LABEL: &str = "Tax";

impl InvoiceData {
    /// Project a sale and the current settings into renderer input.
    ///
    /// Never fails: anything missing resolves to a blank string, zero, or
    /// the documented fallback literal.
    pub fn from_sale(sale: &Sale, settings: &Settings) -> Self {
        let symbol = settings.system.currency_symbol();
        let money = |amount: f64| format_currency(amount, symbol);
        let business = &settings.business;

        let (business_line1, business_line2) = split_address(business.address.as_deref());

        let signature = if business.signature_name.is_some()
            || business.signature_image_url.is_some()
        {
            Some(Signature {
                image_url: business.signature_image_url.clone().unwrap_or_default(),
                name: business.signature_name.clone().unwrap_or_default(),
                title: business.signature_title.clone().unwrap_or_default(),
            })
        } else {
            None
        };

        InvoiceData {
            invoice: InvoiceHeader {
                number: invoice_number(sale),
                date: settings.system.date_pattern().format(&sale.created_at),
            },
            customer: customer_info(sale.customer.as_ref()),
            business: BusinessInfo {
                name: business.name.clone().unwrap_or_default(),
                logo_url: business.logo_url.clone().unwrap_or_default(),
                email_primary: business.email.clone().unwrap_or_default(),
                email_secondary: business.email_secondary.clone().unwrap_or_default(),
                phone: business.phone.clone().unwrap_or_default(),
                hours: business.hours.clone().unwrap_or_default(),
                address_line1: business_line1,
                address_line2: business_line2,
                brand_color: business.brand_color().to_string(),
            },
            items: sale.items.iter().map(|item| line_item(item, &money)).collect(),
            totals: Totals {
                subtotal: money(sale.subtotal),
                discount: money(sale.discount_amount),
                discount_label: discount_label(sale.discount_percent),
                // No tax concept on sales
                tax: money(0.0),
                tax_label: TAX_LABEL.to_string(),
                grand: money(sale.total),
                paid: money(sale.amount_paid),
                due: money((sale.total - sale.amount_paid).max(0.0)),
            },
            payment: PaymentInfo {
                method: sale
                    .payment_method
                    .as_deref()
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .unwrap_or(DEFAULT_PAYMENT_METHOD)
                    .to_string(),
                masked_details: sale
                    .payment_details
                    .as_deref()
                    .map(mask_details)
                    .unwrap_or_default(),
            },
            notes: Notes {
                important: sale.notes.clone().unwrap_or_default(),
            },
            terms: business.terms.clone().unwrap_or_default(),
            signature,
        }
    }
}

fn invoice_number(sale: &Sale) -> String {
    match sale.invoice_number.as_deref().map(str::trim) {
        Some(number) if !number.is_empty() => number.to_string(),
        _ => sale.id.clone(),
    }
}

fn customer_info(customer: Option<&SaleCustomer>) -> CustomerInfo {
    let Some(customer) = customer else {
        return CustomerInfo {
            name: WALK_IN_CUSTOMER.to_string(),
            ..Default::default()
        };
    };

    let (address_line1, address_line2) = split_address(customer.address.as_deref());
    let name = customer.name.trim();

    CustomerInfo {
        name: if name.is_empty() {
            WALK_IN_CUSTOMER.to_string()
        } else {
            name.to_string()
        },
        address_line1,
        address_line2,
        email: customer.email.clone().unwrap_or_default(),
        phone: customer.phone.clone().unwrap_or_default(),
    }
}

fn line_item(item: &SaleItem, money: &impl Fn(f64) -> String) -> InvoiceItem {
    InvoiceItem {
        name: item.product_name.clone(),
        description: if item.variant_id.is_some() {
            VARIANT_NOTE.to_string()
        } else {
            String::new()
        },
        price: money(item.unit_price),
        quantity: item.quantity,
        total: money(item.total),
    }
}

/// Split a free-text address into its first line and the rest.
///
/// Blank lines are dropped; the remaining lines are joined with `, `.
pub fn split_address(address: Option<&str>) -> (String, String) {
    let mut lines = address
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let first = lines.next().unwrap_or_default().to_string();
    let rest = lines.collect::<Vec<_>>().join(", ");
    (first, rest)
}

/// `(10%)` for a non-zero percentage, blank otherwise.
pub fn discount_label(percent: Option<f64>) -> String {
    match percent {
        Some(p) if p.is_finite() && p != 0.0 => format!("({}%)", p),
        _ => String::new(),
    }
}

/// Keep the last four characters of payment details, star out the rest.
pub fn mask_details(details: &str) -> String {
    let chars: Vec<char> = details.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() <= 4 {
        return chars.into_iter().collect();
    }
    let hidden = chars.len() - 4;
    "*".repeat(hidden) + &chars[hidden..].iter().collect::<String>()
}
