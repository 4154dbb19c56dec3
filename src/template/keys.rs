//! Placeholder key tables.
//!
//! [`Field`] lists every `{{dotted.key}}` the renderer substitutes anywhere
//! in a template; [`ItemField`] lists the `{{this.*}}` keys that only mean
//! something inside the items loop. Both are closed sets: any other key is
//! left in the output untouched.

use super::LOGO_PLACEHOLDER;
use crate::invoice::{InvoiceData, InvoiceItem};

macro_rules! fields {
    ($($variant:ident => $key:literal, |$d:ident| $value:expr;)+) => {
        /// A recognized scalar placeholder.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            /// Every recognized scalar placeholder, in template order.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// The dotted key, without braces.
            pub fn key(&self) -> &'static str {
                match self {
                    $(Field::$variant => $key,)+
                }
            }

            fn value<'d>(&self, data: &'d InvoiceData) -> &'d str {
                match self {
                    $(Field::$variant => {
                        let $d = data;
                        let value: &'d str = $value;
                        value
                    })+
                }
            }
        }
    };
}

fields! {
    InvoiceNumber => "invoice.number", |d| &d.invoice.number;
    InvoiceDate => "invoice.date", |d| &d.invoice.date;
    CustomerName => "customer.name", |d| &d.customer.name;
    CustomerAddressLine1 => "customer.addressLine1", |d| &d.customer.address_line1;
    CustomerAddressLine2 => "customer.addressLine2", |d| &d.customer.address_line2;
    CustomerEmail => "customer.email", |d| &d.customer.email;
    CustomerPhone => "customer.phone", |d| &d.customer.phone;
    BusinessName => "business.name", |d| &d.business.name;
    BusinessLogoUrl => "business.logoUrl", |d| &d.business.logo_url;
    BusinessEmailPrimary => "business.emailPrimary", |d| &d.business.email_primary;
    BusinessEmailSecondary => "business.emailSecondary", |d| &d.business.email_secondary;
    BusinessPhone => "business.phone", |d| &d.business.phone;
    BusinessHours => "business.hours", |d| &d.business.hours;
    BusinessAddressLine1 => "business.addressLine1", |d| &d.business.address_line1;
    BusinessAddressLine2 => "business.addressLine2", |d| &d.business.address_line2;
    TotalsSubtotal => "totals.subtotal", |d| &d.totals.subtotal;
    TotalsDiscount => "totals.discount", |d| &d.totals.discount;
    TotalsDiscountLabel => "totals.discountLabel", |d| &d.totals.discount_label;
    TotalsTax => "totals.tax", |d| &d.totals.tax;
    TotalsTaxLabel => "totals.taxLabel", |d| &d.totals.tax_label;
    TotalsGrand => "totals.grand", |d| &d.totals.grand;
    TotalsPaid => "totals.paid", |d| &d.totals.paid;
    TotalsDue => "totals.due", |d| &d.totals.due;
    PaymentMethod => "payment.method", |d| &d.payment.method;
    PaymentMaskedDetails => "payment.maskedDetails", |d| &d.payment.masked_details;
    NotesImportant => "notes.important", |d| &d.notes.important;
    Terms => "terms", |d| &d.terms;
    SignatureImageUrl => "signature.imageUrl", |d| d.signature.as_ref().map_or("", |s| s.image_url.as_str());
    SignatureName => "signature.name", |d| d.signature.as_ref().map_or("", |s| s.name.as_str());
    SignatureTitle => "signature.title", |d| d.signature.as_ref().map_or("", |s| s.title.as_str());
}

impl Field {
    /// Look up a key exactly as written between the braces.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// The substitution text for this field.
    ///
    /// A blank logo URL resolves to the generic placeholder image.
    pub fn resolve<'d>(&self, data: &'d InvoiceData) -> &'d str {
        let value = self.value(data);
        if *self == Field::BusinessLogoUrl && value.is_empty() {
            LOGO_PLACEHOLDER
        } else {
            value
        }
    }
}

/// A per-item placeholder, valid only inside the items loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Description,
    Price,
    Quantity,
    Total,
}

impl ItemField {
    pub const ALL: [ItemField; 5] = [
        ItemField::Name,
        ItemField::Description,
        ItemField::Price,
        ItemField::Quantity,
        ItemField::Total,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ItemField::Name => "this.name",
            ItemField::Description => "this.description",
            ItemField::Price => "this.price",
            ItemField::Quantity => "this.quantity",
            ItemField::Total => "this.total",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Append this field's value for `item` to `out`.
    pub fn write(&self, item: &InvoiceItem, out: &mut String) {
        match self {
            ItemField::Name => out.push_str(&item.name),
            ItemField::Description => out.push_str(&item.description),
            ItemField::Price => out.push_str(&item.price),
            ItemField::Quantity => out.push_str(&item.quantity.to_string()),
            ItemField::Total => out.push_str(&item.total),
        }
    }
}
