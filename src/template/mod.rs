//! # Invoice Template Renderer
//!
//! Turns an HTML template plus an [`InvoiceData`] record into the finished
//! invoice document. Rendering is a pure string transformation with no
//! failure modes:
//!
//! 1. the template is tokenized into literal text, scalar placeholders,
//!    the `--accent` slot of its `:root` rule ([`accent`]) and the single
//!    items loop ([`Template::parse`]);
//! 2. the token list is executed against the invoice ([`Template::render`]),
//!    writing the business brand color into every accent slot.
//!
//! Values are inserted as-is. Nothing is HTML-escaped: invoice data is the
//! application's own, not user markup.
//!
//! ## Example
//!
//! ```
//! use invoicer::invoice::{InvoiceData, InvoiceItem};
//! use invoicer::template::render;
//!
//! let mut data = InvoiceData::default();
//! data.customer.name = "Alice".to_string();
//! data.items.push(InvoiceItem { name: "Widget".into(), quantity: 2, ..Default::default() });
//!
//! let html = render("<p>{{customer.name}}</p>{{#loop}}<i>{{this.name}} x{{this.quantity}}</i>{{/loop}}", &data);
//! assert_eq!(html, "<p>Alice</p><i>Widget x2</i>");
//! ```

pub mod accent;
mod keys;
mod program;

pub use accent::accent_values;
pub use keys::{Field, ItemField};
pub use program::{LOOP_MARKERS, RowSegment, Segment, Template};

use crate::invoice::InvoiceData;

/// The bundled invoice template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/invoice.html");

/// Image shown when the business has no logo configured.
pub const LOGO_PLACEHOLDER: &str = "/images/logo-placeholder.svg";

/// Render a template for one invoice.
pub fn render(template: &str, data: &InvoiceData) -> String {
    Template::parse(template).render(data)
}

/// Render the bundled template.
pub fn render_default(data: &InvoiceData) -> String {
    render(DEFAULT_TEMPLATE, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::InvoiceItem;
    use pretty_assertions::assert_eq;

    const SCENARIO: &str = ":root{--accent:#111;} Hello {{customer.name}}, total {{totals.grand}}. {{#loop}}<li>{{this.name}} x{{this.quantity}}</li>{{/loop}}";

    fn scenario_data(items: Vec<InvoiceItem>) -> InvoiceData {
        let mut data = InvoiceData::default();
        data.customer.name = "Alice".to_string();
        data.totals.grand = "$50.00".to_string();
        data.business.brand_color = "#ff0000".to_string();
        data.items = items;
        data
    }

    fn item(name: &str, quantity: u32) -> InvoiceItem {
        InvoiceItem {
            name: name.to_string(),
            price: "$10.00".to_string(),
            quantity,
            total: "$20.00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_two_item_scenario() {
        let data = scenario_data(vec![item("Widget", 2), item("Gadget", 1)]);
        let html = render(SCENARIO, &data);
        assert_eq!(
            html,
            ":root{--accent:#ff0000;} Hello Alice, total $50.00. <li>Widget x2</li><li>Gadget x1</li>"
        );
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_empty_items_scenario() {
        let html = render(SCENARIO, &scenario_data(vec![]));
        assert_eq!(html, ":root{--accent:#ff0000;} Hello Alice, total $50.00. ");
        assert!(!html.contains("<li>"));
        assert!(!html.contains("{{#loop}}"));
        assert!(!html.contains("{{/loop}}"));
    }

    #[test]
    fn test_unset_email_renders_blank() {
        let html = render("<a>{{customer.email}}</a>", &InvoiceData::default());
        assert_eq!(html, "<a></a>");
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn test_blank_brand_color_uses_default() {
        let mut data = InvoiceData::default();
        data.business.brand_color = "  ".to_string();
        assert_eq!(
            render(":root { --accent: red; }", &data),
            ":root { --accent: #2c7be5; }"
        );
    }

    #[test]
    fn test_accent_placeholder_takes_brand_color() {
        let mut data = InvoiceData::default();
        data.business.brand_color = "#0a7d4f".to_string();
        data.customer.name = "Bo".to_string();
        let html = render(
            ":root { --accent: {{customer.name}}; } {{customer.name}}",
            &data,
        );
        assert_eq!(html, ":root { --accent: #0a7d4f; } Bo");
    }

    #[test]
    fn test_brand_color_inserted_verbatim() {
        let mut data = InvoiceData::default();
        data.business.brand_color = "{{customer.name}}".to_string();
        data.customer.name = "Bo".to_string();
        assert_eq!(
            render(":root{--accent:#111;}", &data),
            ":root{--accent:{{customer.name}};}"
        );
    }

    #[test]
    fn test_default_template_shape() {
        let template = Template::parse(DEFAULT_TEMPLATE);
        assert!(template.has_loop());
        assert!(DEFAULT_TEMPLATE.contains("--accent"));
        for field in Field::ALL {
            assert!(
                DEFAULT_TEMPLATE.contains(&format!("{{{{{}}}}}", field.key())),
                "default template is missing {}",
                field.key()
            );
        }
    }
}
