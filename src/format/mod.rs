//! # Formatting
//!
//! Pure formatting helpers the sale mapper injects into every invoice:
//! money amounts and calendar dates. The renderer itself never formats
//! anything; it only receives the strings these produce.
//!
//! ## Example
//!
//! ```
//! use invoicer::format::{format_currency, format_date};
//!
//! assert_eq!(format_currency(1234.5, "$"), "$1,234.50");
//!
//! let ts = chrono::DateTime::parse_from_rfc3339("2026-03-07T10:00:00+00:00").unwrap();
//! assert_eq!(format_date(&ts, "yyyy-MM-dd"), "2026-03-07");
//! ```

mod currency;
mod date;

pub use currency::format_currency;
pub use date::{DatePattern, format_date};
