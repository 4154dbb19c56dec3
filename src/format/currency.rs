//! Currency formatting.

/// Format an amount with a currency symbol, two decimals and `,` grouping.
///
/// Negative amounts put the sign before the symbol (`-$5.00`). Non-finite
/// amounts (NaN, infinity) format as zero.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };

    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_amounts() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(5.0, "$"), "$5.00");
        assert_eq!(format_currency(19.99, "€"), "€19.99");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_currency(1000.0, "$"), "$1,000.00");
        assert_eq!(format_currency(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(999.999, "$"), "$1,000.00");
    }

    #[test]
    fn test_negative_sign_before_symbol() {
        assert_eq!(format_currency(-5.0, "$"), "-$5.00");
        // Rounds to zero, so no sign
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(format_currency(f64::NAN, "Rs "), "Rs 0.00");
        assert_eq!(format_currency(f64::INFINITY, "$"), "$0.00");
    }

    #[test]
    fn test_empty_symbol() {
        assert_eq!(format_currency(12.5, ""), "12.50");
    }
}
