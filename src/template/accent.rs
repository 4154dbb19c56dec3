//! Brand color slot in the template's `:root` CSS variables.
//!
//! Locates the value of `--accent` inside every `:root { ... }` rule. The
//! parser turns each located value into a slot that is filled with the
//! brand color at render time, so an `--accent` value written as a
//! placeholder is replaced like any other.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// `:root {` ... `--accent:` ... up to the next `;` or `}`.
///
/// `{{...}}` tokens are skipped as a unit so braces inside placeholders do
/// not end the rule or the value early.
static ACCENT_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(:root\s*\{(?:(?:\{\{[^{}]*\}\}|[^{}])*?[;\s])?\s*--accent\s*:\s*)(?:\{\{[^{}]*\}\}|[^;{}])*",
    )
    .expect("accent pattern is valid")
});

/// Byte ranges of every `--accent` value inside a `:root` rule, in order.
pub fn accent_values(template: &str) -> Vec<Range<usize>> {
    ACCENT_DECLARATION
        .captures_iter(template)
        .filter_map(|caps| Some(caps.get(1)?.end()..caps.get(0)?.end()))
        .collect()
}
