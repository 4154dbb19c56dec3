//! Token-pattern date formatting.
//!
//! Patterns are built from three tokens: `dd` (zero-padded day), `MM`
//! (zero-padded month) and `yyyy` (four-digit year). Only the patterns in
//! [`DatePattern`] are accepted; anything else falls back to `dd/MM/yyyy`.

use chrono::{DateTime, Datelike, TimeZone};

/// Supported invoice date patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePattern {
    /// `dd/MM/yyyy`
    #[default]
    DayMonthYear,
    /// `MM/dd/yyyy`
    MonthDayYear,
    /// `yyyy-MM-dd`
    Iso,
    /// `dd-MM-yyyy`
    DayMonthYearDash,
    /// `dd.MM.yyyy`
    DayMonthYearDot,
}

impl DatePattern {
    pub const ALL: [DatePattern; 5] = [
        DatePattern::DayMonthYear,
        DatePattern::MonthDayYear,
        DatePattern::Iso,
        DatePattern::DayMonthYearDash,
        DatePattern::DayMonthYearDot,
    ];

    /// Parse a configured pattern, falling back to `dd/MM/yyyy`.
    pub fn parse(pattern: &str) -> Self {
        let pattern = pattern.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == pattern)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatePattern::DayMonthYear => "dd/MM/yyyy",
            DatePattern::MonthDayYear => "MM/dd/yyyy",
            DatePattern::Iso => "yyyy-MM-dd",
            DatePattern::DayMonthYearDash => "dd-MM-yyyy",
            DatePattern::DayMonthYearDot => "dd.MM.yyyy",
        }
    }

    /// Substitute the date tokens for a timestamp.
    ///
    /// The calendar date is taken in the timestamp's own offset.
    pub fn format<Tz: TimeZone>(&self, ts: &DateTime<Tz>) -> String {
        self.as_str()
            .replace("yyyy", &format!("{:04}", ts.year()))
            .replace("MM", &format!("{:02}", ts.month()))
            .replace("dd", &format!("{:02}", ts.day()))
    }
}

/// Format a timestamp with a configured pattern string.
pub fn format_date<Tz: TimeZone>(ts: &DateTime<Tz>, pattern: &str) -> String {
    DatePattern::parse(pattern).format(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_all_patterns() {
        let t = ts("2026-03-07T10:00:00+00:00");
        assert_eq!(format_date(&t, "dd/MM/yyyy"), "07/03/2026");
        assert_eq!(format_date(&t, "MM/dd/yyyy"), "03/07/2026");
        assert_eq!(format_date(&t, "yyyy-MM-dd"), "2026-03-07");
        assert_eq!(format_date(&t, "dd-MM-yyyy"), "07-03-2026");
        assert_eq!(format_date(&t, "dd.MM.yyyy"), "07.03.2026");
    }

    #[test]
    fn test_unknown_pattern_falls_back() {
        let t = ts("2026-12-25T08:30:00+00:00");
        assert_eq!(format_date(&t, "MMMM d, yyyy"), "25/12/2026");
        assert_eq!(format_date(&t, ""), "25/12/2026");
        assert_eq!(DatePattern::parse("nonsense"), DatePattern::DayMonthYear);
    }

    #[test]
    fn test_pattern_trimmed() {
        assert_eq!(DatePattern::parse(" yyyy-MM-dd "), DatePattern::Iso);
    }

    #[test]
    fn test_date_in_timestamp_offset() {
        // 23:30 at -05:00 is already the next day in UTC
        let t = ts("2026-01-31T23:30:00-05:00");
        assert_eq!(format_date(&t, "yyyy-MM-dd"), "2026-01-31");
    }
}
