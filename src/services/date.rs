//! Date reformatting for exported rows

use chrono::NaiveDateTime;
use tracing::debug;

/// Pattern the source dump writes dates with
pub const SOURCE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pattern written to the `Date` column
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD HH:MM:SS` timestamps and re-emits them as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFormatter;

impl DateFormatter {
    /// Try to reformat a source timestamp
    pub fn try_format(&self, raw: &str) -> Option<String> {
        // chrono skips whitespace before numeric fields; the source shape does not.
        if !has_source_shape(raw) {
            debug!(raw, "date does not match YYYY-MM-DD HH:MM:SS");
            return None;
        }

        NaiveDateTime::parse_from_str(raw, SOURCE_DATE_FORMAT)
            .map(|parsed| parsed.format(OUTPUT_DATE_FORMAT).to_string())
            .map_err(|e| debug!(raw, error = %e, "unparseable date"))
            .ok()
    }

    /// Reformat a source timestamp, yielding an empty string on failure
    pub fn format(&self, raw: &str) -> String {
        self.try_format(raw).unwrap_or_default()
    }
}

/// Exactly 19 bytes: zero-padded digits with `-`, ` ` and `:` separators
fn has_source_shape(raw: &str) -> bool {
    const SHAPE: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

    raw.len() == SHAPE.len()
        && raw.bytes().zip(SHAPE.iter()).all(|(byte, &expected)| match expected {
            b'd' => byte.is_ascii_digit(),
            separator => byte == separator,
        })
}

/// Reformat `YYYY-MM-DD HH:MM:SS` as `YYYY-MM-DD`; anything else becomes `""`
pub fn format_date(raw: &str) -> String {
    DateFormatter.format(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_round_trip() {
        assert_eq!(format_date("2025-01-01 14:01:15"), "2025-01-01");
        assert_eq!(format_date("1999-12-31 23:59:59"), "1999-12-31");
    }

    #[test]
    fn test_format_date_failures_are_empty() {
        assert_eq!(format_date("not-a-date"), "");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2025-01-01"), "");
        assert_eq!(format_date("2025-01-01T14:01:15"), "");
        assert_eq!(format_date("2025-13-01 14:01:15"), "");
        assert_eq!(format_date("2025-02-30 10:00:00"), "");
        assert_eq!(format_date("2025-01-01 25:00:00"), "");
        assert_eq!(format_date("2025-01-01 14:01:15 extra"), "");
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        assert_eq!(format_date(" 2025-01-01 14:01:15"), "");
        assert_eq!(format_date("2025-01-01 14:01:15 "), "");
        assert_eq!(format_date("2025- 1-01 14:01:15"), "");
        assert_eq!(format_date("2025-01-01  4:01:15"), "");
    }

    #[test]
    fn test_unpadded_fields_rejected() {
        assert_eq!(format_date("2025-1-1 14:01:15"), "");
        assert_eq!(format_date("2025-01-01 4:1:15"), "");
    }

    #[test]
    fn test_source_shape() {
        assert!(has_source_shape("2025-01-01 14:01:15"));
        assert!(!has_source_shape("2025/01/01 14:01:15"));
        assert!(!has_source_shape("２025-01-01 14:01:15"));
    }
}
