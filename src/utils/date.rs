// src/utils/date.rs

//! Listing timestamp parsing.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Format of the time column, e.g. `25/08/01 13:41`.
pub const LISTING_TIME_FORMAT: &str = "%y/%m/%d %H:%M";

/// Parse a listing timestamp as local time in `tz`.
pub fn parse_listing_time(text: &str, tz: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(text.trim(), LISTING_TIME_FORMAT).ok()?;
    tz.from_local_datetime(&naive).single()
}

/// Parse a listing timestamp, falling back to the current time in `tz`.
pub fn parse_or_now(text: &str, tz: FixedOffset) -> DateTime<FixedOffset> {
    parse_listing_time(text, tz).unwrap_or_else(|| {
        log::debug!("Unparseable listing time {:?}; using current time", text);
        now_in(tz)
    })
}

/// Current time in `tz`.
pub fn now_in(tz: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn test_parse_compact_time() {
        let parsed = parse_listing_time("25/08/01 13:41", jst()).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-08-01T13:41:00+09:00");
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert!(parse_listing_time("  25/12/31 09:05 ", jst()).is_some());
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(parse_listing_time("2025-08-01 13:41", jst()).is_none());
        assert!(parse_listing_time("13:41", jst()).is_none());
        assert!(parse_listing_time("", jst()).is_none());
    }

    #[test]
    fn test_fallback_is_now_in_timezone() {
        let before = Utc::now();
        let parsed = parse_or_now("本日", jst());
        let after = Utc::now();

        assert_eq!(parsed.offset().local_minus_utc(), 9 * 3600);
        assert!(parsed >= before && parsed <= after);
    }
}
