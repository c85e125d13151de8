//! Date and time parsing for meeting records.
//!
//! The REST API hands out `date`, `start_time` and `end_time` as strings. Time
//! fields are usually bare `HH:mm[:ss]` values but some endpoints return full
//! ISO timestamps, so both shapes have to resolve to one wall-clock instant.
//! Nothing here panics: anything unparsable comes back as `None` and the
//! caller decides how to degrade.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;

const TIME_OF_DAY_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

const NAIVE_TIMESTAMP_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse the date-only portion of `raw`.
///
/// ```
/// use meetnotify_domain::utils::meeting_time::parse_date;
///
/// assert!(parse_date("2025-06-15").is_some());
/// assert_eq!(parse_date("2025-06-15T00:00:00.000Z"), parse_date("2025-06-15"));
/// assert!(parse_date("15/06/2025").is_none());
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parse `HH:mm`, `HH:mm:ss` or `HH:mm:ss.fff`.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    TIME_OF_DAY_FORMATS.iter().find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
}

/// Whether a time field already carries a date.
pub fn is_full_timestamp(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.contains('-') && trimmed.get(..10).and_then(parse_date).is_some()
}

/// Parse a full timestamp into wall-clock time in `tz`.
///
/// Offset-carrying timestamps (RFC 3339) are converted into `tz`; naive ones
/// are taken as already being wall-clock time.
pub fn parse_timestamp(raw: &str, tz: Tz) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.with_timezone(&tz).naive_local());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Combine a meeting `date` with one of its time fields.
///
/// If `time` is a full timestamp it is used directly; otherwise the date-only
/// portion of `date` is joined with the time of day.
pub fn combine_date_time(date: &str, time: &str, tz: Tz) -> Option<NaiveDateTime> {
    if is_full_timestamp(time) {
        return parse_timestamp(time, tz);
    }
    let day = parse_date(date)?;
    let time_of_day = parse_time_of_day(time)?;
    Some(day.and_time(time_of_day))
}

/// `YYYY-MM` bucket for a meeting date.
pub fn month_key(date: &str) -> Option<String> {
    parse_date(date).map(|d| d.format("%Y-%m").to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn combines_bare_times_with_and_without_seconds() {
        let tz = chrono_tz::Asia::Jakarta;
        assert_eq!(combine_date_time("2025-06-15", "13:00", tz), Some(at(13, 0, 0)));
        assert_eq!(combine_date_time("2025-06-15", "13:00:30", tz), Some(at(13, 0, 30)));
        assert_eq!(combine_date_time("2025-06-15", " 09:05 ", tz), Some(at(9, 5, 0)));
    }

    #[test]
    fn uses_date_portion_of_timestamp_dates() {
        let tz = chrono_tz::Asia::Jakarta;
        assert_eq!(
            combine_date_time("2025-06-15T00:00:00.000000Z", "13:00", tz),
            Some(at(13, 0, 0))
        );
        assert_eq!(combine_date_time("2025-06-15 00:00:00", "13:00", tz), Some(at(13, 0, 0)));
    }

    #[test]
    fn full_timestamp_time_field_is_used_directly() {
        let tz = chrono_tz::Asia::Jakarta;
        // The date field is ignored when the time already carries one.
        assert_eq!(
            combine_date_time("2000-01-01", "2025-06-15T13:00:00", tz),
            Some(at(13, 0, 0))
        );
        assert_eq!(
            combine_date_time("2025-06-15", "2025-06-15 13:00", tz),
            Some(at(13, 0, 0))
        );
    }

    #[test]
    fn offset_timestamps_convert_to_display_timezone() {
        // 06:00Z is 13:00 in Jakarta (UTC+7).
        let tz = chrono_tz::Asia::Jakarta;
        assert_eq!(
            combine_date_time("2025-06-15", "2025-06-15T06:00:00Z", tz),
            Some(at(13, 0, 0))
        );
        assert_eq!(
            combine_date_time("2025-06-15", "2025-06-15T13:00:00+07:00", tz),
            Some(at(13, 0, 0))
        );
    }

    #[test]
    fn malformed_values_yield_none() {
        let tz = chrono_tz::UTC;
        assert_eq!(combine_date_time("not-a-date", "13:00", tz), None);
        assert_eq!(combine_date_time("2025-06-15", "1pm", tz), None);
        assert_eq!(combine_date_time("2025-06-15", "", tz), None);
        assert_eq!(combine_date_time("2025-02-30", "10:00", tz), None);
        assert_eq!(combine_date_time("2025-06-15", "25:00", tz), None);
        assert_eq!(combine_date_time("2025-06-15", "2025-06-15Tgarbage", tz), None);
    }

    #[test]
    fn month_key_buckets_by_year_and_month() {
        assert_eq!(month_key("2025-06-15").as_deref(), Some("2025-06"));
        assert_eq!(month_key("bogus"), None);
    }
}
