//! Text formatting for counts, timestamps and chart labels.
//!
//! Everything here is pure and takes the UTC offset explicitly; views pass
//! [`crate::platform::local_offset`] so timestamps render in the browser's zone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use api::Period;

/// `Mar 01, 2024 10:15` in the given zone.
pub fn format_timestamp(at: &DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%b %d, %Y %H:%M").to_string()
}

/// [`format_timestamp`] in the browser's zone.
pub fn local_timestamp(at: &DateTime<Utc>) -> String {
    format_timestamp(at, crate::platform::local_offset(*at))
}

/// Label for one timeline bucket: `HH:MM` for intraday periods, `Mar 1` otherwise.
///
/// Buckets arrive as RFC 3339 timestamps, naive date-times, plain dates, or epoch
/// milliseconds. Anything else is shown as received.
pub fn timeline_label(bucket: &str, period: Period, offset: FixedOffset) -> String {
    let Some(at) = parse_bucket(bucket) else {
        return bucket.to_string();
    };
    let local = at.with_timezone(&offset);
    if period.is_intraday() {
        local.format("%H:%M").to_string()
    } else {
        local.format("%b %-d").to_string()
    }
}

fn parse_bucket(bucket: &str) -> Option<DateTime<Utc>> {
    let bucket = bucket.trim();
    if !bucket.is_empty() && bucket.bytes().all(|b| b.is_ascii_digit()) {
        return bucket.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis);
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(bucket) {
        return Some(at.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(bucket, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(bucket, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `1234567` → `1,234,567`.
pub fn format_count(value: u64) -> String {
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

/// One decimal, without a trailing `.0`.
pub fn format_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

/// `12.5% from previous period`; the sign is carried by the arrow, not the text.
pub fn growth_text(growth: f64) -> String {
    format!("{}% from previous period", format_decimal(growth.abs()))
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_format_timestamp_in_zone() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap();
        assert_eq!(format_timestamp(&at, utc()), "Mar 01, 2024 10:15");
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_timestamp(&at, cet), "Mar 01, 2024 11:15");
    }

    #[test]
    fn test_timeline_label_by_period() {
        assert_eq!(timeline_label("2024-03-01T10:00:00.000Z", Period::Day, utc()), "10:00");
        assert_eq!(timeline_label("2024-03-01T10:00:00Z", Period::Week, utc()), "Mar 1");
        assert_eq!(timeline_label("2024-03-12", Period::Month, utc()), "Mar 12");
        assert_eq!(timeline_label("2024-03-01 23:30", Period::Day, utc()), "23:30");
    }

    #[test]
    fn test_timeline_label_from_epoch_millis() {
        // 2024-03-01T10:00:00Z
        assert_eq!(timeline_label("1709287200000", Period::Day, utc()), "10:00");
        assert_eq!(timeline_label("1709287200000", Period::Month, utc()), "Mar 1");
    }

    #[test]
    fn test_timeline_label_keeps_unknown_buckets() {
        assert_eq!(timeline_label("week 12", Period::Quarter, utc()), "week 12");
        assert_eq!(timeline_label("", Period::Day, utc()), "");
    }

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_growth_text_uses_magnitude() {
        assert_eq!(growth_text(12.5), "12.5% from previous period");
        assert_eq!(growth_text(-40.0), "40% from previous period");
        assert_eq!(format_decimal(3.14159), "3.1");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("twitter"), "Twitter");
        assert_eq!(capitalize(""), "");
    }
}
