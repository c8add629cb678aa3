//! Encoding and decoding of persisted task records.
//!
//! Each task is persisted as a single line of the form
//! `<title> - [<urgency>] - Due: <MMM d, yyyy> at <hh:mm a>`, prefixed with
//! a completion marker once the task is done. Decoding is lenient: a line
//! that does not match this shape stays an opaque string and is displayed
//! as-is.

use crate::tasks::models::{Task, Urgency};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix applied to a record when the task is completed.
pub const COMPLETED_MARKER: &str = "\u{2705} ";

/// Date format used in encoded records, e.g. `May 1, 2024`.
pub const DATE_FORMAT: &str = "%b %-d, %Y";

/// Time format used in encoded records, e.g. `09:00 AM`.
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Shape of an encoded record. The title match is greedy, so a title that
/// itself contains ` - [High] - ` still splits at the real field boundary.
static RECORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<title>.+) - \[(?P<urgency>Low|Medium|High)\] - Due: (?P<date>.+) at (?P<time>.+)$")
        .unwrap()
});

/// Encode a task into its persisted line.
#[must_use]
pub fn encode(task: &Task) -> String {
    let line = format!(
        "{} - [{}] - Due: {} at {}",
        task.title,
        task.urgency,
        task.due_date.format(DATE_FORMAT),
        task.due_time.format(TIME_FORMAT),
    );

    if task.completed {
        format!("{COMPLETED_MARKER}{line}")
    } else {
        line
    }
}

/// Decode a persisted line back into a task.
///
/// Returns `None` when the line does not match the record shape; callers
/// keep such lines opaque rather than treating them as errors.
#[must_use]
pub fn decode(line: &str) -> Option<Task> {
    let (completed, rest) = match line.strip_prefix(COMPLETED_MARKER) {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let caps = RECORD_RE.captures(rest)?;
    let urgency = Urgency::from_str(&caps["urgency"]).ok()?;
    let due_date = NaiveDate::parse_from_str(&caps["date"], DATE_FORMAT).ok()?;
    let due_time = NaiveTime::parse_from_str(&caps["time"], TIME_FORMAT).ok()?;

    Some(Task { title: caps["title"].to_string(), urgency, due_date, due_time, completed })
}

/// Check whether a persisted line carries the completion marker.
#[must_use]
pub fn is_marked_complete(line: &str) -> bool {
    line.starts_with(COMPLETED_MARKER)
}

/// Apply the completion marker to a persisted line.
///
/// Idempotent: a line that already carries the marker is returned unchanged,
/// so the marker is never doubled.
#[must_use]
pub fn mark_complete(line: &str) -> String {
    if is_marked_complete(line) {
        line.to_string()
    } else {
        format!("{COMPLETED_MARKER}{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_task() -> Task {
        Task {
            title: "Buy milk".to_string(),
            urgency: Urgency::Low,
            due_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            due_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            completed: false,
        }
    }

    #[test]
    fn test_encode_matches_legacy_format() {
        let encoded = encode(&sample_task());
        assert_eq!(encoded, "Buy milk - [Low] - Due: May 1, 2024 at 09:00 AM");
    }

    #[test]
    fn test_encode_completed_prefixes_marker() {
        let task = Task { completed: true, ..sample_task() };
        let encoded = encode(&task);
        assert_eq!(encoded, "\u{2705} Buy milk - [Low] - Due: May 1, 2024 at 09:00 AM");
    }

    #[test]
    fn test_encode_single_digit_day_unpadded() {
        let task = Task {
            due_date: NaiveDate::from_ymd_opt(2025, 12, 3).unwrap(),
            due_time: NaiveTime::from_hms_opt(16, 45, 0).unwrap(),
            ..sample_task()
        };
        let encoded = encode(&task);
        assert_eq!(encoded, "Buy milk - [Low] - Due: Dec 3, 2025 at 04:45 PM");
    }

    #[test]
    fn test_decode_round_trip() {
        let task = sample_task();
        let decoded = decode(&encode(&task)).unwrap();
        assert_eq!(decoded, task);
    }

    #[test]
    fn test_decode_completed() {
        let decoded = decode("\u{2705} Buy milk - [Low] - Due: May 1, 2024 at 09:00 AM").unwrap();
        assert!(decoded.completed);
        assert_eq!(decoded.title, "Buy milk");
    }

    #[test]
    fn test_decode_title_containing_field_separator() {
        let task = Task { title: "Call Bob - [High] - Due: never".to_string(), ..sample_task() };
        let decoded = decode(&encode(&task)).unwrap();
        assert_eq!(decoded.title, "Call Bob - [High] - Due: never");
        assert_eq!(decoded.urgency, Urgency::Low);
    }

    #[test]
    fn test_decode_malformed_returns_none() {
        assert!(decode("just a plain note").is_none());
        assert!(decode("Buy milk - [Urgent] - Due: May 1, 2024 at 09:00 AM").is_none());
        assert!(decode("Buy milk - [Low] - Due: someday at whenever").is_none());
        assert!(decode("").is_none());
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let line = "Buy milk - [Low] - Due: May 1, 2024 at 09:00 AM";
        let marked = mark_complete(line);
        assert_eq!(marked, "\u{2705} Buy milk - [Low] - Due: May 1, 2024 at 09:00 AM");
        assert_eq!(mark_complete(&marked), marked);
    }

    #[test]
    fn test_is_marked_complete() {
        assert!(is_marked_complete("\u{2705} done thing"));
        assert!(!is_marked_complete("pending thing"));
        // The marker requires the trailing space
        assert!(!is_marked_complete("\u{2705}no space"));
    }

    proptest! {
        #[test]
        fn prop_encode_decode_round_trip(
            // A leading completion marker would legitimately decode as
            // completed, so titles start with an alphanumeric.
            title in "[a-zA-Z0-9][^\r\n]{0,59}",
            urgency_idx in 0usize..3,
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            completed in any::<bool>(),
        ) {
            let urgency = [Urgency::Low, Urgency::Medium, Urgency::High][urgency_idx];
            let task = Task {
                title,
                urgency,
                due_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                due_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
                completed,
            };

            let decoded = decode(&encode(&task));
            prop_assert_eq!(decoded, Some(task));
        }

        #[test]
        fn prop_decode_never_panics(line in "[^\r\n]{0,120}") {
            let _ = decode(&line);
        }
    }
}
