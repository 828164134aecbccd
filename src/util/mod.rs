use crate::models::JournalEntry;
use chrono::DateTime;

/// Viewer's timezone offset in minutes, JS convention: UTC minus local.
/// UTC+2 reports -120, UTC-5 reports +300.
pub(crate) fn local_tz_offset_minutes() -> i32 {
    js_sys::Date::new_0().get_timezone_offset() as i32
}

/// Day string (`YYYY-MM-DD`) of a stored UTC timestamp, as seen on the
/// viewer's local calendar.
///
/// The stored instant is shifted by the timezone offset before truncation,
/// so the "day" boundary drifts away from UTC midnight for viewers in
/// non-zero-offset zones. A UTC+2 viewer sees `2024-01-05T23:00:00Z` as
/// `2024-01-06`.
pub(crate) fn local_day(rfc3339: &str, offset_minutes: i32) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(rfc3339.trim()).ok()?;
    let shifted_ms = parsed.timestamp_millis() - i64::from(offset_minutes) * 60_000;
    let shifted = DateTime::from_timestamp_millis(shifted_ms)?;
    Some(shifted.format("%Y-%m-%d").to_string())
}

/// Pure date-filter predicate. The empty selection passes everything;
/// an unparseable stored timestamp never matches a selected day.
pub(crate) fn entry_matches_day(
    entry: &JournalEntry,
    selected_day: &str,
    offset_minutes: i32,
) -> bool {
    if selected_day.is_empty() {
        return true;
    }

    local_day(&entry.date_created, offset_minutes).as_deref() == Some(selected_day)
}

pub(crate) fn filter_entries_by_day(
    entries: &[JournalEntry],
    selected_day: &str,
    offset_minutes: i32,
) -> Vec<JournalEntry> {
    entries
        .iter()
        .filter(|e| entry_matches_day(e, selected_day, offset_minutes))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, date_created: &str) -> JournalEntry {
        JournalEntry {
            id: id.to_string(),
            title: String::new(),
            content: String::new(),
            special_link: None,
            image: None,
            date_created: date_created.to_string(),
        }
    }

    const UTC: i32 = 0;
    const UTC_PLUS_2: i32 = -120;
    const UTC_MINUS_5: i32 = 300;

    #[test]
    fn local_day_truncates_at_utc_for_zero_offset() {
        assert_eq!(
            local_day("2024-01-05T23:00:00Z", UTC).as_deref(),
            Some("2024-01-05")
        );
    }

    #[test]
    fn local_day_shifts_into_next_day_for_eastern_viewer() {
        // 23:00Z is 01:00 on the 6th at UTC+2.
        assert_eq!(
            local_day("2024-01-05T23:00:00Z", UTC_PLUS_2).as_deref(),
            Some("2024-01-06")
        );
    }

    #[test]
    fn local_day_shifts_into_previous_day_for_western_viewer() {
        // 02:00Z is 21:00 on the 4th at UTC-5.
        assert_eq!(
            local_day("2024-01-05T02:00:00Z", UTC_MINUS_5).as_deref(),
            Some("2024-01-04")
        );
    }

    #[test]
    fn local_day_rejects_unparseable_timestamps() {
        assert!(local_day("yesterday-ish", UTC).is_none());
        assert!(local_day("", UTC_PLUS_2).is_none());
    }

    #[test]
    fn selecting_next_day_matches_late_evening_entry_at_utc_plus_2() {
        let e = entry("1", "2024-01-05T23:00:00Z");
        assert!(entry_matches_day(&e, "2024-01-06", UTC_PLUS_2));
        assert!(!entry_matches_day(&e, "2024-01-05", UTC_PLUS_2));
    }

    #[test]
    fn empty_selection_passes_all_entries() {
        let entries = vec![
            entry("1", "2024-01-05T23:00:00Z"),
            entry("2", "not a date"),
        ];
        let out = filter_entries_by_day(&entries, "", UTC_PLUS_2);
        assert_eq!(out, entries);
    }

    #[test]
    fn filter_result_is_a_subset_matching_the_day() {
        let entries = vec![
            entry("1", "2024-01-05T23:00:00Z"),
            entry("2", "2024-01-06T10:00:00Z"),
            entry("3", "2024-01-07T01:00:00Z"),
            entry("4", "broken"),
        ];

        let out = filter_entries_by_day(&entries, "2024-01-06", UTC_PLUS_2);
        let ids: Vec<&str> = out.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(out.iter().all(|e| entries.contains(e)));
    }
}
