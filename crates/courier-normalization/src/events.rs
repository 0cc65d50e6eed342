//! Scan-event ordering and trimming.

use courier_model::ScanEvent;

/// Returns a copy of `events` sorted ascending by date.
///
/// The sort is stable: events with equal dates keep their feed order.
pub fn sort_scan_events(events: &[ScanEvent]) -> Vec<ScanEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.date);
    sorted
}

/// Trims an event history to everything from the first event matching
/// `filter_by` onward, newest first.
///
/// - Blank `filter_by`: `events` unchanged, same order.
/// - No event description contains `filter_by` (case-insensitive): empty.
/// - Otherwise: events from the earliest match to the latest, descending.
///
/// The input is never modified.
pub fn filter_scan_events(events: &[ScanEvent], filter_by: &str) -> Vec<ScanEvent> {
    let needle = filter_by.trim();
    if needle.is_empty() {
        return events.to_vec();
    }

    let sorted = sort_scan_events(events);
    let Some(start) = sorted.iter().position(|event| event.describes(needle)) else {
        return Vec::new();
    };

    sorted[start..].iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn event(description: &str, offset_hours: i64) -> ScanEvent {
        let base = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        ScanEvent::new(description, base + Duration::hours(offset_hours))
    }

    fn descriptions(events: &[ScanEvent]) -> Vec<&str> {
        events
            .iter()
            .map(|event| event.event_description.as_str())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_scan_events(&[], "x").is_empty());
    }

    #[test]
    fn test_blank_filter_is_identity() {
        let events = vec![event("C", 3), event("A", 1), event("B", 2)];
        assert_eq!(filter_scan_events(&events, ""), events);
        assert_eq!(filter_scan_events(&events, "   "), events);
    }

    #[test]
    fn test_match_to_end_reversed() {
        let events = vec![event("A", 1), event("MATCH", 2), event("C", 3)];
        let filtered = filter_scan_events(&events, "match");
        assert_eq!(descriptions(&filtered), vec!["C", "MATCH"]);
    }

    #[test]
    fn test_sorts_before_matching() {
        let events = vec![
            event("Delivered", 5),
            event("Picked up", 1),
            event("Arrived at hub", 3),
            event("Departed hub", 4),
        ];
        let filtered = filter_scan_events(&events, "HUB");
        assert_eq!(
            descriptions(&filtered),
            vec!["Delivered", "Departed hub", "Arrived at hub"]
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        let events = vec![event("A", 1), event("B", 2)];
        assert!(filter_scan_events(&events, "missing").is_empty());
    }

    #[test]
    fn test_ties_keep_feed_order() {
        let events = vec![event("first", 1), event("second", 1), event("third", 1)];
        let sorted = sort_scan_events(&events);
        assert_eq!(descriptions(&sorted), vec!["first", "second", "third"]);

        let filtered = filter_scan_events(&events, "second");
        assert_eq!(descriptions(&filtered), vec!["third", "second"]);
    }

    #[test]
    fn test_input_untouched() {
        let events = vec![event("B", 2), event("A", 1)];
        let snapshot = events.clone();
        let _ = filter_scan_events(&events, "a");
        assert_eq!(events, snapshot);
    }
}
