//! Filtering and shaping of schedule-exception query results.
//!
//! These mirror the read-side service operations: select events for a
//! facility and calendar day, drop records that hold no data at all,
//! and present event history newest first.

use chrono::NaiveDate;
use presence_core::{Inspect, Result, deep_non_null};

use crate::schedule::{EventHistory, MissedTreatment, TreatingElsewhere};

/// Keep only events whose graph holds at least one present value.
///
/// A record that deserialized to all-absent fields carries no clinical
/// information and is dropped before shaping. A failed child read aborts
/// the whole filter.
pub fn documented<T: Inspect>(events: Vec<T>) -> Result<Vec<T>> {
    let total = events.len();
    let mut kept = Vec::with_capacity(total);
    for event in events {
        if deep_non_null(&event)? {
            kept.push(event);
        }
    }
    tracing::debug!(total, kept = kept.len(), "filtered undocumented events");
    Ok(kept)
}

/// Missed treatments documented at `facility_number` whose start falls
/// on `event_date`. Events missing the facility or start date are
/// dropped; facility numbers compare case-insensitively.
pub fn missed_treatments_on<'a>(
    events: &'a [MissedTreatment],
    facility_number: &str,
    event_date: NaiveDate,
) -> Vec<&'a MissedTreatment> {
    events
        .iter()
        .filter(|mt| {
            let facility = match mt.event.facility_number_documented_at.as_deref() {
                Some(f) => f,
                None => return false,
            };
            let start = match mt.event.start_date {
                Some(s) => s,
                None => return false,
            };
            facility.eq_ignore_ascii_case(facility_number) && start.date() == event_date
        })
        .collect()
}

/// Treating-elsewhere events documented at `facility_number` whose stay
/// covers `event_date` (start and end days inclusive). Events missing
/// the facility, start, or end are dropped.
pub fn treating_elsewhere_covering<'a>(
    events: &'a [TreatingElsewhere],
    facility_number: &str,
    event_date: NaiveDate,
) -> Vec<&'a TreatingElsewhere> {
    events
        .iter()
        .filter(|te| {
            let facility = match te.event.facility_number_documented_at.as_deref() {
                Some(f) => f,
                None => return false,
            };
            let (start, end) = match (te.event.start_date, te.event.end_date) {
                (Some(s), Some(e)) => (s, e),
                _ => return false,
            };
            facility.eq_ignore_ascii_case(facility_number)
                && start.date() <= event_date
                && event_date <= end.date()
        })
        .collect()
}

/// History rows sorted newest first; rows without a document timestamp
/// sort last.
pub fn newest_first(mut history: Vec<EventHistory>) -> Vec<EventHistory> {
    history.sort_by(|a, b| b.document_date_time.cmp(&a.document_date_time));
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleEvent;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn missed(facility: Option<&str>, start: Option<NaiveDateTime>) -> MissedTreatment {
        MissedTreatment {
            event: ScheduleEvent {
                facility_number_documented_at: facility.map(str::to_string),
                start_date: start,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn elsewhere(
        facility: Option<&str>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> TreatingElsewhere {
        TreatingElsewhere {
            event: ScheduleEvent {
                facility_number_documented_at: facility.map(str::to_string),
                start_date: start,
                end_date: end,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_documented_drops_empty_records() {
        let events = vec![
            MissedTreatment::default(),
            missed(Some("0123"), None),
            MissedTreatment::default(),
        ];
        let kept = documented(events).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(
            kept[0].event.facility_number_documented_at.as_deref(),
            Some("0123")
        );
    }

    #[test]
    fn test_missed_treatments_on_matches_day_and_facility() {
        let events = vec![
            missed(Some("0123"), Some(at(15, 8))),
            missed(Some("0123"), Some(at(16, 8))),
            missed(Some("9999"), Some(at(15, 8))),
        ];
        let hits = missed_treatments_on(&events, "0123", day(15));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].event.start_date, Some(at(15, 8)));
    }

    #[test]
    fn test_missed_treatments_facility_is_case_insensitive() {
        let events = vec![missed(Some("fac01"), Some(at(15, 8)))];
        assert_eq!(missed_treatments_on(&events, "FAC01", day(15)).len(), 1);
    }

    #[test]
    fn test_missed_treatments_missing_fields_are_dropped() {
        let events = vec![
            missed(None, Some(at(15, 8))),
            missed(Some("0123"), None),
        ];
        assert!(missed_treatments_on(&events, "0123", day(15)).is_empty());
    }

    #[test]
    fn test_treating_elsewhere_window_is_inclusive() {
        let events = vec![elsewhere(Some("0123"), Some(at(10, 8)), Some(at(20, 8)))];

        assert_eq!(treating_elsewhere_covering(&events, "0123", day(10)).len(), 1);
        assert_eq!(treating_elsewhere_covering(&events, "0123", day(15)).len(), 1);
        assert_eq!(treating_elsewhere_covering(&events, "0123", day(20)).len(), 1);
        assert!(treating_elsewhere_covering(&events, "0123", day(9)).is_empty());
        assert!(treating_elsewhere_covering(&events, "0123", day(21)).is_empty());
    }

    #[test]
    fn test_treating_elsewhere_missing_end_is_dropped() {
        let events = vec![elsewhere(Some("0123"), Some(at(10, 8)), None)];
        assert!(treating_elsewhere_covering(&events, "0123", day(15)).is_empty());
    }

    #[test]
    fn test_newest_first_sorts_descending() {
        let history = vec![
            EventHistory { document_date_time: Some(at(10, 8)), ..Default::default() },
            EventHistory { document_date_time: None, ..Default::default() },
            EventHistory { document_date_time: Some(at(12, 8)), ..Default::default() },
        ];

        let sorted = newest_first(history);
        assert_eq!(sorted[0].document_date_time, Some(at(12, 8)));
        assert_eq!(sorted[1].document_date_time, Some(at(10, 8)));
        assert_eq!(sorted[2].document_date_time, None);
    }
}
