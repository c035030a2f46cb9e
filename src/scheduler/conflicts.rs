//! Committed-occupancy index.
//!
//! Tracks which (room, week, day) and (owner group, week, day) pairs
//! are already occupied by bookings made earlier in the run, and
//! answers overlap queries against them. Built incrementally: every
//! successful booking is inserted immediately so later subjects see
//! it. A run never un-books, so there is no removal.
//!
//! The index is a derived view — it can be rebuilt from a finished
//! booking list and will answer queries identically to the
//! incrementally built one.

use std::collections::HashMap;

use crate::models::{Booking, ClockTime, ExamBooking, TimeSpan, Weekday};

/// Occupancy key within one entity's schedule: week plus day.
type DayKey = (u16, Weekday);

/// Run-scoped occupancy view over committed bookings.
///
/// Owned exclusively by one orchestrator for the lifetime of one run;
/// no state survives across runs.
#[derive(Debug, Clone, Default)]
pub struct ConflictIndex {
    /// Busy intervals per room, keyed by (week, day).
    room_busy: HashMap<String, HashMap<DayKey, Vec<TimeSpan>>>,
    /// Busy intervals per owner group (lecturer or cohort).
    group_busy: HashMap<String, HashMap<DayKey, Vec<TimeSpan>>>,
    /// How many bookings start at exactly (day, start), across all
    /// rooms, groups, and weeks. Feeds the relocation popularity
    /// tie-break.
    start_counts: HashMap<(Weekday, ClockTime), u32>,
}

impl ConflictIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a committed booking.
    pub fn insert(
        &mut self,
        room_id: &str,
        group_id: &str,
        week: u16,
        day: Weekday,
        span: TimeSpan,
    ) {
        self.room_busy
            .entry(room_id.to_string())
            .or_default()
            .entry((week, day))
            .or_default()
            .push(span);
        self.group_busy
            .entry(group_id.to_string())
            .or_default()
            .entry((week, day))
            .or_default()
            .push(span);
        *self.start_counts.entry((day, span.start)).or_insert(0) += 1;
    }

    /// Whether the room already holds a booking overlapping `span` on
    /// the given week and day.
    pub fn room_occupied(&self, room_id: &str, week: u16, day: Weekday, span: TimeSpan) -> bool {
        Self::occupied(&self.room_busy, room_id, week, day, span)
    }

    /// Whether the owner group (lecturer or cohort) already holds a
    /// booking overlapping `span` on the given week and day.
    pub fn group_occupied(&self, group_id: &str, week: u16, day: Weekday, span: TimeSpan) -> bool {
        Self::occupied(&self.group_busy, group_id, week, day, span)
    }

    /// Number of bookings starting at exactly (day, start).
    ///
    /// Counts every booking regardless of room, group, or week — the
    /// relocation search wants a popularity signal, not a feasibility
    /// answer.
    pub fn bookings_at(&self, day: Weekday, start: ClockTime) -> u32 {
        self.start_counts.get(&(day, start)).copied().unwrap_or(0)
    }

    /// Rebuilds the index from a finished course booking list.
    pub fn from_course_bookings(bookings: &[Booking]) -> Self {
        let mut index = Self::new();
        for b in bookings {
            index.insert(&b.room_id, &b.lecturer_id, super::TERM_WEEK, b.day, b.span());
        }
        index
    }

    /// Rebuilds the index from a finished exam booking list.
    pub fn from_exam_bookings(bookings: &[ExamBooking]) -> Self {
        let mut index = Self::new();
        for b in bookings {
            index.insert(&b.room_id, &b.cohort, b.week, b.day, b.span());
        }
        index
    }

    fn occupied(
        busy: &HashMap<String, HashMap<DayKey, Vec<TimeSpan>>>,
        id: &str,
        week: u16,
        day: Weekday,
        span: TimeSpan,
    ) -> bool {
        busy.get(id)
            .and_then(|per_day| per_day.get(&(week, day)))
            .is_some_and(|spans| spans.iter().any(|busy_span| busy_span.overlaps(&span)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start_h: u16, end_h: u16) -> TimeSpan {
        TimeSpan::new(ClockTime::from_hm(start_h, 0), ClockTime::from_hm(end_h, 0))
    }

    #[test]
    fn test_empty_index_is_free() {
        let index = ConflictIndex::new();
        assert!(!index.room_occupied("R1", 0, Weekday::Monday, span(8, 10)));
        assert!(!index.group_occupied("L1", 0, Weekday::Monday, span(8, 10)));
        assert_eq!(index.bookings_at(Weekday::Monday, ClockTime::from_hm(8, 0)), 0);
    }

    #[test]
    fn test_room_and_group_occupancy() {
        let mut index = ConflictIndex::new();
        index.insert("R1", "L1", 0, Weekday::Monday, span(8, 10));

        assert!(index.room_occupied("R1", 0, Weekday::Monday, span(9, 11)));
        assert!(index.group_occupied("L1", 0, Weekday::Monday, span(9, 11)));
        // Different room / group are free.
        assert!(!index.room_occupied("R2", 0, Weekday::Monday, span(9, 11)));
        assert!(!index.group_occupied("L2", 0, Weekday::Monday, span(9, 11)));
        // Different day is free.
        assert!(!index.room_occupied("R1", 0, Weekday::Tuesday, span(9, 11)));
    }

    #[test]
    fn test_touching_spans_do_not_conflict() {
        let mut index = ConflictIndex::new();
        index.insert("R1", "L1", 0, Weekday::Monday, span(8, 10));
        assert!(!index.room_occupied("R1", 0, Weekday::Monday, span(10, 12)));
        assert!(!index.group_occupied("L1", 0, Weekday::Monday, span(6, 8)));
    }

    #[test]
    fn test_week_scoping() {
        let mut index = ConflictIndex::new();
        index.insert("R1", "300-level", 1, Weekday::Monday, span(9, 12));

        assert!(index.room_occupied("R1", 1, Weekday::Monday, span(9, 12)));
        // Same day, other week is free.
        assert!(!index.room_occupied("R1", 2, Weekday::Monday, span(9, 12)));
        assert!(!index.group_occupied("300-level", 2, Weekday::Monday, span(9, 12)));
    }

    #[test]
    fn test_bookings_at_counts_across_rooms_and_groups() {
        let mut index = ConflictIndex::new();
        index.insert("R1", "L1", 0, Weekday::Monday, span(8, 10));
        index.insert("R2", "L2", 0, Weekday::Monday, span(8, 10));
        index.insert("R3", "L3", 0, Weekday::Monday, span(9, 11));

        assert_eq!(index.bookings_at(Weekday::Monday, ClockTime::from_hm(8, 0)), 2);
        assert_eq!(index.bookings_at(Weekday::Monday, ClockTime::from_hm(9, 0)), 1);
        assert_eq!(index.bookings_at(Weekday::Tuesday, ClockTime::from_hm(8, 0)), 0);
    }

    #[test]
    fn test_rebuild_from_exam_bookings() {
        let bookings = vec![ExamBooking {
            id: 1,
            room_id: "LR16".into(),
            course_code: "EEE 311".into(),
            cohort: "300-level".into(),
            slot_id: 5,
            week: 2,
            day: Weekday::Monday,
            start: ClockTime::from_hm(9, 0),
            end: ClockTime::from_hm(12, 0),
        }];

        let rebuilt = ConflictIndex::from_exam_bookings(&bookings);
        assert!(rebuilt.room_occupied("LR16", 2, Weekday::Monday, span(10, 11)));
        assert!(rebuilt.group_occupied("300-level", 2, Weekday::Monday, span(11, 13)));
        assert!(!rebuilt.room_occupied("LR16", 1, Weekday::Monday, span(10, 11)));
    }

    #[test]
    fn test_rebuild_matches_incremental() {
        let bookings = vec![
            Booking {
                id: 1,
                room_id: "R1".into(),
                course_id: "C1".into(),
                lecturer_id: "L1".into(),
                day: Weekday::Monday,
                start: ClockTime::from_hm(8, 0),
                end: ClockTime::from_hm(10, 0),
            },
            Booking {
                id: 2,
                room_id: "R2".into(),
                course_id: "C2".into(),
                lecturer_id: "L2".into(),
                day: Weekday::Tuesday,
                start: ClockTime::from_hm(13, 0),
                end: ClockTime::from_hm(15, 0),
            },
        ];

        let mut incremental = ConflictIndex::new();
        for b in &bookings {
            incremental.insert(
                &b.room_id,
                &b.lecturer_id,
                crate::scheduler::TERM_WEEK,
                b.day,
                b.span(),
            );
        }
        let rebuilt = ConflictIndex::from_course_bookings(&bookings);

        let probes = [
            ("R1", Weekday::Monday, span(9, 11)),
            ("R1", Weekday::Monday, span(10, 12)),
            ("R2", Weekday::Tuesday, span(14, 16)),
            ("R2", Weekday::Wednesday, span(13, 15)),
        ];
        for (room, day, probe) in probes {
            assert_eq!(
                incremental.room_occupied(room, 0, day, probe),
                rebuilt.room_occupied(room, 0, day, probe),
                "room probe diverged for {room} {day} {probe}"
            );
        }
        let group_probes = [
            ("L1", Weekday::Monday, span(8, 9)),
            ("L2", Weekday::Tuesday, span(12, 13)),
        ];
        for (group, day, probe) in group_probes {
            assert_eq!(
                incremental.group_occupied(group, 0, day, probe),
                rebuilt.group_occupied(group, 0, day, probe)
            );
        }
        assert_eq!(
            incremental.bookings_at(Weekday::Monday, ClockTime::from_hm(8, 0)),
            rebuilt.bookings_at(Weekday::Monday, ClockTime::from_hm(8, 0))
        );
    }
}
