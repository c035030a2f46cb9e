//! Ranked alternative-slot search for the course scheduler.
//!
//! When a course's desired window cannot be honored, this search scans
//! the standard daily grid for the least-disruptive replacement:
//!
//! 1. Same day, earlier starts, nearest first.
//! 2. Same day, later starts, nearest first.
//! 3. The remaining weekdays in week order, wrapping after Friday,
//!    each over the full grid.
//!
//! Every candidate must pass both the first-fit room search and the
//! lecturer availability check. Among the passing candidates the one
//! with the fewest bookings already starting at that exact (day, start)
//! wins; ties go to the earlier-discovered candidate, so the search is
//! deterministic for a fixed input order.
//!
//! The popularity count deliberately ignores room and lecturer: it can
//! prefer a candidate no emptier *for this course* than a cheaper one.
//! The room and lecturer checks still gate acceptance, so an invalid
//! slot can never win — the count is a crowd-avoidance heuristic, not
//! a feasibility answer.

use crate::models::{ClockTime, Course, Room, TimeSlot, Weekday};

use super::{find_free_room, ConflictIndex, FailureReason, TERM_WEEK};

/// Standard daily start grid: hourly from 08:00 to 17:00.
pub const DAY_GRID: [ClockTime; 10] = [
    ClockTime::from_hm(8, 0),
    ClockTime::from_hm(9, 0),
    ClockTime::from_hm(10, 0),
    ClockTime::from_hm(11, 0),
    ClockTime::from_hm(12, 0),
    ClockTime::from_hm(13, 0),
    ClockTime::from_hm(14, 0),
    ClockTime::from_hm(15, 0),
    ClockTime::from_hm(16, 0),
    ClockTime::from_hm(17, 0),
];

/// Closing boundary of the operating day.
pub const DAY_CLOSE: ClockTime = ClockTime::from_hm(18, 0);

/// Candidate end for a grid start: two grid steps later, pinned to the
/// closing boundary for the last starts. A 17:00 candidate is
/// therefore one hour long.
fn grid_end(start_index: usize) -> ClockTime {
    DAY_GRID
        .get(start_index + 2)
        .copied()
        .unwrap_or(DAY_CLOSE)
}

/// Searches for the best alternative slot (and a room for it) when the
/// course's desired window is infeasible.
///
/// Returns the winning room and slot, or
/// [`FailureReason::NoAlternativeFound`] when every candidate across
/// all three phases fails the room or lecturer check.
pub fn find_alternative_slot<'a>(
    rooms: &'a [Room],
    index: &ConflictIndex,
    course: &Course,
    original: &TimeSlot,
) -> Result<(&'a Room, TimeSlot), FailureReason> {
    let mut best: Option<(&Room, TimeSlot)> = None;
    let mut min_conflicts = u32::MAX;

    let mut consider = |day: Weekday, grid_index: usize| {
        let start = DAY_GRID[grid_index];
        let candidate = TimeSlot::new(day, start, grid_end(grid_index));

        let Ok(room) = find_free_room(
            rooms,
            index,
            course.headcount,
            TERM_WEEK,
            day,
            candidate.span(),
        ) else {
            return;
        };
        if index.group_occupied(&course.lecturer_id, TERM_WEEK, day, candidate.span()) {
            return;
        }

        let conflicts = index.bookings_at(day, start);
        if conflicts < min_conflicts {
            min_conflicts = conflicts;
            best = Some((room, candidate));
        }
    };

    // Phases 1 and 2: same day, earlier starts nearest-first, then
    // later starts nearest-first. The original start itself is never a
    // candidate.
    let earlier = DAY_GRID
        .iter()
        .enumerate()
        .filter(|(_, start)| **start < original.start)
        .rev();
    let later = DAY_GRID
        .iter()
        .enumerate()
        .filter(|(_, start)| **start > original.start);
    for (grid_index, _) in earlier.chain(later) {
        consider(original.day, grid_index);
    }

    // Phase 3: the remaining days in week order, full grid.
    for day in original.day.rest_of_week() {
        for grid_index in 0..DAY_GRID.len() {
            consider(day, grid_index);
        }
    }

    best.ok_or(FailureReason::NoAlternativeFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSpan;

    fn t(hour: u16) -> ClockTime {
        ClockTime::from_hm(hour, 0)
    }

    fn slot(day: Weekday, start_h: u16, end_h: u16) -> TimeSlot {
        TimeSlot::new(day, t(start_h), t(end_h))
    }

    fn occupy(
        index: &mut ConflictIndex,
        room: &str,
        group: &str,
        day: Weekday,
        start_h: u16,
        end_h: u16,
    ) {
        index.insert(room, group, TERM_WEEK, day, TimeSpan::new(t(start_h), t(end_h)));
    }

    #[test]
    fn test_grid_end_two_steps_with_pinned_close() {
        assert_eq!(grid_end(0), t(10)); // 08:00 → 10:00
        assert_eq!(grid_end(7), t(17)); // 15:00 → 17:00
        assert_eq!(grid_end(8), DAY_CLOSE); // 16:00 → 18:00
        assert_eq!(grid_end(9), DAY_CLOSE); // 17:00 → 18:00 (one hour)
    }

    #[test]
    fn test_prefers_nearest_earlier_start() {
        let rooms = vec![Room::new("R1", 50)];
        let index = ConflictIndex::new();
        let course = Course::new("C1", "L1", 30);

        let (_, alt) =
            find_alternative_slot(&rooms, &index, &course, &slot(Weekday::Monday, 10, 12)).unwrap();
        // All candidates are equally empty; the first scanned is the
        // nearest earlier start.
        assert_eq!(alt, slot(Weekday::Monday, 9, 11));
    }

    #[test]
    fn test_prefers_least_popular_start() {
        let rooms = vec![Room::new("R1", 50), Room::new("R2", 50), Room::new("R3", 50)];
        let mut index = ConflictIndex::new();
        let course = Course::new("C1", "L1", 30);

        // Crowd every Monday start except 13:00 (rooms still free, the
        // count is what differs).
        for start in [8, 9, 11, 12, 14, 15, 16, 17] {
            occupy(&mut index, "R2", "other", Weekday::Monday, start, start + 1);
        }

        let (_, alt) =
            find_alternative_slot(&rooms, &index, &course, &slot(Weekday::Monday, 10, 12)).unwrap();
        assert_eq!(alt.day, Weekday::Monday);
        assert_eq!(alt.start, t(13));
    }

    #[test]
    fn test_earliest_discovered_minimum_wins_ties() {
        let rooms = vec![Room::new("R1", 50)];
        let index = ConflictIndex::new();
        let course = Course::new("C1", "L1", 30);

        // Everything ties at zero popularity; first candidate of phase 1
        // (nearest earlier start) must win over equally empty later ones.
        let (_, alt) =
            find_alternative_slot(&rooms, &index, &course, &slot(Weekday::Friday, 17, 18)).unwrap();
        assert_eq!(alt, slot(Weekday::Friday, 16, 18));
    }

    #[test]
    fn test_moves_to_next_day_when_day_is_blocked() {
        let rooms = vec![Room::new("R1", 50)];
        let mut index = ConflictIndex::new();
        let course = Course::new("C1", "L2", 30);

        // R1 busy all Monday: every same-day candidate fails the room
        // check (popularity is irrelevant, the room gate decides).
        occupy(&mut index, "R1", "L1", Weekday::Monday, 8, 18);

        let (_, alt) =
            find_alternative_slot(&rooms, &index, &course, &slot(Weekday::Monday, 10, 12)).unwrap();
        assert_eq!(alt.day, Weekday::Tuesday);
        assert_eq!(alt.start, t(8));
    }

    #[test]
    fn test_week_wraps_backwards_from_thursday() {
        let rooms = vec![Room::new("R1", 50)];
        let mut index = ConflictIndex::new();
        let course = Course::new("C1", "L2", 30);

        // Thursday and Friday fully blocked; the wrap reaches Monday.
        occupy(&mut index, "R1", "L1", Weekday::Thursday, 8, 18);
        occupy(&mut index, "R1", "L1", Weekday::Friday, 8, 18);

        let (_, alt) =
            find_alternative_slot(&rooms, &index, &course, &slot(Weekday::Thursday, 10, 12))
                .unwrap();
        assert_eq!(alt.day, Weekday::Monday);
    }

    #[test]
    fn test_lecturer_busy_candidates_are_rejected() {
        let rooms = vec![Room::new("R1", 50), Room::new("R2", 50)];
        let mut index = ConflictIndex::new();
        let course = Course::new("C1", "L1", 30);

        // L1 teaches 08:00-17:00 Monday in R2; rooms are free but the
        // lecturer gate rejects every same-day candidate except 17:00.
        occupy(&mut index, "R2", "L1", Weekday::Monday, 8, 17);

        let (_, alt) =
            find_alternative_slot(&rooms, &index, &course, &slot(Weekday::Monday, 10, 12)).unwrap();
        assert_eq!(alt, slot(Weekday::Monday, 17, 18));
    }

    #[test]
    fn test_exhaustion_fails() {
        let rooms = vec![Room::new("R1", 50)];
        let mut index = ConflictIndex::new();
        let course = Course::new("C1", "L1", 30);

        for day in Weekday::ALL {
            occupy(&mut index, "R1", "other", day, 8, 18);
        }

        let err = find_alternative_slot(&rooms, &index, &course, &slot(Weekday::Monday, 10, 12))
            .unwrap_err();
        assert_eq!(err, FailureReason::NoAlternativeFound);
    }

    #[test]
    fn test_capacity_too_large_for_any_room_fails() {
        let rooms = vec![Room::new("R1", 50)];
        let index = ConflictIndex::new();
        let course = Course::new("C1", "L1", 500);

        assert!(
            find_alternative_slot(&rooms, &index, &course, &slot(Weekday::Monday, 10, 12)).is_err()
        );
    }
}
