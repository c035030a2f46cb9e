//! Course scheduling orchestrator.
//!
//! Walks (course, desired slot) pairs strictly in input order. Each
//! pair either books at its desired slot, books at a relocated slot
//! (with a log entry naming the reason), or lands on the failure list.
//! Later pairs observe every booking made before them, so the run is
//! order-sensitive by design.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

use crate::models::{Booking, Course, Room, TimeSlot, Weekday};
use crate::validation::{validate_course_input, ValidationError};

use super::{find_alternative_slot, find_free_room, ConflictIndex, FailureReason, TERM_WEEK};

/// A relocation log entry: where a session was asked for, where it
/// went, and why it had to move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelocationEntry {
    /// Course that was moved.
    pub course_id: String,
    /// Course display label.
    pub course_label: String,
    /// The originally desired slot.
    pub from: TimeSlot,
    /// The slot actually granted.
    pub to: TimeSlot,
    /// Why the desired slot was infeasible.
    pub reason: FailureReason,
}

impl fmt::Display for RelocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            FailureReason::LecturerConflict => write!(
                f,
                "{} originally planned on {} has moved to {} due to lecturer conflict",
                self.course_label, self.from, self.to
            ),
            _ => write!(
                f,
                "{} moved to {} due to {}",
                self.course_label, self.to, self.reason
            ),
        }
    }
}

/// A (course, slot) pair that could not be placed anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedSession {
    /// Course that failed.
    pub course_id: String,
    /// Course display label.
    pub course_label: String,
    /// The desired slot that triggered the attempt.
    pub slot: TimeSlot,
    /// The precipitating reason (the failure that started the
    /// relocation search, not the search's own exhaustion).
    pub reason: FailureReason,
}

impl fmt::Display for FailedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} failed due to {}",
            self.course_label, self.slot, self.reason
        )
    }
}

/// Result of a course scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseScheduleOutcome {
    /// Committed bookings, in commit order.
    pub bookings: Vec<Booking>,
    /// One entry per relocation, in occurrence order.
    pub log: Vec<RelocationEntry>,
    /// (course, slot) pairs that could not be placed.
    pub failures: Vec<FailedSession>,
}

impl CourseScheduleOutcome {
    /// Whether every requested session was placed.
    pub fn is_fully_scheduled(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of committed bookings.
    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    /// Bookings grouped by weekday, in calendar order — the shape a
    /// timetable grid renders from.
    pub fn bookings_by_day(&self) -> BTreeMap<Weekday, Vec<&Booking>> {
        let mut by_day: BTreeMap<Weekday, Vec<&Booking>> = BTreeMap::new();
        for b in &self.bookings {
            by_day.entry(b.day).or_default().push(b);
        }
        by_day
    }

    /// All bookings granted to a given room.
    pub fn bookings_for_room(&self, room_id: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.room_id == room_id)
            .collect()
    }

    /// All bookings held by a given lecturer.
    pub fn bookings_for_lecturer(&self, lecturer_id: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.lecturer_id == lecturer_id)
            .collect()
    }
}

/// Greedy course scheduler.
///
/// # Algorithm
///
/// For each (course, desired slot) pair in input order:
/// 1. If the lecturer already holds an overlapping session, run the
///    relocation search; book the alternative or fail the pair,
///    citing the lecturer conflict either way.
/// 2. Otherwise try the first-fit room search at the desired slot and
///    book there on success (the happy path logs nothing).
/// 3. If no room worked, run the relocation search; book the
///    alternative or fail the pair, citing the room search's reason
///    either way.
///
/// # Example
///
/// ```
/// use unischedule::models::{ClockTime, Course, Room, TimeSlot, Weekday};
/// use unischedule::scheduler::CourseScheduler;
///
/// let rooms = vec![Room::new("R1", 50), Room::new("R2", 100)];
/// let courses = vec![Course::new("CSC101", "L1", 60).with_slot(TimeSlot::new(
///     Weekday::Monday,
///     ClockTime::from_hm(8, 0),
///     ClockTime::from_hm(10, 0),
/// ))];
///
/// let outcome = CourseScheduler::new().schedule(&courses, &rooms).unwrap();
/// assert_eq!(outcome.bookings[0].room_id, "R2"); // only R2 seats 60
/// ```
#[derive(Debug, Clone, Default)]
pub struct CourseScheduler;

impl CourseScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs a scheduling pass over the given courses and rooms.
    ///
    /// Inputs are validated first; a malformed input rejects the whole
    /// run. Per-session failures never do — they are collected in the
    /// outcome and processing continues.
    pub fn schedule(
        &self,
        courses: &[Course],
        rooms: &[Room],
    ) -> Result<CourseScheduleOutcome, Vec<ValidationError>> {
        validate_course_input(courses, rooms)?;

        let mut outcome = CourseScheduleOutcome::default();
        let mut index = ConflictIndex::new();
        let mut next_id: u32 = 1;

        for course in courses {
            for slot in &course.slots {
                if index.group_occupied(&course.lecturer_id, TERM_WEEK, slot.day, slot.span()) {
                    self.relocate_or_fail(
                        course,
                        slot,
                        FailureReason::LecturerConflict,
                        rooms,
                        &mut index,
                        &mut next_id,
                        &mut outcome,
                    );
                    continue;
                }

                match find_free_room(
                    rooms,
                    &index,
                    course.headcount,
                    TERM_WEEK,
                    slot.day,
                    slot.span(),
                ) {
                    Ok(room) => {
                        debug!(
                            course = %course.id,
                            room = %room.id,
                            slot = %slot,
                            "booked at desired slot"
                        );
                        commit(course, room, *slot, &mut index, &mut next_id, &mut outcome);
                    }
                    Err(reason) => {
                        self.relocate_or_fail(
                            course,
                            slot,
                            reason,
                            rooms,
                            &mut index,
                            &mut next_id,
                            &mut outcome,
                        );
                    }
                }
            }
        }

        Ok(outcome)
    }

    /// Runs the relocation search for an infeasible desired slot and
    /// records either the relocated booking or the failure, citing the
    /// precipitating `reason` in both cases.
    #[allow(clippy::too_many_arguments)]
    fn relocate_or_fail(
        &self,
        course: &Course,
        slot: &TimeSlot,
        reason: FailureReason,
        rooms: &[Room],
        index: &mut ConflictIndex,
        next_id: &mut u32,
        outcome: &mut CourseScheduleOutcome,
    ) {
        match find_alternative_slot(rooms, index, course, slot) {
            Ok((room, alternative)) => {
                warn!(
                    course = %course.id,
                    from = %slot,
                    to = %alternative,
                    reason = %reason,
                    "session relocated"
                );
                commit(course, room, alternative, index, next_id, outcome);
                outcome.log.push(RelocationEntry {
                    course_id: course.id.clone(),
                    course_label: course.label().to_string(),
                    from: *slot,
                    to: alternative,
                    reason,
                });
            }
            Err(_) => {
                warn!(
                    course = %course.id,
                    slot = %slot,
                    reason = %reason,
                    "session could not be placed"
                );
                outcome.failures.push(FailedSession {
                    course_id: course.id.clone(),
                    course_label: course.label().to_string(),
                    slot: *slot,
                    reason,
                });
            }
        }
    }
}

/// Appends a booking and registers it in the conflict index so every
/// later subject in the run sees it.
fn commit(
    course: &Course,
    room: &Room,
    slot: TimeSlot,
    index: &mut ConflictIndex,
    next_id: &mut u32,
    outcome: &mut CourseScheduleOutcome,
) {
    index.insert(
        &room.id,
        &course.lecturer_id,
        TERM_WEEK,
        slot.day,
        slot.span(),
    );
    outcome.bookings.push(Booking {
        id: *next_id,
        room_id: room.id.clone(),
        course_id: course.id.clone(),
        lecturer_id: course.lecturer_id.clone(),
        day: slot.day,
        start: slot.start,
        end: slot.end,
    });
    *next_id += 1;
}
