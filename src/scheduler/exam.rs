//! Exam scheduling orchestrator.
//!
//! Places one-shot sittings by advancing through a fixed candidate
//! slot catalogue in the order the caller supplies — catalogue order
//! is the priority signal, and there is no relocation heuristic. A
//! candidate must match the exam's duration exactly, keep the cohort
//! free of overlapping sittings in its week, and offer a room that
//! seats the candidates and is not otherwise booked over the window.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::models::{ExamBooking, ExamCourse, ExamSlot, Room};
use crate::validation::{validate_exam_input, ValidationError};

use super::{find_free_room, ConflictIndex, FailureReason};

/// An exam that no (slot, room) pair could host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedExam {
    /// Exam course code.
    pub course_code: String,
    /// Sitting cohort.
    pub cohort: String,
    /// Why the exam could not be placed.
    pub reason: FailureReason,
}

impl fmt::Display for FailedExam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed due to {}", self.course_code, self.reason)
    }
}

/// Result of an exam scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamScheduleOutcome {
    /// Committed sittings, in commit order.
    pub bookings: Vec<ExamBooking>,
    /// Exams that could not be placed.
    pub failures: Vec<FailedExam>,
}

impl ExamScheduleOutcome {
    /// Whether every exam was placed.
    pub fn is_fully_scheduled(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of committed sittings.
    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    /// All sittings granted to a given room.
    pub fn bookings_for_room(&self, room_id: &str) -> Vec<&ExamBooking> {
        self.bookings
            .iter()
            .filter(|b| b.room_id == room_id)
            .collect()
    }

    /// All sittings held by a given cohort.
    pub fn bookings_for_cohort(&self, cohort: &str) -> Vec<&ExamBooking> {
        self.bookings.iter().filter(|b| b.cohort == cohort).collect()
    }
}

/// Greedy exam scheduler over a fixed slot catalogue.
///
/// # Algorithm
///
/// For each exam, in input order, scan the catalogue in supplied order:
/// 1. Skip slots whose length differs from the required duration.
/// 2. Skip slots where the cohort already sits an overlapping exam in
///    the same week and day.
/// 3. For a surviving slot, take the first room (in supplied order)
///    that seats the candidates and is free over the window.
/// 4. Commit the first (slot, room) pair found and move on; if none
///    exists, the exam fails with [`FailureReason::NoMatchingSlot`].
///
/// # Example
///
/// ```
/// use unischedule::models::{ClockTime, ExamCourse, ExamSlot, Room, Weekday};
/// use unischedule::scheduler::ExamScheduler;
///
/// let rooms = vec![Room::new("LR16", 60)];
/// let slots = vec![ExamSlot::new(
///     1,
///     1,
///     Weekday::Monday,
///     ClockTime::from_hm(9, 0),
///     ClockTime::from_hm(12, 0),
/// )];
/// let exams = vec![ExamCourse::new("EEE 311", "300-level", 31, 3)];
///
/// let outcome = ExamScheduler::new().schedule(&exams, &rooms, &slots).unwrap();
/// assert_eq!(outcome.bookings[0].slot_id, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExamScheduler;

impl ExamScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs a scheduling pass over the given exams, rooms, and slot
    /// catalogue.
    ///
    /// Inputs are validated first; a malformed input rejects the whole
    /// run. Per-exam failures never do.
    pub fn schedule(
        &self,
        exams: &[ExamCourse],
        rooms: &[Room],
        slots: &[ExamSlot],
    ) -> Result<ExamScheduleOutcome, Vec<ValidationError>> {
        validate_exam_input(exams, rooms, slots)?;

        let mut outcome = ExamScheduleOutcome::default();
        let mut index = ConflictIndex::new();
        let mut next_id: u32 = 1;

        for exam in exams {
            let placement = slots.iter().find_map(|slot| {
                if u32::from(slot.duration_minutes()) != exam.duration_minutes() {
                    return None;
                }
                if index.group_occupied(&exam.cohort, slot.week, slot.day, slot.span()) {
                    return None;
                }
                find_free_room(
                    rooms,
                    &index,
                    exam.headcount,
                    slot.week,
                    slot.day,
                    slot.span(),
                )
                .ok()
                .map(|room| (slot, room))
            });

            match placement {
                Some((slot, room)) => {
                    debug!(exam = %exam.code, room = %room.id, slot = %slot, "exam booked");
                    index.insert(&room.id, &exam.cohort, slot.week, slot.day, slot.span());
                    outcome.bookings.push(ExamBooking {
                        id: next_id,
                        room_id: room.id.clone(),
                        course_code: exam.code.clone(),
                        cohort: exam.cohort.clone(),
                        slot_id: slot.id,
                        week: slot.week,
                        day: slot.day,
                        start: slot.start,
                        end: slot.end,
                    });
                    next_id += 1;
                }
                None => {
                    warn!(exam = %exam.code, cohort = %exam.cohort, "exam could not be placed");
                    outcome.failures.push(FailedExam {
                        course_code: exam.code.clone(),
                        cohort: exam.cohort.clone(),
                        reason: FailureReason::NoMatchingSlot,
                    });
                }
            }
        }

        Ok(outcome)
    }
}
