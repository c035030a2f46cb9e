//! Greedy timetable schedulers.
//!
//! Two orchestrators share the same building blocks:
//!
//! - **`CourseScheduler`**: places recurring weekly sessions at their
//!   desired slots, searching for the least-disruptive alternative
//!   slot when a room or the lecturer is unavailable.
//! - **`ExamScheduler`**: places one-shot sittings by advancing through
//!   a fixed candidate slot catalogue; no relocation, catalogue order
//!   is the priority signal.
//!
//! Beneath them sit the `ConflictIndex` (committed occupancy view),
//! the first-fit room search, and the ranked relocation search.
//!
//! # Algorithm
//!
//! Greedy and strictly sequential: subjects are processed in input
//! order, each observing every booking made before it. Every accepted
//! booking is feasible; nothing is ever un-booked, so the result is
//! order-dependent by design. Per-subject failures are values in the
//! outcome, never errors — only an input-contract violation aborts a
//! run.

mod conflicts;
mod course;
mod exam;
mod relocation;
mod rooms;

pub use conflicts::ConflictIndex;
pub use course::{CourseScheduleOutcome, CourseScheduler, FailedSession, RelocationEntry};
pub use exam::{ExamScheduleOutcome, ExamScheduler, FailedExam};
pub use relocation::{find_alternative_slot, DAY_CLOSE, DAY_GRID};
pub use rooms::find_free_room;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{TimeSpan, Weekday};

/// Week scope of the recurring weekly timetable. Exam runs carry real
/// week numbers; course runs all share this one.
pub(crate) const TERM_WEEK: u16 = 0;

/// Why a subject (or one search step for it) could not be placed.
///
/// Failures are per-subject outcomes: they are recorded in the run
/// result and never stop processing of later subjects.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FailureReason {
    /// The headcount exceeds every room's capacity.
    #[error("no room can seat {required} students; largest room available seats {largest}")]
    CapacityExceeded {
        /// Required headcount.
        required: u32,
        /// Largest capacity among the supplied rooms.
        largest: u32,
    },
    /// Rooms large enough exist, but all are busy at the window.
    #[error("no room free on {day} at ({span})")]
    RoomUnavailable {
        /// Day of the attempted window.
        day: Weekday,
        /// The attempted [start, end) interval.
        span: TimeSpan,
    },
    /// The lecturer already holds an overlapping session.
    #[error("lecturer conflict")]
    LecturerConflict,
    /// The relocation search exhausted every candidate slot.
    #[error("no alternative slot found")]
    NoAlternativeFound,
    /// No catalogue slot satisfies duration, capacity, and both
    /// non-overlap constraints (exam variant).
    #[error("no candidate slot satisfies duration, capacity, and conflict constraints")]
    NoMatchingSlot,
}
