//! Booking models.
//!
//! A booking is a committed (course, room, window) assignment. It is
//! created only by a scheduler, is immutable once created, and is the
//! authoritative record later subjects in the same run are checked
//! against. Owner-group ids (lecturer, cohort) are denormalized into
//! the booking so a conflict index can be rebuilt from a booking list
//! alone.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::{ClockTime, TimeSpan, Weekday};

/// A committed course session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Sequential booking id, starting at 1 within a run.
    pub id: u32,
    /// Room granted.
    pub room_id: String,
    /// Course served.
    pub course_id: String,
    /// Owning lecturer (denormalized for conflict queries).
    pub lecturer_id: String,
    /// Day the session holds.
    pub day: Weekday,
    /// Session start (inclusive).
    pub start: ClockTime,
    /// Session end (exclusive).
    pub end: ClockTime,
}

impl Booking {
    /// The [start, end) interval of this booking.
    #[inline]
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start, self.end)
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} on {} {}-{}",
            self.course_id, self.room_id, self.day, self.start, self.end
        )
    }
}

/// A committed exam sitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamBooking {
    /// Sequential booking id, starting at 1 within a run.
    pub id: u32,
    /// Room granted.
    pub room_id: String,
    /// Exam course code.
    pub course_code: String,
    /// Sitting cohort (denormalized for conflict queries).
    pub cohort: String,
    /// Catalogue slot granted.
    pub slot_id: u32,
    /// Exam period week number.
    pub week: u16,
    /// Day the sitting holds.
    pub day: Weekday,
    /// Sitting start (inclusive).
    pub start: ClockTime,
    /// Sitting end (exclusive).
    pub end: ClockTime,
}

impl ExamBooking {
    /// The [start, end) interval of this booking.
    #[inline]
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start, self.end)
    }
}

impl fmt::Display for ExamBooking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} on week {} {} {}-{}",
            self.course_code, self.room_id, self.week, self.day, self.start, self.end
        )
    }
}
