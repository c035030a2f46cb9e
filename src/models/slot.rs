//! Time slot models.
//!
//! A `TimeSlot` is a course's desired weekly window; an `ExamSlot` is
//! one entry of the fixed exam candidate catalogue, carrying a week
//! number and a stable identity of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::{ClockTime, TimeSpan, Weekday};

/// A weekly course window: a weekday plus a [start, end) interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the teaching week.
    pub day: Weekday,
    /// Window start (inclusive).
    pub start: ClockTime,
    /// Window end (exclusive).
    pub end: ClockTime,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Self {
        Self { day, start, end }
    }

    /// The [start, end) interval of this slot.
    #[inline]
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start, self.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

/// One candidate window of the exam catalogue.
///
/// Catalogue order is the scheduling priority: the exam scheduler
/// takes the first feasible slot in the order the caller supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSlot {
    /// Stable slot identity.
    pub id: u32,
    /// Exam period week number.
    pub week: u16,
    /// Day within the week.
    pub day: Weekday,
    /// Window start (inclusive).
    pub start: ClockTime,
    /// Window end (exclusive).
    pub end: ClockTime,
}

impl ExamSlot {
    /// Creates a new exam slot.
    pub fn new(id: u32, week: u16, day: Weekday, start: ClockTime, end: ClockTime) -> Self {
        Self {
            id,
            week,
            day,
            start,
            end,
        }
    }

    /// The [start, end) interval of this slot.
    #[inline]
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start, self.end)
    }

    /// Slot length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.span().duration_minutes()
    }
}

impl fmt::Display for ExamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "week {} {} {}-{}",
            self.week, self.day, self.start, self.end
        )
    }
}
