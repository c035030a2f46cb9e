//! Course and exam course models.
//!
//! A `Course` is a recurring weekly teaching unit with one or more
//! desired time slots; an `ExamCourse` is a one-shot sitting that only
//! states how long it must run, leaving the concrete window to the
//! catalogue. Both carry an owner group for non-overlap enforcement:
//! the lecturer for courses, the cohort (academic level or department
//! group) for exams.

use serde::{Deserialize, Serialize};

use super::slot::TimeSlot;

/// A course to be placed on the weekly timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of enrolled students.
    pub headcount: u32,
    /// Owning lecturer; no two of their sessions may overlap.
    pub lecturer_id: String,
    /// Desired weekly windows, in priority order.
    pub slots: Vec<TimeSlot>,
}

impl Course {
    /// Creates a new course.
    pub fn new(id: impl Into<String>, lecturer_id: impl Into<String>, headcount: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            headcount,
            lecturer_id: lecturer_id.into(),
            slots: Vec::new(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a desired weekly window.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Label used in logs: the name when set, otherwise the id.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// An exam sitting to be placed in the exam period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamCourse {
    /// Course code (e.g. "EEE 311").
    pub code: String,
    /// Course title.
    pub title: String,
    /// Cohort sitting the exam; no two of its exams may overlap.
    pub cohort: String,
    /// Number of candidates.
    pub headcount: u32,
    /// Required exam length in whole hours, matched against catalogue
    /// slots by exact duration.
    pub duration_hours: u32,
}

impl ExamCourse {
    /// Creates a new exam course.
    pub fn new(
        code: impl Into<String>,
        cohort: impl Into<String>,
        headcount: u32,
        duration_hours: u32,
    ) -> Self {
        Self {
            code: code.into(),
            title: String::new(),
            cohort: cohort.into(),
            headcount,
            duration_hours,
        }
    }

    /// Sets the course title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Required duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_hours * 60
    }
}
