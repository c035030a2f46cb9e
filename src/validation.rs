//! Input validation for scheduling runs.
//!
//! Checks the structural integrity of rooms, courses, and exam
//! catalogues before a run starts. A malformed row is an input-contract
//! violation that rejects the whole run, never a silent skip. Detects:
//! - Duplicate IDs
//! - Inverted or empty time windows (end <= start)
//! - Courses with no requested windows
//! - Exams with a zero-hour duration
//!
//! Unknown day symbols and malformed `HH:MM` strings cannot reach this
//! layer: they fail at the `Weekday`/`ClockTime` parse boundary.
//! Negative capacities and headcounts are unrepresentable (`u32`).

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Course, ExamCourse, ExamSlot, Room};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A time window ends at or before its start.
    InvalidWindow,
    /// A course requests no windows at all.
    EmptyCourse,
    /// An exam requires a zero-hour sitting.
    ZeroDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a course scheduling run.
///
/// Checks:
/// 1. No duplicate room IDs
/// 2. No duplicate course IDs
/// 3. Every course requests at least one window
/// 4. Every requested window satisfies end > start
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_course_input(courses: &[Course], rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();
    check_duplicate_rooms(rooms, &mut errors);

    let mut course_ids = HashSet::new();
    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        if course.slots.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course '{}' requests no time slots", course.id),
            ));
        }

        for slot in &course.slots {
            if slot.end <= slot.start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidWindow,
                    format!(
                        "Course '{}' window {} ends at or before its start",
                        course.id, slot
                    ),
                ));
            }
        }
    }

    finish(errors)
}

/// Validates the input of an exam scheduling run.
///
/// Checks:
/// 1. No duplicate room IDs
/// 2. No duplicate exam course codes
/// 3. No duplicate catalogue slot IDs
/// 4. Every catalogue slot satisfies end > start
/// 5. Every exam requires at least one hour
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_exam_input(
    exams: &[ExamCourse],
    rooms: &[Room],
    slots: &[ExamSlot],
) -> ValidationResult {
    let mut errors = Vec::new();
    check_duplicate_rooms(rooms, &mut errors);

    let mut codes = HashSet::new();
    for exam in exams {
        if !codes.insert(exam.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate exam course code: {}", exam.code),
            ));
        }

        if exam.duration_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Exam '{}' requires a zero-hour sitting", exam.code),
            ));
        }
    }

    let mut slot_ids = HashSet::new();
    for slot in slots {
        if !slot_ids.insert(slot.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate exam slot ID: {}", slot.id),
            ));
        }

        if slot.end <= slot.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!("Exam slot {} ({}) ends at or before its start", slot.id, slot),
            ));
        }
    }

    finish(errors)
}

fn check_duplicate_rooms(rooms: &[Room], errors: &mut Vec<ValidationError>) {
    let mut room_ids = HashSet::new();
    for room in rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
