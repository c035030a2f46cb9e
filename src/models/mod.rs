//! Timetabling domain models.
//!
//! Core data types for the assignment problem: rooms (resources),
//! courses and exam sittings (subjects), time slots (windows), and
//! bookings (committed assignments).
//!
//! Rooms, courses, and candidate slots are read-only inputs for a
//! scheduling run; bookings are append-only during a run and returned
//! as its result. Nothing here is persisted by the engine itself.

mod booking;
mod course;
mod room;
mod slot;
mod time;

pub use booking::{Booking, ExamBooking};
pub use course::{Course, ExamCourse};
pub use room::Room;
pub use slot::{ExamSlot, TimeSlot};
pub use time::{ClockTime, TimeParseError, TimeSpan, Weekday};
