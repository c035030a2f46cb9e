//! Greedy university timetable engine.
//!
//! Assigns courses and exam sittings to rooms and time windows while
//! enforcing hard capacity and non-overlap constraints, relocating
//! course sessions whose desired slot is unavailable.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Room`, `Course`, `ExamCourse`,
//!   `TimeSlot`, `ExamSlot`, `Booking`, `ExamBooking`, clock primitives
//! - **`scheduler`**: `CourseScheduler` and `ExamScheduler` orchestrators,
//!   the conflict index, room selection, and the relocation search
//! - **`validation`**: Input integrity checks (duplicate IDs, inverted
//!   windows, empty courses)
//!
//! # Algorithm
//!
//! Both schedulers are greedy and order-dependent: subjects are placed
//! one at a time in input order, each seeing every booking made before
//! it. An accepted booking is always feasible; no global optimality is
//! attempted, and reordering the inputs can change which subjects are
//! relocated or fail.
//!
//! The engine is a pure, single-threaded computation. Persistence,
//! HTTP, authentication, and document export belong to the caller.

pub mod models;
pub mod scheduler;
pub mod validation;
