//! First-fit room search.
//!
//! Scans rooms in the order supplied by the caller and takes the first
//! one that seats the headcount and is not already booked over the
//! window. The two no-match outcomes are distinguished because they
//! read differently in the run log: either no room is large enough at
//! all, or every large-enough room is busy right now.

use crate::models::{Room, TimeSpan, Weekday};

use super::{ConflictIndex, FailureReason};

/// Finds the first free room for a headcount at the given window.
///
/// Room order is the caller's priority order. Failure is either
/// [`FailureReason::CapacityExceeded`] (headcount beats every room,
/// with the largest available capacity for diagnostics) or
/// [`FailureReason::RoomUnavailable`] (large-enough rooms exist but
/// all are time-conflicted at this window).
pub fn find_free_room<'a>(
    rooms: &'a [Room],
    index: &ConflictIndex,
    headcount: u32,
    week: u16,
    day: Weekday,
    span: TimeSpan,
) -> Result<&'a Room, FailureReason> {
    for room in rooms {
        if !room.fits(headcount) {
            continue;
        }
        if !index.room_occupied(&room.id, week, day, span) {
            return Ok(room);
        }
    }

    if rooms.iter().all(|room| !room.fits(headcount)) {
        let largest = rooms.iter().map(|room| room.capacity).max().unwrap_or(0);
        return Err(FailureReason::CapacityExceeded {
            required: headcount,
            largest,
        });
    }
    Err(FailureReason::RoomUnavailable { day, span })
}
