//! Room model.
//!
//! A room is the resource side of the assignment problem: a venue with
//! a fixed seating capacity. Rooms are read-only inputs for a
//! scheduling run; the caller controls their order, and the engine
//! scans them first-fit in that order.

use serde::{Deserialize, Serialize};

/// A teaching or examination venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name (e.g. "LR16").
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether this room can seat the given headcount.
    #[inline]
    pub fn fits(&self, headcount: u32) -> bool {
        self.capacity >= headcount
    }
}
