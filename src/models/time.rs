//! Clock and weekday primitives.
//!
//! Defines the time vocabulary of a teaching week: five weekdays, a
//! minute-of-day clock value, and a half-open time span with overlap
//! testing.
//!
//! # Time Model
//! Times are minutes since midnight, not `HH:MM` strings. The service
//! layer exchanges zero-padded `HH:MM` strings; they are parsed to
//! `ClockTime` at the boundary so every comparison in the engine is
//! numeric. (`"9:00"` vs `"09:00"` compares wrongly as strings.)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error produced when parsing a clock time or weekday from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// Not a valid `HH:MM` clock value.
    #[error("invalid clock time '{0}': expected HH:MM between 00:00 and 23:59")]
    InvalidClockTime(String),
    /// Not one of the five teaching weekdays.
    #[error("unknown weekday '{0}': expected Monday..Friday")]
    UnknownWeekday(String),
}

/// A teaching weekday.
///
/// The week has five days; ordering follows the calendar
/// (`Monday < Friday`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Day name as used on the wire (e.g. `"Monday"`).
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Position in the week (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The other four weekdays, starting after `self` and wrapping
    /// past Friday back to Monday.
    ///
    /// For Wednesday this yields Thursday, Friday, Monday, Tuesday.
    pub fn rest_of_week(self) -> impl Iterator<Item = Weekday> {
        let from = self.index();
        (1..Self::ALL.len()).map(move |offset| Self::ALL[(from + offset) % Self::ALL.len()])
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| TimeParseError::UnknownWeekday(s.to_string()))
    }
}

/// A clock value: minutes since midnight.
///
/// Ordered numerically, so `13:00 > 09:00` regardless of how the
/// source text was padded. Serializes as a zero-padded `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Creates a clock time from an hour and minute.
    ///
    /// Values are taken as-is; the parser is the validating entry point.
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0–23).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0–59).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeParseError::InvalidClockTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }
        Ok(Self::from_hm(hour, minute))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// A time interval [start, end) within one day.
///
/// Half-open: a span ending at 10:00 does not conflict with one
/// starting at 10:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Span start (inclusive).
    pub start: ClockTime,
    /// Span end (exclusive).
    pub end: ClockTime,
}

impl TimeSpan {
    /// Creates a new span.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Length of the span in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether two spans overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: &str, end: &str) -> TimeSpan {
        TimeSpan::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn test_clock_time_parse_and_display() {
        let t: ClockTime = "08:30".parse().unwrap();
        assert_eq!(t, ClockTime::from_hm(8, 30));
        assert_eq!(t.to_string(), "08:30");
        assert_eq!(t.minutes(), 510);
    }

    #[test]
    fn test_clock_time_orders_numerically() {
        // The string trap: "9:00" > "13:00" lexically.
        let nine: ClockTime = "9:00".parse().unwrap();
        let thirteen: ClockTime = "13:00".parse().unwrap();
        assert!(nine < thirteen);
        assert_eq!(nine.to_string(), "09:00"); // re-rendered zero-padded
    }

    #[test]
    fn test_clock_time_rejects_garbage() {
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("08:60".parse::<ClockTime>().is_err());
        assert!("0800".parse::<ClockTime>().is_err());
        assert!("ten".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_weekday_parse_and_order() {
        let d: Weekday = "Wednesday".parse().unwrap();
        assert_eq!(d, Weekday::Wednesday);
        assert!(Weekday::Monday < Weekday::Friday);
        assert!("Sunday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_rest_of_week_wraps() {
        let rest: Vec<Weekday> = Weekday::Wednesday.rest_of_week().collect();
        assert_eq!(
            rest,
            vec![
                Weekday::Thursday,
                Weekday::Friday,
                Weekday::Monday,
                Weekday::Tuesday
            ]
        );
    }

    #[test]
    fn test_span_overlap_half_open() {
        let morning = span("08:00", "10:00");
        assert!(morning.overlaps(&span("09:00", "11:00")));
        assert!(morning.overlaps(&span("08:30", "09:30"))); // contained
        assert!(!morning.overlaps(&span("10:00", "12:00"))); // touching end
        assert!(!morning.overlaps(&span("06:00", "08:00"))); // touching start
    }

    #[test]
    fn test_span_duration() {
        assert_eq!(span("09:00", "12:00").duration_minutes(), 180);
        assert_eq!(span("17:00", "18:00").duration_minutes(), 60);
    }

    #[test]
    fn test_clock_time_serde_round_trip() {
        let t: ClockTime = "14:00".parse().unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"14:00\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_weekday_serde_uses_day_names() {
        let json = serde_json::to_string(&Weekday::Monday).unwrap();
        assert_eq!(json, "\"Monday\"");
    }
}
