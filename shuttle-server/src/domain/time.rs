//! Wall-clock time of day for the departures board.
//!
//! All schedule logic works in whole minutes since midnight. This module
//! provides a `TimeOfDay` type that is valid by construction, so the
//! evaluators downstream never have to handle an out-of-range clock value.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Number of minutes in a day. `TimeOfDay` values are in `[0, MINUTES_PER_DAY)`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when constructing an invalid time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day as minutes since midnight, in `[0, 1439]`.
///
/// This type guarantees the range invariant at construction, which makes
/// the schedule evaluators total functions: there is no representable
/// "malformed clock value" for them to mishandle.
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::TimeOfDay;
///
/// let eight = TimeOfDay::from_hm(8, 0).unwrap();
/// assert_eq!(eight.minutes(), 480);
/// assert_eq!(eight.to_string(), "08:00");
///
/// // Out-of-range raw minutes are rejected
/// assert!(TimeOfDay::new(1440).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, the first minute of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Construct from raw minutes since midnight.
    pub fn new(minutes: u16) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::new("minutes must be in 0..1440"));
        }
        Ok(Self(minutes))
    }

    /// Construct from hour and minute components.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("930").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// assert!(TimeOfDay::parse_hhmm("12:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Construct from a chrono time, discarding seconds.
    ///
    /// Infallible: chrono guarantees the hour/minute ranges.
    pub fn from_time(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u16.
fn parse_two_digits(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)? as u16;
    let d2 = (bytes[1] as char).to_digit(10)? as u16;
    Some(d1 * 10 + d2)
}
