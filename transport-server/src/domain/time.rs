//! Wall-clock times for timetable entries.
//!
//! Timetables carry times as "HH:MM" strings with no date attached. Adding a
//! journey duration wraps past midnight: 23:50 plus 30 minutes is 00:20.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

use super::DomainError;

/// A time of day at minute precision.
///
/// # Examples
///
/// ```
/// use transport_server::domain::ClockTime;
///
/// let dep = ClockTime::parse_hhmm("23:50").unwrap();
/// assert_eq!(dep.add_minutes(30).to_string(), "00:20");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Create a time from hour and minute, if both are in range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// ```
    /// use transport_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("21:30").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("2130").is_err());
    /// assert!(ClockTime::parse_hhmm("9:30").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, DomainError> {
        if s.len() != 5 {
            return Err(DomainError::InvalidTime("expected HH:MM format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' {
            return Err(DomainError::InvalidTime("expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or(DomainError::InvalidTime("invalid hour digits"))?;
        if hour > 23 {
            return Err(DomainError::InvalidTime("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or(DomainError::InvalidTime("invalid minute digits"))?;
        if minute > 59 {
            return Err(DomainError::InvalidTime("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or(DomainError::InvalidTime("invalid time"))
    }

    /// Add minutes, wrapping around midnight as often as needed.
    pub fn add_minutes(self, minutes: u32) -> Self {
        let (time, _wrapped) = self
            .0
            .overflowing_add_signed(Duration::minutes(i64::from(minutes)));
        Self(time)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes since midnight (0..1440).
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn wraps_past_midnight() {
        assert_eq!(t("23:50").add_minutes(30).to_string(), "00:20");
        assert_eq!(t("21:30").add_minutes(540).to_string(), "06:30");
    }

    #[test]
    fn adds_within_day() {
        assert_eq!(t("08:30").add_minutes(180).to_string(), "11:30");
        assert_eq!(t("10:00").add_minutes(0).to_string(), "10:00");
        assert_eq!(t("07:15").add_minutes(45).to_string(), "08:00");
    }

    #[test]
    fn wraps_multiple_days() {
        assert_eq!(t("12:00").add_minutes(3 * 1440 + 5).to_string(), "12:05");
    }

    #[test]
    fn rejects_malformed() {
        assert!(ClockTime::parse_hhmm("").is_err());
        assert!(ClockTime::parse_hhmm("12-30").is_err());
        assert!(ClockTime::parse_hhmm("ab:cd").is_err());
        assert!(ClockTime::parse_hhmm("12:60").is_err());
    }

    #[test]
    fn minutes_since_midnight() {
        assert_eq!(t("00:00").minutes_since_midnight(), 0);
        assert_eq!(t("18:30").minutes_since_midnight(), 1110);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time()(hour in 0u32..24, minute in 0u32..60) -> String {
            format!("{:02}:{:02}", hour, minute)
        }
    }

    proptest! {
        /// Parse then display roundtrips
        #[test]
        fn parse_display_roundtrip(time_str in valid_time()) {
            let parsed = ClockTime::parse_hhmm(&time_str).unwrap();
            prop_assert_eq!(parsed.to_string(), time_str);
        }

        /// Arrival is departure plus duration modulo one day
        #[test]
        fn add_minutes_is_modular(time_str in valid_time(), minutes in 0u32..10_000) {
            let dep = ClockTime::parse_hhmm(&time_str).unwrap();
            let arr = dep.add_minutes(minutes);
            prop_assert_eq!(
                arr.minutes_since_midnight(),
                (dep.minutes_since_midnight() + minutes) % 1440
            );
        }
    }
}
