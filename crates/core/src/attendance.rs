//! Attendance time accounting.
//!
//! One attendance row exists per employee per local calendar day. The
//! lifecycle within a day is `NoRecord -> PunchedIn -> PunchedOut`; there is
//! no second punch-in once a row exists.

use chrono::{NaiveTime, Timelike};

/// Business-rule violations raised by punch-in / punch-out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttendanceError {
    #[error("Already punched in today")]
    AlreadyPunchedIn,

    #[error("No punch-in record found for today")]
    NoPunchIn,
}

/// Where an employee stands for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchState {
    NoRecord,
    PunchedIn,
    PunchedOut,
}

impl PunchState {
    /// Derive the state from today's row, if any.
    pub fn from_times(record_exists: bool, punch_out: Option<NaiveTime>) -> Self {
        match (record_exists, punch_out) {
            (false, _) => PunchState::NoRecord,
            (true, Some(_)) => PunchState::PunchedOut,
            (true, None) => PunchState::PunchedIn,
        }
    }

    /// A punch-in is only accepted when no row exists for today.
    pub fn check_punch_in(self) -> Result<(), AttendanceError> {
        match self {
            PunchState::NoRecord => Ok(()),
            PunchState::PunchedIn | PunchState::PunchedOut => {
                Err(AttendanceError::AlreadyPunchedIn)
            }
        }
    }
}

/// Minutes elapsed since local midnight, ignoring seconds.
pub fn minutes_since_midnight(time: NaiveTime) -> i32 {
    (time.hour() * 60 + time.minute()) as i32
}

/// Worked minutes between punch-in and punch-out on the same day.
///
/// Not clamped: a punch-out that lands after midnight yields a negative value.
pub fn working_minutes(punch_in: NaiveTime, punch_out: NaiveTime) -> i32 {
    minutes_since_midnight(punch_out) - minutes_since_midnight(punch_in)
}

/// Serde adapter for `Option<NaiveTime>` as `"HH:MM"`.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }

    /// Patch-field variant: a present key (even `null`) becomes `Some(..)`.
    pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<NaiveTime>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Some)
    }

    /// Parse `"HH:MM"`, also accepting `"HH:MM:SS"` whose seconds are discarded.
    pub fn parse(s: &str) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .map(crate::clock::truncate_to_minute)
            .or_else(|_| NaiveTime::parse_from_str(s, FORMAT))
            .map_err(|e| format!("invalid time '{s}', expected HH:MM: {e}"))
    }
}
