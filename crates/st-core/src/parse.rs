//! Line validation: raw log lines to events.
//!
//! A well-formed line is three whitespace-separated fields:
//! `<HH:MM:SS> <username> <Start|End>`. Anything else is rejected with a
//! reason; rejection is the caller's signal to drop the line, never an
//! error that halts processing.

use chrono::NaiveTime;
use thiserror::Error;

use crate::event::{Action, Event, UnknownAction};

/// Expected timestamp layout, 24-hour time of day.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Why a raw line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 3 fields, got {0}")]
    FieldCount(usize),
    #[error("invalid timestamp: {0}")]
    Timestamp(String),
    #[error("invalid username: {0}")]
    Username(String),
    #[error(transparent)]
    Action(#[from] UnknownAction),
}

/// Parses one raw log line into a validated [`Event`].
///
/// Parsing is pure and idempotent: the same input always yields the same
/// result, and no failure propagates beyond the returned error.
pub fn parse_line(line: &str) -> Result<Event, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [time_str, username, action] = fields[..] else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let timestamp = NaiveTime::parse_from_str(time_str, TIME_FORMAT)
        .map_err(|_| LineError::Timestamp(time_str.to_string()))?;

    if !is_valid_username(username) {
        return Err(LineError::Username(username.to_string()));
    }

    let action: Action = action.parse()?;

    Ok(Event {
        timestamp,
        username: username.to_string(),
        action,
    })
}

/// Usernames are non-empty and purely alphanumeric (letters and digits,
/// no punctuation, underscores, or spaces).
fn is_valid_username(username: &str) -> bool {
    !username.is_empty() && username.chars().all(char::is_alphanumeric)
}
