//! Validated activity events from the log.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

/// What a log line says the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// The user began a session.
    Start,
    /// The user ended a session.
    End,
}

impl Action {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    /// Case-sensitive: only the exact tokens `Start` and `End` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Start" => Ok(Self::Start),
            "End" => Ok(Self::End),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}

/// Error type for unrecognized action tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

/// A single validated log record.
///
/// Events are ephemeral: they are produced by [`crate::parse_line`] and
/// consumed immediately by the reconstructor, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Time of day the event occurred.
    pub timestamp: NaiveTime,
    /// Who did it. Always non-empty and alphanumeric.
    pub username: String,
    /// Whether the session started or ended.
    pub action: Action,
}
