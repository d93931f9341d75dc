//! Per-user session intervals and aggregates.

use chrono::NaiveTime;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole seconds from `start` forward to `end` on a 24-hour clock.
///
/// Time-of-day values carry no date, so an `end` that is clock-earlier than
/// `start` wraps forward across midnight rather than going negative. The
/// result is always in `0..86_400`.
#[must_use]
pub fn seconds_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_seconds().rem_euclid(SECONDS_PER_DAY)
}

/// A contiguous interval of user activity.
///
/// Open sessions (`end_time` absent) are waiting for their `End` event;
/// `duration_seconds` is only defined once the session closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub duration_seconds: Option<i64>,
}

impl Session {
    /// A session that has started but not yet ended.
    #[must_use]
    pub const fn open(start_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time: None,
            duration_seconds: None,
        }
    }

    /// A fully-bounded session, duration computed up front.
    #[must_use]
    pub fn closed(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time: Some(end_time),
            duration_seconds: Some(seconds_between(start_time, end_time)),
        }
    }

    /// Closes this session at `end_time` and derives its duration.
    pub fn close(&mut self, end_time: NaiveTime) {
        self.end_time = Some(end_time);
        self.duration_seconds = Some(seconds_between(self.start_time, end_time));
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Everything reconstructed for one user.
///
/// Sessions are kept in append order (matching order, which is not
/// necessarily `start_time` order). `total_session_time` stays zero until
/// finalization sums the closed durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub name: String,
    pub sessions: Vec<Session>,
    pub total_session_time: i64,
}

impl UserStats {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sessions: Vec::new(),
            total_session_time: 0,
        }
    }
}
