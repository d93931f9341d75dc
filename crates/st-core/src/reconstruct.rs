//! Session reconstruction from a stream of log lines.
//!
//! # Algorithm Summary
//!
//! 1. Validate each raw line into an event, or count and drop it
//! 2. Track the earliest/latest valid timestamps across all users
//! 3. Match Start/End pairs per user, in arrival order
//! 4. After the last line, close anything still open at the latest
//!    timestamp and sum per-user totals
//!
//! An `End` with no open session synthesizes one anchored at the earliest
//! observed timestamp: the user was already active when the log window
//! opened. A `Start` with no matching `End` is closed at the latest
//! observed timestamp: the user was still active when the window closed.

use std::collections::HashMap;

use crate::event::{Action, Event};
use crate::parse::{LineError, parse_line};
use crate::range::TimeRange;
use crate::report::{Report, UserReport};
use crate::session::{Session, UserStats};

/// Counts of what the reconstructor consumed and dropped.
///
/// Observational only; has no effect on the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Raw lines consumed.
    pub lines: u64,
    /// Lines that validated into events.
    pub events: u64,
    /// Lines dropped for a wrong field count.
    pub bad_field_count: u64,
    /// Lines dropped for an unparsable timestamp.
    pub bad_timestamp: u64,
    /// Lines dropped for a non-alphanumeric username.
    pub bad_username: u64,
    /// Lines dropped for an unrecognized action.
    pub bad_action: u64,
}

impl IngestStats {
    /// Total lines dropped, across all reasons.
    #[must_use]
    pub const fn skipped(&self) -> u64 {
        self.bad_field_count + self.bad_timestamp + self.bad_username + self.bad_action
    }

    fn record_skip(&mut self, error: &LineError) {
        match error {
            LineError::FieldCount(_) => self.bad_field_count += 1,
            LineError::Timestamp(_) => self.bad_timestamp += 1,
            LineError::Username(_) => self.bad_username += 1,
            LineError::Action(_) => self.bad_action += 1,
        }
    }
}

/// Single-pass builder of per-user session state.
///
/// Feed it lines (or pre-validated events) in file order, then call
/// [`Reconstructor::finish`] exactly once. Nothing here fails on input
/// content: malformed lines are dropped, unmatched events are repaired
/// with synthesized boundaries.
#[derive(Debug, Default)]
pub struct Reconstructor {
    users: Vec<UserStats>,
    index: HashMap<String, usize>,
    range: TimeRange,
    stats: IngestStats,
}

impl Reconstructor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one raw log line, dropping it if malformed.
    pub fn ingest_line(&mut self, line: &str) {
        self.stats.lines += 1;
        match parse_line(line) {
            Ok(event) => self.apply(event),
            Err(error) => {
                self.stats.record_skip(&error);
                tracing::trace!(line = self.stats.lines, %error, "skipping malformed line");
            }
        }
    }

    /// Applies one validated event in arrival order.
    pub fn apply(&mut self, event: Event) {
        self.stats.events += 1;
        self.range.observe(event.timestamp);

        // First event overall is its own earliest, so the anchor always exists.
        let anchor = self.range.earliest().unwrap_or(event.timestamp);

        let idx = self.entry_index(&event.username);
        let user = &mut self.users[idx];

        match event.action {
            // Unconditional: a Start while another session is open appends a
            // second open session rather than closing or replacing the first.
            Action::Start => user.sessions.push(Session::open(event.timestamp)),
            Action::End => {
                if let Some(open) = user.sessions.iter_mut().find(|s| s.is_open()) {
                    open.close(event.timestamp);
                } else {
                    user.sessions.push(Session::closed(anchor, event.timestamp));
                }
            }
        }
    }

    /// Ingest statistics so far.
    #[must_use]
    pub const fn stats(&self) -> IngestStats {
        self.stats
    }

    /// Closes every still-open session at the latest observed timestamp and
    /// computes per-user totals.
    #[must_use]
    pub fn finish(mut self) -> Reconstruction {
        let closed_at = self.range.latest();
        for user in &mut self.users {
            for session in &mut user.sessions {
                if session.is_open() {
                    // latest is always Some once any session exists.
                    if let Some(latest) = closed_at {
                        session.close(latest);
                    }
                }
            }
            user.total_session_time = user.sessions.iter().filter_map(|s| s.duration_seconds).sum();
        }

        Reconstruction {
            users: self.users,
            range: self.range,
            stats: self.stats,
        }
    }

    /// Registry entry for `name`, created on first appearance. Users keep
    /// first-seen order.
    fn entry_index(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.users.len();
        self.index.insert(name.to_string(), idx);
        self.users.push(UserStats::new(name));
        idx
    }
}

/// Finalized output of one reconstruction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// Users in first-seen order, sessions closed and totals summed.
    pub users: Vec<UserStats>,
    /// Bounds of the observed window; `None` fields mean no valid events.
    pub range: TimeRange,
    /// What was consumed and dropped along the way.
    pub stats: IngestStats,
}

impl Reconstruction {
    /// The externally-observable report, in first-seen user order.
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            users: self
                .users
                .iter()
                .map(|user| UserReport {
                    username: user.name.clone(),
                    session_count: user.sessions.len(),
                    total_session_time_seconds: user.total_session_time,
                })
                .collect(),
        }
    }
}
