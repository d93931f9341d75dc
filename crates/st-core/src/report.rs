//! Final per-user report data.

use serde::Serialize;

/// The report: one entry per user, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    pub users: Vec<UserReport>,
}

/// One user's aggregated session statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub username: String,
    pub session_count: usize,
    pub total_session_time_seconds: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_ordered_array() {
        let report = Report {
            users: vec![
                UserReport {
                    username: "alice".to_string(),
                    session_count: 1,
                    total_session_time_seconds: 1800,
                },
                UserReport {
                    username: "bob".to_string(),
                    session_count: 2,
                    total_session_time_seconds: 0,
                },
            ],
        };

        let value = serde_json::to_value(&report).unwrap();
        let entries = value.as_array().expect("report serializes as an array");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["username"], "alice");
        assert_eq!(entries[0]["session_count"], 1);
        assert_eq!(entries[0]["total_session_time_seconds"], 1800);
        assert_eq!(entries[1]["username"], "bob");
    }
}
