use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One past selection: who moderated the stand-up on a given date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub date: NaiveDate,
    pub moderator: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterOp {
    Add,
    Remove,
}

/// Selection count for one participant over a date range. `leading` marks
/// every row tied for the maximum count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub moderator: String,
    pub count: usize,
    pub leading: bool,
}

/// Weekday gate, evaluated once per interaction from the current date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateStatus {
    Open { default_next: NaiveDate },
    Closed { reason: String },
}
