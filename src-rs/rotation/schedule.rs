use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::types::GateStatus;

/// Weekend shutdown: no selection on Saturdays or Sundays, only the last
/// recorded moderator is reported.
pub fn gate(today: NaiveDate) -> GateStatus {
    match today.weekday() {
        Weekday::Sat => GateStatus::Closed {
            reason: "tool is off on Saturdays".to_string(),
        },
        Weekday::Sun => GateStatus::Closed {
            reason: "tool is off on Sundays".to_string(),
        },
        _ => GateStatus::Open {
            default_next: default_next_date(today),
        },
    }
}

/// Stand-ups run Monday, Wednesday and Friday; the default next meeting is
/// the first of those strictly after `today`.
pub fn default_next_date(today: NaiveDate) -> NaiveDate {
    let ahead = match today.weekday() {
        Weekday::Mon | Weekday::Wed | Weekday::Sat => 2,
        Weekday::Tue | Weekday::Thu | Weekday::Sun => 1,
        Weekday::Fri => 3,
    };
    today + Duration::days(ahead)
}
