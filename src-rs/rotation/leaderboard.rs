use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::types::{HistoryRecord, LeaderboardRow};

/// Count selections per moderator over `[start, end)`. Every row tied for
/// the maximum count is flagged `leading`; rows come back sorted by name.
pub fn compute_leaderboard(
    history: &[HistoryRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<LeaderboardRow> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in history {
        if record.date >= start && record.date < end {
            *counts.entry(record.moderator.as_str()).or_insert(0) += 1;
        }
    }
    let max = counts.values().copied().max().unwrap_or(0);
    counts
        .into_iter()
        .map(|(moderator, count)| LeaderboardRow {
            moderator: moderator.to_string(),
            count,
            leading: count == max,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    fn record(day: &str, moderator: &str) -> HistoryRecord {
        HistoryRecord {
            date: date(day),
            moderator: moderator.to_string(),
        }
    }

    #[test]
    fn counts_and_flags_the_leader() {
        let history = vec![
            record("2026-08-03", "Ann"),
            record("2026-08-05", "Ann"),
            record("2026-08-07", "Bob"),
        ];
        let rows = compute_leaderboard(&history, date("2026-08-01"), date("2026-09-01"));
        assert_eq!(
            rows,
            vec![
                LeaderboardRow {
                    moderator: "Ann".to_string(),
                    count: 2,
                    leading: true,
                },
                LeaderboardRow {
                    moderator: "Bob".to_string(),
                    count: 1,
                    leading: false,
                },
            ]
        );
    }

    #[test]
    fn ties_for_the_maximum_are_all_leading() {
        let history = vec![
            record("2026-08-03", "Ann"),
            record("2026-08-05", "Bob"),
        ];
        let rows = compute_leaderboard(&history, date("2026-08-01"), date("2026-09-01"));
        assert!(rows.iter().all(|row| row.leading));
    }

    #[test]
    fn range_end_is_exclusive() {
        let history = vec![
            record("2026-08-03", "Ann"),
            record("2026-08-05", "Bob"),
        ];
        let rows = compute_leaderboard(&history, date("2026-08-01"), date("2026-08-05"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].moderator, "Ann");
    }

    #[test]
    fn empty_range_yields_no_rows() {
        let history = vec![record("2026-08-03", "Ann")];
        let rows = compute_leaderboard(&history, date("2026-09-01"), date("2026-10-01"));
        assert!(rows.is_empty());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let history = vec![
            record("2026-08-03", "Ann"),
            record("2026-08-05", "Ann"),
            record("2026-08-07", "Bob"),
        ];
        let first = compute_leaderboard(&history, date("2026-08-01"), date("2026-09-01"));
        let second = compute_leaderboard(&history, date("2026-08-01"), date("2026-09-01"));
        assert_eq!(first, second);
    }
}
