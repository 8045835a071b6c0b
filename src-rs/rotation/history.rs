use chrono::NaiveDate;

use super::types::HistoryRecord;

/// Fold a new selection into the history. Records dated on or after `date`
/// are discarded first, so re-running the selection for a pending date
/// replaces the earlier result instead of stacking a second record.
pub fn record_selection(
    history: &[HistoryRecord],
    moderator: &str,
    date: NaiveDate,
) -> Vec<HistoryRecord> {
    let mut updated: Vec<HistoryRecord> = history
        .iter()
        .filter(|record| record.date < date)
        .cloned()
        .collect();
    updated.push(HistoryRecord {
        date,
        moderator: moderator.to_string(),
    });
    updated
}

pub fn last_record(history: &[HistoryRecord]) -> Option<&HistoryRecord> {
    history.last()
}

/// The last `limit` records dated strictly before `before`, newest first.
pub fn recent_records(
    history: &[HistoryRecord],
    before: NaiveDate,
    limit: usize,
) -> Vec<HistoryRecord> {
    let mut recent: Vec<HistoryRecord> = history
        .iter()
        .filter(|record| record.date < before)
        .cloned()
        .collect();
    recent.reverse();
    recent.truncate(limit);
    recent
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
    fn appends_to_empty_history() {
        let updated = record_selection(&[], "Ann", date("2026-08-05"));
        assert_eq!(updated, vec![record("2026-08-05", "Ann")]);
    }

    #[test]
    fn same_date_resubmission_replaces_the_record() {
        let history = vec![record("2026-08-03", "Ann"), record("2026-08-05", "Bob")];
        let updated = record_selection(&history, "Cleo", date("2026-08-05"));
        assert_eq!(
            updated,
            vec![record("2026-08-03", "Ann"), record("2026-08-05", "Cleo")]
        );
    }

    #[test]
    fn earlier_date_truncates_later_records() {
        let history = vec![
            record("2026-08-03", "Ann"),
            record("2026-08-05", "Bob"),
            record("2026-08-07", "Cleo"),
        ];
        let updated = record_selection(&history, "Bob", date("2026-08-04"));
        assert_eq!(
            updated,
            vec![record("2026-08-03", "Ann"), record("2026-08-04", "Bob")]
        );
    }

    #[test]
    fn later_date_appends() {
        let history = vec![record("2026-08-03", "Ann")];
        let updated = record_selection(&history, "Bob", date("2026-08-05"));
        assert_eq!(updated.len(), 2);
        assert_eq!(last_record(&updated).unwrap().moderator, "Bob");
    }

    #[test]
    fn input_history_is_untouched() {
        let history = vec![record("2026-08-03", "Ann")];
        let _ = record_selection(&history, "Bob", date("2026-08-03"));
        assert_eq!(history, vec![record("2026-08-03", "Ann")]);
    }

    #[test]
    fn recent_records_are_newest_first_and_bounded() {
        let history = vec![
            record("2026-08-03", "Ann"),
            record("2026-08-05", "Bob"),
            record("2026-08-07", "Cleo"),
            record("2026-08-10", "Dana"),
        ];
        let recent = recent_records(&history, date("2026-08-10"), 2);
        assert_eq!(
            recent,
            vec![record("2026-08-07", "Cleo"), record("2026-08-05", "Bob")]
        );
    }
}
