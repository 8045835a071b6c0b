use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RotationError;
use crate::rotation::types::HistoryRecord;

// Persisted layout: `moderators.csv` is a single `Moderator` column,
// `moderator_history.csv` has `Date,Moderator` rows with %Y-%m-%d dates.

#[derive(Debug, Serialize, Deserialize)]
struct RosterRow {
    #[serde(rename = "Moderator")]
    moderator: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Moderator")]
    moderator: String,
}

pub fn roster_from_csv(content: &str) -> Result<Vec<String>, RotationError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut roster = Vec::new();
    for row in reader.deserialize::<RosterRow>() {
        let row = row?;
        let name = row.moderator.trim().to_string();
        if !name.is_empty() {
            roster.push(name);
        }
    }
    roster.sort();
    Ok(roster)
}

pub fn roster_to_csv(roster: &[String]) -> Result<String, RotationError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for name in roster {
        writer.serialize(RosterRow {
            moderator: name.clone(),
        })?;
    }
    finish(writer)
}

pub fn history_from_csv(content: &str) -> Result<Vec<HistoryRecord>, RotationError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut history = Vec::new();
    for row in reader.deserialize::<HistoryRow>() {
        let row = row?;
        history.push(HistoryRecord {
            date: row.date,
            moderator: row.moderator,
        });
    }
    // stable sort keeps same-date insertion order
    history.sort_by_key(|record| record.date);
    Ok(history)
}

pub fn history_to_csv(history: &[HistoryRecord]) -> Result<String, RotationError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in history {
        writer.serialize(HistoryRow {
            date: record.date,
            moderator: record.moderator.clone(),
        })?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, RotationError> {
    let bytes = writer
        .into_inner()
        .map_err(|err| RotationError::Storage(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| RotationError::Storage(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_parses_sorted_and_skips_blank_rows() {
        let roster = roster_from_csv("Moderator\nBob\n\nAnn\n").unwrap();
        assert_eq!(roster, vec!["Ann".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn roster_csv_carries_the_header() {
        let out = roster_to_csv(&["Ann".to_string(), "Bob".to_string()]).unwrap();
        assert_eq!(out, "Moderator\nAnn\nBob\n");
    }

    #[test]
    fn history_parses_iso_dates_in_date_order() {
        let content = "Date,Moderator\n2026-08-05,Bob\n2026-08-03,Ann\n";
        let history = history_from_csv(content).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].moderator, "Ann");
        assert_eq!(history[1].date, "2026-08-05".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn history_csv_uses_the_original_column_names() {
        let history = vec![HistoryRecord {
            date: "2026-08-03".parse().unwrap(),
            moderator: "Ann".to_string(),
        }];
        let out = history_to_csv(&history).unwrap();
        assert_eq!(out, "Date,Moderator\n2026-08-03,Ann\n");
    }

    #[test]
    fn malformed_date_is_a_csv_error() {
        let err = history_from_csv("Date,Moderator\nnot-a-date,Ann\n").unwrap_err();
        assert!(matches!(err, RotationError::Csv(_)));
    }
}
