use chrono::{Datelike, NaiveDate};
use log::info;
use rand::thread_rng;

use crate::error::RotationError;
use crate::result::Selection;
use crate::rotation::history::{last_record, recent_records, record_selection};
use crate::rotation::leaderboard::compute_leaderboard;
use crate::rotation::picker::pick_next;
use crate::rotation::roster::edit_roster;
use crate::rotation::schedule::{default_next_date, gate};
use crate::rotation::types::{GateStatus, HistoryRecord, LeaderboardRow, RosterOp};
use crate::store::RotationStore;

/// Owns the roster and history for the session. Both tables are loaded once
/// at startup and written back through the store after every mutating
/// operation.
pub struct RotationApp {
    store: RotationStore,
    roster: Vec<String>,
    history: Vec<HistoryRecord>,
}

impl RotationApp {
    pub fn new(store: RotationStore) -> Result<Self, RotationError> {
        let roster = store.load_roster()?;
        let history = store.load_history()?;
        Ok(Self {
            store,
            roster,
            history,
        })
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    pub fn status(&self, today: NaiveDate) -> GateStatus {
        gate(today)
    }

    pub fn last_selection(&self) -> Option<&HistoryRecord> {
        last_record(&self.history)
    }

    /// Pick the next moderator from `available` and, when `save` is set,
    /// fold the result into the history and persist it. The previous
    /// moderator is the most recent history record.
    pub fn select_and_record(
        &mut self,
        available: &[String],
        date: NaiveDate,
        save: bool,
        today: NaiveDate,
    ) -> Result<Selection, RotationError> {
        if let GateStatus::Closed { reason } = gate(today) {
            return Err(RotationError::InvalidInput(reason));
        }

        let previous = last_record(&self.history).map(|record| record.moderator.clone());
        let moderator = pick_next(&mut thread_rng(), previous.as_deref(), available)?;

        if save {
            let updated = record_selection(&self.history, &moderator, date);
            self.store.save_history(&updated)?;
            self.history = updated;
        }
        info!("selected {} for {} (saved: {})", moderator, date, save);

        Ok(Selection {
            moderator,
            date,
            saved: save,
        })
    }

    pub fn edit_roster(&mut self, op: RosterOp, name: &str) -> Result<&[String], RotationError> {
        let updated = edit_roster(&self.roster, op, name)?;
        self.store.save_roster(&updated)?;
        self.roster = updated;
        Ok(&self.roster)
    }

    /// The "Previous Moderators" table: records dated before the default
    /// next meeting, newest first.
    pub fn recent(&self, today: NaiveDate, limit: usize) -> Vec<HistoryRecord> {
        recent_records(&self.history, default_next_date(today), limit)
    }

    /// Current month's board, covering the first of the month up to the
    /// default next meeting date.
    pub fn month_leaderboard(&self, today: NaiveDate) -> Vec<LeaderboardRow> {
        let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
        compute_leaderboard(&self.history, start, default_next_date(today))
    }

    /// All-time board over settled meetings; the newest record is the still
    /// pending one and stays out of the count.
    pub fn all_time_leaderboard(&self) -> Vec<LeaderboardRow> {
        let settled = &self.history[..self.history.len().saturating_sub(1)];
        compute_leaderboard(settled, NaiveDate::MIN, NaiveDate::MAX)
    }

    pub fn range_leaderboard(&self, start: NaiveDate, end: NaiveDate) -> Vec<LeaderboardRow> {
        compute_leaderboard(&self.history, start, end)
    }
}
