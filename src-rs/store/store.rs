use log::info;

use crate::error::RotationError;
use crate::rotation::types::HistoryRecord;

use super::blob::BlobStorage;
use super::tables;

/// The two persisted tables behind their blob names. Every mutation path
/// re-uploads the affected table in full; there is no partial write.
pub struct RotationStore {
    storage: Box<dyn BlobStorage>,
    roster_blob: String,
    history_blob: String,
}

impl RotationStore {
    pub fn new(storage: Box<dyn BlobStorage>, roster_blob: &str, history_blob: &str) -> Self {
        Self {
            storage,
            roster_blob: roster_blob.to_string(),
            history_blob: history_blob.to_string(),
        }
    }

    pub fn load_roster(&self) -> Result<Vec<String>, RotationError> {
        let content = self.storage.download(&self.roster_blob)?;
        let roster = tables::roster_from_csv(&content)?;
        info!("loaded {} moderators from {}", roster.len(), self.roster_blob);
        Ok(roster)
    }

    pub fn save_roster(&self, roster: &[String]) -> Result<(), RotationError> {
        let content = tables::roster_to_csv(roster)?;
        self.storage.upload(&self.roster_blob, &content)?;
        info!("saved {} moderators to {}", roster.len(), self.roster_blob);
        Ok(())
    }

    pub fn load_history(&self) -> Result<Vec<HistoryRecord>, RotationError> {
        let content = self.storage.download(&self.history_blob)?;
        let history = tables::history_from_csv(&content)?;
        info!(
            "loaded {} history records from {}",
            history.len(),
            self.history_blob
        );
        Ok(history)
    }

    pub fn save_history(&self, history: &[HistoryRecord]) -> Result<(), RotationError> {
        let content = tables::history_to_csv(history)?;
        self.storage.upload(&self.history_blob, &content)?;
        info!(
            "saved {} history records to {}",
            history.len(),
            self.history_blob
        );
        Ok(())
    }
}
