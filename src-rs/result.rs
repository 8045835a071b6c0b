use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a completed selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Selection {
    pub moderator: String,
    pub date: NaiveDate,
    pub saved: bool,
}
