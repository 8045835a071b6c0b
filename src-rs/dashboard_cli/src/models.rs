use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub base_url: String,
    pub history_limit: usize,
    pub save: bool,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusInfo {
    pub open: bool,
    pub today: String,
    pub default_next: Option<String>,
    pub reason: Option<String>,
    pub last_moderator: Option<String>,
    pub last_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SelectRequest {
    pub date: Option<String>,
    pub available: Option<Vec<String>>,
    pub save: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SelectResponse {
    pub success: bool,
    pub moderator: Option<String>,
    pub date: Option<String>,
    pub saved: bool,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub moderator: String,
}

#[derive(Debug, Deserialize)]
pub struct BoardRow {
    pub moderator: String,
    pub count: usize,
    pub leading: bool,
}
