pub mod history;
pub mod leaderboard;
pub mod picker;
pub mod roster;
pub mod schedule;
pub mod types;

pub use history::{last_record, recent_records, record_selection};
pub use leaderboard::compute_leaderboard;
pub use picker::pick_next;
pub use roster::edit_roster;
pub use schedule::{default_next_date, gate};
pub use types::{GateStatus, HistoryRecord, LeaderboardRow, RosterOp};
