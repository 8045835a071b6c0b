use chrono::NaiveDate;

use next_moderator_rs::error::RotationError;
use next_moderator_rs::rotation::types::{HistoryRecord, RosterOp};
use next_moderator_rs::store::{LocalBlobStore, RotationStore};
use next_moderator_rs::RotationApp;

fn store_in(dir: &std::path::Path) -> RotationStore {
    RotationStore::new(
        Box::new(LocalBlobStore::new(dir)),
        "moderators.csv",
        "moderator_history.csv",
    )
}

fn date(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

#[test]
fn full_session_against_the_local_store() {
    let dir = tempfile::tempdir().unwrap();
    let seed = store_in(dir.path());
    seed.save_roster(&["Ann", "Bob", "Cleo"].map(String::from))
        .unwrap();
    seed.save_history(&[HistoryRecord {
        date: date("2026-08-03"),
        moderator: "Ann".to_string(),
    }])
    .unwrap();

    let mut app = RotationApp::new(store_in(dir.path())).unwrap();
    assert_eq!(app.roster(), ["Ann", "Bob", "Cleo"]);
    assert_eq!(app.last_selection().unwrap().moderator, "Ann");

    let monday = date("2026-08-03");
    let wednesday = date("2026-08-05");
    let available = app.roster().to_vec();

    // Ann moderated on Monday, so Wednesday goes to somebody else.
    let selection = app
        .select_and_record(&available, wednesday, true, monday)
        .unwrap();
    assert_ne!(selection.moderator, "Ann");
    assert!(selection.saved);
    assert_eq!(app.history().len(), 2);

    // the write went through to the store
    let persisted = store_in(dir.path()).load_history().unwrap();
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[1].date, wednesday);

    // re-running for the same date replaces the pending record
    app.select_and_record(&available, wednesday, true, monday)
        .unwrap();
    assert_eq!(app.history().len(), 2);

    // save = false leaves history and store untouched
    app.select_and_record(&available, wednesday, false, monday)
        .unwrap();
    assert_eq!(app.history().len(), 2);
    assert_eq!(store_in(dir.path()).load_history().unwrap().len(), 2);
}

#[test]
fn roster_edits_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let seed = store_in(dir.path());
    seed.save_roster(&["Ann", "Bob"].map(String::from)).unwrap();
    seed.save_history(&[]).unwrap();

    let mut app = RotationApp::new(store_in(dir.path())).unwrap();

    app.edit_roster(RosterOp::Add, "zed").unwrap();
    assert_eq!(app.roster(), ["Ann", "Bob", "Zed"]);
    assert_eq!(
        store_in(dir.path()).load_roster().unwrap(),
        ["Ann", "Bob", "Zed"]
    );

    app.edit_roster(RosterOp::Remove, "Bob").unwrap();
    assert_eq!(app.roster(), ["Ann", "Zed"]);

    let err = app.edit_roster(RosterOp::Remove, "Cleo").unwrap_err();
    assert!(matches!(err, RotationError::NotFound(_)));
    // the failed edit wrote nothing
    assert_eq!(store_in(dir.path()).load_roster().unwrap(), ["Ann", "Zed"]);
}

#[test]
fn weekend_gate_blocks_selection() {
    let dir = tempfile::tempdir().unwrap();
    let seed = store_in(dir.path());
    seed.save_roster(&["Ann", "Bob"].map(String::from)).unwrap();
    seed.save_history(&[]).unwrap();

    let mut app = RotationApp::new(store_in(dir.path())).unwrap();
    let saturday = date("2026-08-08");
    let err = app
        .select_and_record(&["Ann".to_string(), "Bob".to_string()], date("2026-08-10"), true, saturday)
        .unwrap_err();
    assert!(matches!(err, RotationError::InvalidInput(_)));
    assert!(app.history().is_empty());
}

#[test]
fn leaderboards_follow_the_dashboard_rules() {
    let dir = tempfile::tempdir().unwrap();
    let seed = store_in(dir.path());
    seed.save_roster(&["Ann", "Bob"].map(String::from)).unwrap();
    seed.save_history(&[
        HistoryRecord {
            date: date("2026-07-31"),
            moderator: "Bob".to_string(),
        },
        HistoryRecord {
            date: date("2026-08-03"),
            moderator: "Ann".to_string(),
        },
        HistoryRecord {
            date: date("2026-08-05"),
            moderator: "Ann".to_string(),
        },
    ])
    .unwrap();

    let app = RotationApp::new(store_in(dir.path())).unwrap();
    let wednesday = date("2026-08-05");

    // month board starts on the 1st; July's record stays out
    let month = app.month_leaderboard(wednesday);
    assert_eq!(month.len(), 1);
    assert_eq!(month[0].moderator, "Ann");
    assert_eq!(month[0].count, 2);
    assert!(month[0].leading);

    // all-time board excludes the newest (pending) record
    let all_time = app.all_time_leaderboard();
    assert_eq!(all_time.len(), 2);
    let ann = all_time.iter().find(|row| row.moderator == "Ann").unwrap();
    let bob = all_time.iter().find(|row| row.moderator == "Bob").unwrap();
    assert_eq!((ann.count, bob.count), (1, 1));
    assert!(ann.leading && bob.leading);

    // recent table: newest first, pending date excluded when it is ahead
    let recent = app.recent(date("2026-08-03"), 8);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].moderator, "Ann");
    assert_eq!(recent[1].moderator, "Bob");
}
