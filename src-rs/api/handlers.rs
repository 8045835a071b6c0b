use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::rotation::schedule::gate;
use crate::rotation::types::{GateStatus, RosterOp};
use crate::rotation_app::RotationApp;

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub date: Option<NaiveDate>,
    pub available: Option<Vec<String>>,
    pub save: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub success: bool,
    pub moderator: Option<String>,
    pub date: Option<NaiveDate>,
    pub saved: bool,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RosterEditRequest {
    pub action: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LeaderboardQuery {
    pub range: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "version": "0.1.0"}))
}

pub async fn handle_status(
    State(app): State<Arc<Mutex<RotationApp>>>,
) -> Json<serde_json::Value> {
    let app = match app.lock() {
        Ok(app) => app,
        Err(_) => {
            return Json(json!({"error": "app lock error"}));
        }
    };

    let today = Local::now().date_naive();
    let last = app.last_selection();
    let last_moderator = last.map(|record| record.moderator.clone());
    let last_date = last.map(|record| record.date);

    match app.status(today) {
        GateStatus::Open { default_next } => Json(json!({
            "open": true,
            "today": today,
            "default_next": default_next,
            "last_moderator": last_moderator,
            "last_date": last_date,
        })),
        GateStatus::Closed { reason } => Json(json!({
            "open": false,
            "today": today,
            "reason": reason,
            "last_moderator": last_moderator,
            "last_date": last_date,
        })),
    }
}

pub async fn handle_roster(
    State(app): State<Arc<Mutex<RotationApp>>>,
) -> Json<serde_json::Value> {
    let app = match app.lock() {
        Ok(app) => app,
        Err(_) => {
            return Json(json!({"error": "app lock error"}));
        }
    };
    Json(json!({"moderators": app.roster()}))
}

pub async fn handle_edit_roster(
    State(app): State<Arc<Mutex<RotationApp>>>,
    Json(req): Json<RosterEditRequest>,
) -> Json<serde_json::Value> {
    let op = match req.action.as_str() {
        "add" => RosterOp::Add,
        "remove" => RosterOp::Remove,
        other => {
            return Json(json!({"error": format!("unknown action: {}", other)}));
        }
    };

    let result = tokio::task::spawn_blocking(move || {
        let mut app = app.lock().map_err(|_| "app lock error".to_string())?;
        app.edit_roster(op, &req.name)
            .map(|roster| roster.to_vec())
            .map_err(|err| err.to_string())
    })
    .await;

    match result {
        Ok(Ok(roster)) => Json(json!({"moderators": roster})),
        Ok(Err(err)) => Json(json!({"error": err})),
        Err(err) => Json(json!({"error": err.to_string()})),
    }
}

pub async fn handle_select(
    State(app): State<Arc<Mutex<RotationApp>>>,
    Json(req): Json<SelectRequest>,
) -> Json<SelectResponse> {
    let result = tokio::task::spawn_blocking(move || {
        let mut app = app.lock().map_err(|_| "app lock error".to_string())?;
        let today = Local::now().date_naive();
        let date = match req.date {
            Some(date) => date,
            None => match gate(today) {
                GateStatus::Open { default_next } => default_next,
                GateStatus::Closed { reason } => return Err(reason),
            },
        };
        let available = match req.available {
            Some(available) => available,
            None => app.roster().to_vec(),
        };
        let save = req.save.unwrap_or(true);
        app.select_and_record(&available, date, save, today)
            .map_err(|err| err.to_string())
    })
    .await;

    match result {
        Ok(Ok(selection)) => Json(SelectResponse {
            success: true,
            moderator: Some(selection.moderator),
            date: Some(selection.date),
            saved: selection.saved,
            error: None,
        }),
        Ok(Err(err)) => Json(SelectResponse {
            success: false,
            moderator: None,
            date: None,
            saved: false,
            error: Some(err),
        }),
        Err(err) => Json(SelectResponse {
            success: false,
            moderator: None,
            date: None,
            saved: false,
            error: Some(err.to_string()),
        }),
    }
}

pub async fn handle_history(
    State(app): State<Arc<Mutex<RotationApp>>>,
    Query(query): Query<HistoryQuery>,
) -> Json<serde_json::Value> {
    let app = match app.lock() {
        Ok(app) => app,
        Err(_) => {
            return Json(json!({"error": "app lock error"}));
        }
    };
    let limit = query.limit.unwrap_or(8);
    let today = Local::now().date_naive();
    Json(json!({"records": app.recent(today, limit)}))
}

pub async fn handle_leaderboard(
    State(app): State<Arc<Mutex<RotationApp>>>,
    Query(query): Query<LeaderboardQuery>,
) -> Json<serde_json::Value> {
    let app = match app.lock() {
        Ok(app) => app,
        Err(_) => {
            return Json(json!({"error": "app lock error"}));
        }
    };
    let rows = match (query.start, query.end) {
        (Some(start), Some(end)) => app.range_leaderboard(start, end),
        _ => match query.range.as_deref() {
            Some("all") => app.all_time_leaderboard(),
            _ => app.month_leaderboard(Local::now().date_naive()),
        },
    };
    Json(json!({"rows": rows}))
}
