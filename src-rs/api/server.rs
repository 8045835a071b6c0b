use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;

use crate::api::handlers::{
    handle_edit_roster, handle_health, handle_history, handle_leaderboard, handle_roster,
    handle_select, handle_status,
};
use crate::rotation_app::RotationApp;

pub struct DashboardServer {
    pub port: u16,
    pub app: Arc<Mutex<RotationApp>>,
}

impl DashboardServer {
    pub fn new(port: u16, app: Arc<Mutex<RotationApp>>) -> Self {
        Self { port, app }
    }

    pub async fn start(&self) -> Result<(), String> {
        let router = Router::new()
            .route("/health", get(handle_health))
            .route("/status", get(handle_status))
            .route("/roster", get(handle_roster).post(handle_edit_roster))
            .route("/select", post(handle_select))
            .route("/history", get(handle_history))
            .route("/leaderboard", get(handle_leaderboard))
            .with_state(self.app.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        axum::Server::bind(&addr)
            .serve(router.into_make_service())
            .await
            .map_err(|err| err.to_string())
    }
}
