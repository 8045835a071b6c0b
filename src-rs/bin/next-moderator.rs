use std::sync::{Arc, Mutex};

use dotenv::dotenv;
use log::{error, info};

use next_moderator_rs::api::server::DashboardServer;
use next_moderator_rs::helpers::{build_storage, load_config};
use next_moderator_rs::store::RotationStore;
use next_moderator_rs::RotationApp;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = load_config();
    let storage = match build_storage(&config) {
        Ok(storage) => storage,
        Err(err) => {
            error!("storage init failed: {}", err);
            return;
        }
    };
    let store = RotationStore::new(storage, &config.roster_blob, &config.history_blob);

    // blocking storage reads stay off the runtime threads
    let app = match tokio::task::spawn_blocking(move || RotationApp::new(store)).await {
        Ok(Ok(app)) => app,
        Ok(Err(err)) => {
            error!("failed to load rotation data: {}", err);
            return;
        }
        Err(err) => {
            error!("startup task failed: {}", err);
            return;
        }
    };

    let server = DashboardServer::new(config.port, Arc::new(Mutex::new(app)));
    info!("next-moderator listening on :{}", config.port);
    if let Err(err) = server.start().await {
        error!("server error: {}", err);
    }
}
