use std::env;

use crate::config::AppConfig;
use crate::error::RotationError;
use crate::store::{AzureBlobClient, BlobStorage, LocalBlobStore};

pub fn load_config() -> AppConfig {
    let defaults = AppConfig::default();
    AppConfig {
        port: env_parse("NEXT_MOD_PORT", defaults.port),
        storage_provider: env_or("NEXT_MOD_STORAGE", defaults.storage_provider),
        account_url: env_or("NEXT_MOD_ACCOUNT_URL", defaults.account_url),
        container: env_or("NEXT_MOD_CONTAINER", defaults.container),
        sas_token: env_opt("NEXT_MOD_SAS_TOKEN"),
        roster_blob: env_or("NEXT_MOD_ROSTER_BLOB", defaults.roster_blob),
        history_blob: env_or("NEXT_MOD_HISTORY_BLOB", defaults.history_blob),
        local_dir: env_or("NEXT_MOD_DATA_DIR", defaults.local_dir),
    }
}

pub fn build_storage(cfg: &AppConfig) -> Result<Box<dyn BlobStorage>, RotationError> {
    match cfg.storage_provider.as_str() {
        "azure" => {
            if cfg.account_url.is_empty() {
                return Err(RotationError::InvalidInput(
                    "azure storage selected but no NEXT_MOD_ACCOUNT_URL set".to_string(),
                ));
            }
            Ok(Box::new(AzureBlobClient::new(
                &cfg.account_url,
                &cfg.container,
                cfg.sas_token.clone(),
            )))
        }
        "local" => Ok(Box::new(LocalBlobStore::new(&cfg.local_dir))),
        other => Err(RotationError::InvalidInput(format!(
            "unknown storage provider: {}",
            other
        ))),
    }
}

fn env_or(key: &str, fallback: String) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => fallback,
    }
}

fn env_opt(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    match env::var(key) {
        Ok(value) => value.parse::<T>().unwrap_or(fallback),
        Err(_) => fallback,
    }
}
