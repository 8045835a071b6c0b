use std::env;

use crate::models::CLIConfig;

const DEFAULT_URL: &str = "http://localhost:8080";
const DEFAULT_HISTORY_LIMIT: usize = 8;

pub fn parse_config() -> CLIConfig {
    let mut cfg = CLIConfig {
        base_url: env_or("NEXT_MOD_DASHBOARD_URL", DEFAULT_URL.to_string()),
        history_limit: env_parse("NEXT_MOD_DASHBOARD_LIMIT", DEFAULT_HISTORY_LIMIT),
        save: true,
        date: None,
    };

    let args: Vec<String> = env::args().collect();
    let mut idx = 1;
    while idx < args.len() {
        match args[idx].as_str() {
            "--base" => {
                if let Some(value) = args.get(idx + 1) {
                    cfg.base_url = value.clone();
                    idx += 1;
                }
            }
            "--limit" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(parsed) = value.parse::<usize>() {
                        cfg.history_limit = parsed;
                    }
                    idx += 1;
                }
            }
            "--date" => {
                if let Some(value) = args.get(idx + 1) {
                    cfg.date = Some(value.clone());
                    idx += 1;
                }
            }
            "--no-save" => {
                cfg.save = false;
            }
            _ => {}
        }
        idx += 1;
    }

    cfg
}

fn env_or(key: &str, fallback: String) -> String {
    env::var(key).unwrap_or(fallback)
}

fn env_parse<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    match env::var(key) {
        Ok(value) => value.parse::<T>().unwrap_or(fallback),
        Err(_) => fallback,
    }
}
