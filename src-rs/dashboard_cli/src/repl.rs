use std::io;

use crate::client::HTTPClient;
use crate::models::{CLIConfig, SelectRequest};
use crate::render;

pub struct REPL {
    pub config: CLIConfig,
    pub client: HTTPClient,
    pub available: Option<Vec<String>>,
}

impl REPL {
    pub fn new(config: CLIConfig, client: HTTPClient) -> Self {
        Self {
            config,
            client,
            available: None,
        }
    }

    pub fn run(&mut self) {
        render::banner(&self.config);
        self.show_status();
        loop {
            render::prompt();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                break;
            }
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('/') {
                if self.handle_command(&line) {
                    break;
                }
                continue;
            }
            render::info("type /select to draw the next moderator, /help for commands");
        }
    }

    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").trim_start_matches('/');
        let rest = parts.next().unwrap_or("").trim();
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "status" => self.show_status(),
            "select" => self.select(),
            "roster" => match self.client.roster() {
                Ok(names) => render::roster(&names),
                Err(err) => render::error(&err),
            },
            "add" => {
                if rest.is_empty() {
                    render::error("usage: /add <name>");
                } else {
                    match self.client.edit_roster("add", rest) {
                        Ok(names) => render::roster(&names),
                        Err(err) => render::error(&err),
                    }
                }
            }
            "remove" => {
                if rest.is_empty() {
                    render::error("usage: /remove <name>");
                } else {
                    match self.client.edit_roster("remove", rest) {
                        Ok(names) => render::roster(&names),
                        Err(err) => render::error(&err),
                    }
                }
            }
            "history" => {
                let limit = rest.parse::<usize>().unwrap_or(self.config.history_limit);
                match self.client.history(limit) {
                    Ok(entries) => render::history(&entries),
                    Err(err) => render::error(&err),
                }
            }
            "board" => {
                let range = if rest == "all" { "all" } else { "month" };
                let title = if rest == "all" {
                    "All Time Leaderboard"
                } else {
                    "This Month's Leaderboard"
                };
                match self.client.leaderboard(range) {
                    Ok(rows) => render::board(title, &rows),
                    Err(err) => render::error(&err),
                }
            }
            "date" => {
                if rest.is_empty() {
                    render::config(&self.config);
                } else if rest == "clear" {
                    self.config.date = None;
                    render::info("date override cleared");
                } else {
                    self.config.date = Some(rest.to_string());
                    render::info("next stand-up date updated");
                }
            }
            "available" => {
                if rest.is_empty() || rest == "all" {
                    self.available = None;
                    render::info("everyone is available");
                } else {
                    let names: Vec<String> = rest
                        .split(',')
                        .map(|name| name.trim().to_string())
                        .filter(|name| !name.is_empty())
                        .collect();
                    render::info(&format!("{} available", names.len()));
                    self.available = Some(names);
                }
            }
            "save" => {
                if rest.is_empty() {
                    self.config.save = !self.config.save;
                } else if let Some(flag) = parse_on_off(rest) {
                    self.config.save = flag;
                } else {
                    render::error("invalid save flag");
                    return false;
                }
                render::info(&format!("save results: {}", self.config.save));
            }
            "config" => render::config(&self.config),
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    fn select(&mut self) {
        let req = SelectRequest {
            date: self.config.date.clone(),
            available: self.available.clone(),
            save: Some(self.config.save),
        };
        match self.client.select(req) {
            Ok(resp) => {
                if let Some(err) = &resp.error {
                    render::error(err);
                    return;
                }
                render::selection(&resp);
                self.show_dashboard();
            }
            Err(err) => render::error(&err),
        }
    }

    fn show_status(&self) {
        match self.client.status() {
            Ok(info) => render::status(&info),
            Err(err) => render::error(&err),
        }
    }

    fn show_dashboard(&self) {
        println!();
        match self.client.leaderboard("month") {
            Ok(rows) => render::board("This Month's Leaderboard", &rows),
            Err(err) => render::error(&err),
        }
        match self.client.history(self.config.history_limit) {
            Ok(entries) => render::history(&entries),
            Err(err) => render::error(&err),
        }
        match self.client.leaderboard("all") {
            Ok(rows) => render::board("All Time Leaderboard", &rows),
            Err(err) => render::error(&err),
        }
    }
}

fn parse_on_off(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
