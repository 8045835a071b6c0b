use std::io::{self, Write};

use crate::models::{BoardRow, CLIConfig, HistoryEntry, SelectResponse, StatusInfo};

pub fn banner(cfg: &CLIConfig) {
    println!("Next Moderator Dashboard");
    println!("API: {}", cfg.base_url);
    println!("Type /help for commands.");
}

pub fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                  Show commands");
    println!("  /exit | /quit          Exit");
    println!("  /status                Weekday gate and last moderator");
    println!("  /select                Draw the next moderator");
    println!("  /roster                List moderators");
    println!("  /add <name>            Add a moderator");
    println!("  /remove <name>         Remove a moderator");
    println!("  /history [n]           Recent moderators");
    println!("  /board [month|all]     Leaderboard");
    println!("  /date <iso>|clear      Override the next stand-up date");
    println!("  /available <a,b>|all   Restrict who can be drawn");
    println!("  /save [on|off]         Toggle saving results");
    println!("  /config                Show current settings");
}

pub fn status(info: &StatusInfo) {
    if info.open {
        println!("open (today {})", info.today);
        if let Some(next) = &info.default_next {
            println!("next stand-up: {}", next);
        }
    } else {
        println!(
            "closed (today {}): {}",
            info.today,
            info.reason.clone().unwrap_or_default()
        );
    }
    match (&info.last_moderator, &info.last_date) {
        (Some(moderator), Some(date)) => println!("last moderator: {} on {}", moderator, date),
        _ => println!("no moderator recorded yet"),
    }
}

pub fn selection(resp: &SelectResponse) {
    let moderator = resp.moderator.clone().unwrap_or_default();
    let date = resp.date.clone().unwrap_or_default();
    println!();
    println!("{} stand-up's moderator: {}", date, moderator);
    if !resp.saved {
        println!("(not saved)");
    }
}

pub fn roster(names: &[String]) {
    if names.is_empty() {
        println!("roster is empty");
        return;
    }
    for name in names {
        println!("  {}", name);
    }
}

pub fn history(entries: &[HistoryEntry]) {
    println!("Previous Moderators:");
    if entries.is_empty() {
        println!("  no records");
        return;
    }
    for entry in entries {
        println!("  {}  {}", entry.date, entry.moderator);
    }
}

pub fn board(title: &str, rows: &[BoardRow]) {
    println!("{}:", title);
    if rows.is_empty() {
        println!("  no records");
        return;
    }
    let width = rows.iter().map(|row| row.moderator.len()).max().unwrap_or(0);
    for row in rows {
        let bar = "#".repeat(row.count);
        let mark = if row.leading { " *" } else { "" };
        println!(
            "  {:width$}  {:>3}  {}{}",
            row.moderator,
            row.count,
            bar,
            mark,
            width = width
        );
    }
}

pub fn config(cfg: &CLIConfig) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
    println!("  history limit: {}", cfg.history_limit);
    println!("  save results: {}", cfg.save);
    println!(
        "  date override: {}",
        cfg.date.clone().unwrap_or_else(|| "(default)".to_string())
    );
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}
