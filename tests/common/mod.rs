//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use habitdeck::api::{Frequency, Habit, HabitClient};
use habitdeck::config::ApiConfig;
use habitdeck::ui::app::App;
use habitdeck::worker::{ApiCommand, COMMAND_BUFFER};
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub fn habit(id: &str, title: &str, history_count: u32) -> Habit {
    Habit {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        frequency: Frequency::Daily,
        status: "active".to_string(),
        history_count,
        today_completions: 0,
        created_at: None,
        updated_at: None,
    }
}

/// Service JSON for a habit.
pub fn habit_json(id: &str, title: &str, history_count: u32) -> String {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": "",
        "frequency": "daily",
        "status": "active",
        "history_count": history_count,
        "today_completions": 0,
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z"
    })
    .to_string()
}

pub fn client_for(base_url: &str) -> HabitClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    HabitClient::new(&config).expect("client")
}

/// An `App` whose commands land in the returned receiver.
pub fn make_app() -> (App, mpsc::Receiver<ApiCommand>) {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    let mut app = App::new();
    app.set_command_sender(tx);
    (app, rx)
}

/// Drain every queued command.
pub fn drain(rx: &mut mpsc::Receiver<ApiCommand>) -> Vec<ApiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
