use std::{fs, path::PathBuf, sync::Mutex};

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

pub const BIN_NAME: &str = "gym_pricing_cli";

/// A 30-day month starting on its first day: every quote covers the full month.
pub const FULL_JUNE: &str = "2025-06-01";

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated `GYM_PRICING_HOME`.
pub fn isolated_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Writes `config/config.json` under a fresh home and returns the home.
pub fn home_with_config(json: &str) -> PathBuf {
    let home = isolated_home();
    let config_dir = home.join("config");
    fs::create_dir_all(&config_dir).expect("create config dir");
    fs::write(config_dir.join("config.json"), json).expect("write config");
    home
}

/// Script-mode command pinned to `today` with its own config home.
pub fn script_command_at(home: &PathBuf, today: &str) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("GYM_PRICING_CLI_SCRIPT", "1")
        .env("GYM_PRICING_HOME", home)
        .env("GYM_PRICING_TODAY", today)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub fn script_command() -> Command {
    script_command_at(&isolated_home(), FULL_JUNE)
}
