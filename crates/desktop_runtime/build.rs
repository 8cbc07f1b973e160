use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    viewport_percent: i32,
    max_width: i32,
    max_height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellConfigFile {
    schema_version: u32,
    lock_password: String,
    taskbar_height_px: i32,
    restart_delay_ms: u32,
    clock_tick_ms: u32,
    battery_drift_interval_ms: u32,
    window_defaults: WindowDefaults,
}

fn validate(config: &ShellConfigFile, path: &str) {
    if config.schema_version != 1 {
        panic!(
            "shell config schema mismatch in {path}: expected 1 found {}",
            config.schema_version
        );
    }
    if config.lock_password.trim().is_empty() {
        panic!("shell config in {path} must set a non-empty lock_password");
    }
    if config.taskbar_height_px <= 0 {
        panic!("shell config in {path}: taskbar_height_px must be positive");
    }
    let defaults = &config.window_defaults;
    if !(1..=100).contains(&defaults.viewport_percent) {
        panic!(
            "shell config in {path}: viewport_percent must be within 1..=100, found {}",
            defaults.viewport_percent
        );
    }
    if defaults.max_width <= 0 || defaults.max_height <= 0 {
        panic!("shell config in {path}: window size caps must be positive");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("shell.config.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: ShellConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path.display().to_string());

    let json = serde_json::to_string_pretty(&config).expect("serialize shell config");
    let generated = format!(
        "/// Build-time generated shell configuration JSON.\n\
pub const SHELL_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
