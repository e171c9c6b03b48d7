//! Settings file loading

use std::path::{Path, PathBuf};

use yolo_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "yolo-pay";

const DEFAULT_CONFIG: &str = r#"# YOLO Pay Configuration

[behavior]
start_frozen = false     # Start with the card frozen
start_route = "/"        # "/", "/home", "/yolo-pay" or "/ginie"

[card]
holder_name = ""         # Empty = generate a random name each session

[clipboard]
backend = "auto"         # "auto", "osc52", "external" or "none"

[ui]
icons = "unicode"        # "unicode" or "nerd_fonts"
show_status_bar = true
"#;

/// `<config_dir>/yolo-pay/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// A missing file gives defaults. An unreadable or invalid file is logged and
/// also gives defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists
///
/// Returns `true` if a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
