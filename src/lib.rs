//! YOLO Pay Library
//!
//! A terminal rendition of the YOLO Pay mock payment screen.

use std::path::PathBuf;

use yolo_app::config::{self, Settings};
use yolo_app::state::AppState;
use yolo_core::prelude::*;
use yolo_core::Route;

// Re-export workspace crates
pub use yolo_app as app;
pub use yolo_core as core;
pub use yolo_platform as platform;
pub use yolo_tui as tui;

/// Startup options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Explicit config file; defaults to the platform config dir
    pub config_path: Option<PathBuf>,
    /// Start frozen regardless of config
    pub frozen: bool,
    /// Start route, overriding config
    pub route: Option<Route>,
}

impl LaunchOptions {
    /// Config file to read, if one can be located
    pub fn resolved_config_path(&self) -> Option<PathBuf> {
        self.config_path.clone().or_else(config::default_config_path)
    }

    /// Load settings and apply command line overrides
    pub fn load_settings(&self) -> Settings {
        let mut settings = match self.resolved_config_path() {
            Some(path) => config::load_settings(&path),
            None => {
                warn!("No config directory available, using defaults");
                Settings::default()
            }
        };
        self.apply(&mut settings);
        settings
    }

    /// Apply command line overrides on top of loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if self.frozen {
            settings.behavior.start_frozen = true;
        }
        if let Some(route) = self.route {
            settings.behavior.start_route = route;
        }
    }
}

/// Main application entry point
pub async fn run(options: &LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::report(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    yolo_core::logging::init()?;

    let settings = options.load_settings();
    let result = yolo_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    result
}

/// Print a JSON snapshot of the screen instead of opening the TUI
pub fn run_headless(options: &LaunchOptions) -> Result<()> {
    yolo_core::logging::init()?;

    let state = AppState::new(options.load_settings());
    let json = yolo_app::headless::snapshot_json(&state)?;
    println!("{json}");

    Ok(())
}

/// Write a default config file, returning where it went
pub fn init_config(options: &LaunchOptions) -> Result<PathBuf> {
    let path = options
        .resolved_config_path()
        .ok_or_else(|| Error::config("No config directory available"))?;
    config::init_config_file(&path)?;
    Ok(path)
}
