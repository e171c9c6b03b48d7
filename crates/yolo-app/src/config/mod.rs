//! Configuration file parsing for YOLO Pay
//!
//! Supports:
//! - `<config_dir>/yolo-pay/config.toml` - Global settings
//! - `--config <path>` - Explicit settings file

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, CONFIG_FILENAME};
pub use types::*;
