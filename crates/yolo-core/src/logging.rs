//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "YOLOPAY_LOG";

/// Filter used when `YOLOPAY_LOG` is unset: info for every workspace crate,
/// warn for dependencies
pub const DEFAULT_LOG_FILTER: &str =
    "yolo_pay=info,yolo_core=info,yolo_platform=info,yolo_app=info,yolo_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/yolo-pay/logs/`
/// Log level is controlled by `YOLOPAY_LOG` environment variable.
///
/// # Examples
/// ```bash
/// YOLOPAY_LOG=debug cargo run
/// YOLOPAY_LOG=yolo_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "yolopay.log");

    // The terminal belongs to the TUI, so everything goes to the file
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| crate::error::Error::logging(e.to_string()))?;

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("YOLO Pay starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("yolo-pay").join("logs"))
}
