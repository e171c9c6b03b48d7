//! YOLO Pay - the mock payment screen in your terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use yolo_core::prelude::*;
use yolo_core::Route;
use yolo_pay::LaunchOptions;

/// YOLO Pay - the mock payment screen in your terminal
#[derive(Parser, Debug)]
#[command(name = "yolopay")]
#[command(about = "A terminal rendition of the YOLO Pay payment screen", long_about = None)]
struct Args {
    /// Path to config.toml (default: <config dir>/yolo-pay/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the card frozen
    #[arg(long)]
    frozen: bool,

    /// Start route: "/", "/home", "/yolo-pay" or "/ginie"
    #[arg(long, value_parser = parse_route)]
    route: Option<Route>,

    /// Print a JSON snapshot of the screen instead of opening the TUI
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn parse_route(path: &str) -> std::result::Result<Route, String> {
    Route::from_path(path).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let options = LaunchOptions {
        config_path: args.config,
        frozen: args.frozen,
        route: args.route,
    };

    if args.init_config {
        let path = yolo_pay::init_config(&options)?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    if args.headless {
        yolo_pay::run_headless(&options)
    } else {
        yolo_pay::run(&options).await
    }
}
