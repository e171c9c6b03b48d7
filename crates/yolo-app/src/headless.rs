//! Headless snapshot of the payment screen
//!
//! Used by `yolopay --headless` to print what the screen would show without
//! opening a terminal UI.

use serde::Serialize;
use yolo_core::prelude::*;
use yolo_core::Route;

use crate::navigation::{self, NavItem, Navigator};
use crate::presentation::PaymentView;
use crate::state::AppState;

/// Everything the screen shows for the current state
#[derive(Debug, Clone, Serialize)]
pub struct ScreenSnapshot {
    pub route: Route,
    pub frozen: bool,
    pub holder_name: String,
    pub view: PaymentView,
    pub nav: Vec<NavItem>,
}

pub fn snapshot(state: &AppState) -> ScreenSnapshot {
    ScreenSnapshot {
        route: state.route(),
        frozen: state.is_frozen(),
        holder_name: state.card().holder_name().to_string(),
        view: state.payment_view(),
        nav: navigation::nav_items(state.router.current_path()),
    }
}

/// Pretty JSON for [`snapshot`]
pub fn snapshot_json(state: &AppState) -> Result<String> {
    serde_json::to_string_pretty(&snapshot(state))
        .map_err(|e| Error::serialization("snapshot", e.to_string()))
}
