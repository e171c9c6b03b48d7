//! Bottom navigation shell
//!
//! The tab bar is stateless: which tab is highlighted is derived from the
//! current path, and selecting a tab goes through a [`Navigator`].

use serde::Serialize;
use yolo_core::prelude::*;
use yolo_core::Route;

/// Routing capability used by the navigation shell
pub trait Navigator {
    fn current_path(&self) -> &str;
    fn navigate_to(&mut self, path: &str) -> Result<()>;
}

/// In-process router holding the current route
#[derive(Debug, Clone, Default)]
pub struct RouterState {
    route: Route,
}

impl RouterState {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn route(&self) -> Route {
        self.route
    }
}

impl Navigator for RouterState {
    fn current_path(&self) -> &str {
        self.route.path()
    }

    fn navigate_to(&mut self, path: &str) -> Result<()> {
        self.route = Route::from_path(path)?;
        Ok(())
    }
}

/// One tab of the bottom navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    pub id: &'static str,
    pub label: &'static str,
    pub route: Route,
}

/// Tabs in display order
pub const NAV_TABS: [NavTab; 3] = [
    NavTab {
        id: "home",
        label: "home",
        route: Route::Home,
    },
    NavTab {
        id: "yolo-pay",
        label: "yolo pay",
        route: Route::Root,
    },
    NavTab {
        id: "ginie",
        label: "ginie",
        route: Route::Ginie,
    },
];

impl NavTab {
    pub fn path(&self) -> &'static str {
        self.route.path()
    }

    /// A tab is active iff the current path equals its path
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path() == current_path
    }
}

/// Index of the tab whose path matches, if any
pub fn active_tab_index(current_path: &str) -> Option<usize> {
    NAV_TABS.iter().position(|tab| tab.is_active(current_path))
}

/// Tab after the active one, wrapping. With no active tab, the first tab.
pub fn next_tab(current_path: &str) -> &'static NavTab {
    let index = match active_tab_index(current_path) {
        Some(i) => (i + 1) % NAV_TABS.len(),
        None => 0,
    };
    &NAV_TABS[index]
}

/// Tab before the active one, wrapping. With no active tab, the first tab.
pub fn prev_tab(current_path: &str) -> &'static NavTab {
    let index = match active_tab_index(current_path) {
        Some(0) => NAV_TABS.len() - 1,
        Some(i) => i - 1,
        None => 0,
    };
    &NAV_TABS[index]
}

/// Serializable view of one tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    NAV_TABS
        .iter()
        .map(|tab| NavItem {
            label: tab.label,
            path: tab.path(),
            active: tab.is_active(current_path),
        })
        .collect()
}
