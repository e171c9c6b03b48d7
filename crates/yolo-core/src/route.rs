//! Route table
//!
//! Every route renders the payment screen; the bottom navigation only
//! reflects and changes which path is current.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A path the payment screen can be shown under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    /// `/` - default route, highlighted as "yolo pay"
    #[default]
    Root,
    /// `/home`
    Home,
    /// `/yolo-pay` - reachable by path only, no tab points at it
    YoloPay,
    /// `/ginie`
    Ginie,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Root, Route::Home, Route::YoloPay, Route::Ginie];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Home => "/home",
            Route::YoloPay => "/yolo-pay",
            Route::Ginie => "/ginie",
        }
    }

    /// Resolve a path to a route
    pub fn from_path(path: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| Error::unknown_route(path))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl TryFrom<String> for Route {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_path(&value)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path().to_string()
    }
}
