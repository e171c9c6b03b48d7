//! Configuration types

use serde::{Deserialize, Serialize};
use yolo_core::Route;
use yolo_platform::BackendPreference;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub card: CardSettings,

    #[serde(default)]
    pub clipboard: ClipboardSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Start with the card frozen
    #[serde(default)]
    pub start_frozen: bool,

    /// Route shown on startup
    #[serde(default)]
    pub start_route: Route,
}

/// Card settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CardSettings {
    /// Fixed holder name; empty means generate one
    #[serde(default)]
    pub holder_name: String,
}

impl CardSettings {
    /// The configured holder name, if any
    pub fn holder_override(&self) -> Option<String> {
        let name = self.holder_name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

/// Clipboard settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClipboardSettings {
    /// "auto", "osc52", "external" or "none"
    #[serde(default)]
    pub backend: BackendPreference,
}

/// Icon rendering mode.
///
/// Controls whether the UI uses Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Show the phone-style status bar at the top
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_status_bar: true,
        }
    }
}

fn default_true() -> bool {
    true
}
