//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use yolo_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn home(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f015}", // nf-fa-home
            IconMode::Unicode => "\u{2302}",   // ⌂
        }
    }

    pub fn card(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f09d}", // nf-fa-credit_card
            IconMode::Unicode => "\u{25ad}",   // ▭
        }
    }

    pub fn ginie(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0d0}", // nf-fa-magic
            IconMode::Unicode => "\u{2726}",   // ✦
        }
    }

    pub fn copy(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c5}", // nf-fa-copy
            IconMode::Unicode => "\u{29c9}",   // ⧉
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn snowflake(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f2dc}", // nf-fa-snowflake_o
            IconMode::Unicode => "\u{2744}",   // ❄
        }
    }

    /// Icon for a bottom navigation tab id
    pub fn nav(&self, tab_id: &str) -> &'static str {
        match tab_id {
            "home" => self.home(),
            "ginie" => self.ginie(),
            _ => self.card(),
        }
    }
}
