//! Session card provider
//!
//! Builds the card record once per session. The holder name comes from the
//! configured override when set, otherwise from the name generator, otherwise
//! from a fixed placeholder.

use std::sync::{Arc, OnceLock};

use yolo_core::prelude::*;
use yolo_core::CardRecord;
use yolo_platform::NameGenerator;

/// Holder name used when no name can be generated
pub const PLACEHOLDER_HOLDER_NAME: &str = "Card Holder";

/// Memoizes the session's [`CardRecord`]
pub struct SessionCardProvider {
    card: OnceLock<Arc<CardRecord>>,
    names: Arc<dyn NameGenerator>,
    holder_override: Option<String>,
}

impl SessionCardProvider {
    pub fn new(names: Arc<dyn NameGenerator>) -> Self {
        Self {
            card: OnceLock::new(),
            names,
            holder_override: None,
        }
    }

    /// Use a fixed holder name instead of generating one.
    ///
    /// Blank names are treated as unset.
    pub fn with_holder_override(mut self, name: Option<String>) -> Self {
        self.holder_override = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }

    /// The session's card, created on first call
    pub fn get_or_create_card(&self) -> Arc<CardRecord> {
        self.card
            .get_or_init(|| {
                let holder = self.resolve_holder_name();
                info!(holder = %holder, "Session card created");
                Arc::new(CardRecord::synthetic(holder))
            })
            .clone()
    }

    fn resolve_holder_name(&self) -> String {
        if let Some(name) = &self.holder_override {
            return name.clone();
        }

        match self.names.generate_display_name() {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                warn!(
                    "Name generator produced no name, using \"{}\"",
                    PLACEHOLDER_HOLDER_NAME
                );
                PLACEHOLDER_HOLDER_NAME.to_string()
            }
        }
    }
}

impl std::fmt::Debug for SessionCardProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCardProvider")
            .field("card", &self.card.get())
            .field("holder_override", &self.holder_override)
            .finish_non_exhaustive()
    }
}
