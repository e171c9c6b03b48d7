//! Application state (Model in TEA pattern)

use std::sync::Arc;

use yolo_core::prelude::*;
use yolo_core::{CardRecord, Route};
use yolo_platform::RandomNameGenerator;

use crate::card_provider::SessionCardProvider;
use crate::config::Settings;
use crate::navigation::{Navigator, RouterState};
use crate::presentation::{self, PaymentView};
use crate::view_state::{FreezeState, PayMode, PaymentScreenState};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Loaded settings
    pub settings: Settings,

    /// Session card, created on first use
    pub card_provider: SessionCardProvider,

    /// Freeze state; lives here so it survives route changes
    pub freeze: FreezeState,

    /// Payment screen state for the current mount
    pub screen: PaymentScreenState,

    /// Current route
    pub router: RouterState,
}

impl AppState {
    /// Create state for a new session, generating the holder name at random
    /// unless the settings fix one
    pub fn new(settings: Settings) -> Self {
        let card_provider = SessionCardProvider::new(Arc::new(RandomNameGenerator::new()))
            .with_holder_override(settings.card.holder_override());
        Self::with_settings(settings, card_provider)
    }

    /// Create state from settings, starting at the configured route and freeze state
    pub fn with_settings(settings: Settings, card_provider: SessionCardProvider) -> Self {
        Self {
            phase: AppPhase::Running,
            freeze: FreezeState::from_frozen(settings.behavior.start_frozen),
            router: RouterState::new(settings.behavior.start_route),
            screen: PaymentScreenState::default(),
            settings,
            card_provider,
        }
    }

    /// The session card
    pub fn card(&self) -> Arc<CardRecord> {
        self.card_provider.get_or_create_card()
    }

    pub fn route(&self) -> Route {
        self.router.route()
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze.is_frozen()
    }

    pub fn toggle_freeze(&mut self) {
        self.freeze = self.freeze.toggled();
        info!(frozen = self.freeze.is_frozen(), "Card freeze toggled");
    }

    pub fn set_mode(&mut self, mode: PayMode) {
        self.screen.mode = mode;
    }

    /// Activate "copied!", returning the generation the timer must expire
    pub fn trigger_copy_feedback(&mut self) -> u64 {
        self.screen.copy_feedback.trigger()
    }

    /// Returns `true` if the flag was cleared
    pub fn expire_copy_feedback(&mut self, generation: u64) -> bool {
        self.screen.copy_feedback.expire(generation)
    }

    /// Go to `route`, remounting the payment screen when the route changes.
    ///
    /// Returns `true` if the route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.router.route() == route {
            return false;
        }

        if let Err(e) = self.router.navigate_to(route.path()) {
            warn!("Navigation to {} failed: {}", route, e);
            return false;
        }

        self.screen.remount();
        debug!(route = %route, mount_id = self.screen.mount_id, "Navigated");
        true
    }

    /// Current view model for the payment screen
    pub fn payment_view(&self) -> PaymentView {
        presentation::present(&self.card(), self.freeze, &self.screen)
    }

    /// Request application quit
    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should exit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("phase", &self.phase)
            .field("freeze", &self.freeze)
            .field("screen", &self.screen)
            .field("route", &self.router.route())
            .finish_non_exhaustive()
    }
}
