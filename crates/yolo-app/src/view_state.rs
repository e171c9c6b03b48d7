//! Mutable card view state
//!
//! `FreezeState` is owned by [`AppState`](crate::state::AppState) so it
//! survives route changes. [`PaymentScreenState`] belongs to the payment
//! screen and is rebuilt whenever the route changes.

use std::time::Duration;

use serde::Serialize;

/// How long "copied!" stays on the copy button
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Whether the card is usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FreezeState {
    #[default]
    Active,
    Frozen,
}

impl FreezeState {
    pub fn from_frozen(frozen: bool) -> Self {
        if frozen {
            FreezeState::Frozen
        } else {
            FreezeState::Active
        }
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self, FreezeState::Frozen)
    }

    /// The opposite state; there is no terminal state
    pub fn toggled(self) -> Self {
        match self {
            FreezeState::Active => FreezeState::Frozen,
            FreezeState::Frozen => FreezeState::Active,
        }
    }
}

/// Payment mode selected with the mode buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayMode {
    Pay,
    #[default]
    Card,
}

impl PayMode {
    pub const ALL: [PayMode; 2] = [PayMode::Pay, PayMode::Card];

    pub fn label(&self) -> &'static str {
        match self {
            PayMode::Pay => "pay",
            PayMode::Card => "card",
        }
    }

    pub fn next(self) -> Self {
        match self {
            PayMode::Pay => PayMode::Card,
            PayMode::Card => PayMode::Pay,
        }
    }
}

/// Transient "copied!" flag
///
/// Every activation gets a new generation number. Only an expiry carrying the
/// current generation clears the flag, so a timer that was replaced but had
/// already fired cannot cut a newer activation short.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    active_generation: Option<u64>,
    next_generation: u64,
}

impl CopyFeedback {
    /// Activate (or re-activate) the flag, returning the generation to expire
    pub fn trigger(&mut self) -> u64 {
        self.next_generation += 1;
        self.active_generation = Some(self.next_generation);
        self.next_generation
    }

    /// Clear the flag if `generation` is the current activation.
    ///
    /// Returns `true` if the flag was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.active_generation == Some(generation) {
            self.active_generation = None;
            true
        } else {
            false
        }
    }

    /// Clear unconditionally. The generation counter keeps counting.
    pub fn clear(&mut self) {
        self.active_generation = None;
    }

    pub fn is_active(&self) -> bool {
        self.active_generation.is_some()
    }

    pub fn active_generation(&self) -> Option<u64> {
        self.active_generation
    }
}

/// State owned by one mount of the payment screen
#[derive(Debug, Clone, Default)]
pub struct PaymentScreenState {
    pub mode: PayMode,
    pub copy_feedback: CopyFeedback,
    /// Bumped on every remount; clipboard results from an older mount are dropped
    pub mount_id: u64,
}

impl PaymentScreenState {
    /// Reset to a fresh mount: default mode, feedback cleared
    pub fn remount(&mut self) {
        self.mode = PayMode::default();
        self.copy_feedback.clear();
        self.mount_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        let state = FreezeState::Active;
        assert_eq!(state.toggled(), FreezeState::Frozen);
        assert_eq!(state.toggled().toggled(), state);
    }

    #[test]
    fn test_defaults() {
        assert!(!FreezeState::default().is_frozen());
        assert_eq!(PayMode::default(), PayMode::Card);
        assert!(!CopyFeedback::default().is_active());
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(PayMode::Card.next(), PayMode::Pay);
        assert_eq!(PayMode::Pay.next(), PayMode::Card);
    }

    #[test]
    fn test_feedback_generations_increase() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.trigger();
        let second = feedback.trigger();
        assert!(second > first);
        assert_eq!(feedback.active_generation(), Some(second));
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.trigger();
        let second = feedback.trigger();

        assert!(!feedback.expire(first));
        assert!(feedback.is_active());

        assert!(feedback.expire(second));
        assert!(!feedback.is_active());
    }

    #[test]
    fn test_remount_resets_screen_but_not_generation_counter() {
        let mut screen = PaymentScreenState {
            mode: PayMode::Pay,
            ..Default::default()
        };
        let generation = screen.copy_feedback.trigger();

        screen.remount();

        assert_eq!(screen.mode, PayMode::Card);
        assert!(!screen.copy_feedback.is_active());
        assert_eq!(screen.mount_id, 1);
        assert!(screen.copy_feedback.trigger() > generation);
    }
}
