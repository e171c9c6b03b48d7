//! yolo-app - Application state and orchestration for YOLO Pay
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! payment screen: the session card provider, the card view state, the
//! presentation rules that turn state into a view model, navigation,
//! configuration loading and the action dispatcher that runs clipboard
//! writes and the copy-feedback timer.

pub mod actions;
pub mod card_provider;
pub mod config;
pub mod handler;
pub mod headless;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod presentation;
pub mod process;
pub mod signals;
pub mod state;
pub mod view_state;

// Re-export primary types
pub use actions::{ActionContext, FeedbackTimer};
pub use card_provider::{SessionCardProvider, PLACEHOLDER_HOLDER_NAME};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{NavItem, NavTab, Navigator, RouterState, NAV_TABS};
pub use presentation::{present, CardFace, PaymentView};
pub use state::{AppPhase, AppState};
pub use view_state::{CopyFeedback, FreezeState, PayMode, PaymentScreenState};
