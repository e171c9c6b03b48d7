//! # yolo-core - Core Domain Types
//!
//! Foundation crate for YOLO Pay. Provides the synthetic card record, the
//! route table, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Card (`card`)
//! - [`CardRecord`] - Immutable synthetic card data for one session
//! - [`Expiry`] - Two-digit month/year pair, displayed as `MM/YY`
//!
//! ### Routes (`route`)
//! - [`Route`] - The paths the screen can be shown under
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use yolo_core::prelude::*;
//! ```

pub mod card;
pub mod error;
pub mod logging;
pub mod route;

/// Prelude for common imports used throughout all YOLO Pay crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use card::{
    CardRecord, Expiry, DESIGN_CARD_NUMBER, DESIGN_CVV, DESIGN_EXPIRY_MONTH, DESIGN_EXPIRY_YEAR,
};
pub use error::{Error, Result, ResultExt};
pub use route::Route;
