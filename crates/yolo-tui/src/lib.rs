//! yolo-tui - Terminal UI for YOLO Pay
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! TEA loop from yolo-app and adds terminal rendering, event polling, and
//! the payment screen widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
