//! Roster player client.
//!
//! This crate contains UI, application logic, and infrastructure adapters.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

#[cfg(test)]
mod e2e_tests;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform, Route, ShellKind};
