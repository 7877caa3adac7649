//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use std::{future::Future, pin::Pin};

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Native dialogs.
///
/// `alert` is fire-and-forget. `confirm` blocks the user, not the UI thread:
/// callers await the answer.
pub trait DialogProvider: Clone + 'static {
    fn alert(&self, message: &str);

    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>>;
}

/// Window scroll position.
pub trait ViewportProvider: Clone + 'static {
    /// Current vertical scroll offset in CSS pixels
    fn scroll_offset(&self) -> Pin<Box<dyn Future<Output = f64> + 'static>>;

    /// Jump to an offset without animation
    fn scroll_to(&self, offset: f64);

    /// Smooth scroll back to the top of the page
    fn scroll_to_top(&self);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const TOKEN: &str = "token";
    pub const ROLE: &str = "rol";
}
