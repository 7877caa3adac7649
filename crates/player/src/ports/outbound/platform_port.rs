//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for all platform-specific operations
//! needed by the UI layer. It abstracts the `Platform` DI container so that
//! views only see a trait object.

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`.
/// Storage is not on here; the session store reaches it through
/// `Platform::storage_adapter`.
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    // -------------------------------------------------------------------------
    // Dialog operations
    // -------------------------------------------------------------------------

    /// Non-blocking notice, used for failed row actions
    fn alert(&self, message: &str);

    /// Yes/no prompt before destructive actions
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>>;

    // -------------------------------------------------------------------------
    // Viewport operations
    // -------------------------------------------------------------------------

    fn scroll_offset(&self) -> Pin<Box<dyn Future<Output = f64> + 'static>>;

    fn scroll_to(&self, offset: f64);

    fn scroll_to_top(&self);
}
