//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Injected into Dioxus context by `main` as `Arc<dyn PlatformPort>`
//! - Storage is also handed to the `SessionStore` through `storage_adapter()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    DialogProvider, DocumentProvider, PlatformPort, StorageProvider, ViewportProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    storage: Arc<dyn StorageProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    dialog: Arc<dyn DialogProviderDyn>,
    viewport: Arc<dyn ViewportProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait DialogProviderDyn: Send + Sync {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>>;
}

trait ViewportProviderDyn: Send + Sync {
    fn scroll_offset(&self) -> Pin<Box<dyn Future<Output = f64> + 'static>>;
    fn scroll_to(&self, offset: f64);
    fn scroll_to_top(&self);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: DialogProvider + Send + Sync> DialogProviderDyn for T {
    fn alert(&self, message: &str) {
        DialogProvider::alert(self, message)
    }
    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        DialogProvider::confirm(self, message)
    }
}

impl<T: ViewportProvider + Send + Sync> ViewportProviderDyn for T {
    fn scroll_offset(&self) -> Pin<Box<dyn Future<Output = f64> + 'static>> {
        ViewportProvider::scroll_offset(self)
    }
    fn scroll_to(&self, offset: f64) {
        ViewportProvider::scroll_to(self, offset)
    }
    fn scroll_to_top(&self) {
        ViewportProvider::scroll_to_top(self)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<S, D, G, V>(storage: S, document: D, dialog: G, viewport: V) -> Self
    where
        S: StorageProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        G: DialogProvider + Send + Sync,
        V: ViewportProvider + Send + Sync,
    {
        Self {
            storage: Arc::new(storage),
            document: Arc::new(document),
            dialog: Arc::new(dialog),
            viewport: Arc::new(viewport),
        }
    }

    /// Get a StorageProvider adapter for use with application services
    ///
    /// This is how the `SessionStore` reaches the platform's storage without
    /// knowing whether it is `localStorage` or a file.
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            platform: self.clone(),
        }
    }
}

// =============================================================================
// Storage adapter for application services
// =============================================================================

/// Adapter that allows application services to use Platform's storage
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Platform,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage.save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage.load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage.remove(key)
    }
}

// =============================================================================
// PlatformPort implementation - lets the UI use the trait abstraction
// =============================================================================

impl PlatformPort for Platform {
    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn alert(&self, message: &str) {
        self.dialog.alert(message)
    }

    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        self.dialog.confirm(message)
    }

    fn scroll_offset(&self) -> Pin<Box<dyn Future<Output = f64> + 'static>> {
        self.viewport.scroll_offset()
    }

    fn scroll_to(&self, offset: f64) {
        self.viewport.scroll_to(offset)
    }

    fn scroll_to_top(&self) {
        self.viewport.scroll_to_top()
    }
}
