//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using `web-sys`.

use crate::ports::outbound::platform::{
    DialogProvider, DocumentProvider, StorageProvider, ViewportProvider,
};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Browser `localStorage` provider
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                tracing::error!("localStorage rejected write for key {}", key);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Native `window.alert` / `window.confirm`
#[derive(Clone, Default)]
pub struct WasmDialogProvider;

impl DialogProvider for WasmDialogProvider {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        let answer = web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false);
        Box::pin(async move { answer })
    }
}

#[derive(Clone, Default)]
pub struct WasmViewportProvider;

impl ViewportProvider for WasmViewportProvider {
    fn scroll_offset(&self) -> Pin<Box<dyn Future<Output = f64> + 'static>> {
        let offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        Box::pin(async move { offset })
    }

    fn scroll_to(&self, offset: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, offset);
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmStorageProvider,
        WasmDocumentProvider,
        WasmDialogProvider,
        WasmViewportProvider,
    )
}
