//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using the standard
//! library, native crates, and the Dioxus desktop webview for dialogs and
//! scrolling.

use crate::ports::outbound::platform::{
    DialogProvider, DocumentProvider, StorageProvider, ViewportProvider,
};
use crate::state::Platform;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use std::{future::Future, pin::Pin, sync::Arc};

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/roster/player/storage.json
/// - macOS: ~/Library/Application Support/io.roster.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\roster\player\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider in the platform config directory
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "roster", "player") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("roster_storage.json")
        };
        Self::with_path(storage_path)
    }

    /// Create a storage provider backed by an explicit file
    ///
    /// Loads existing data from the file if it exists.
    pub fn with_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard);
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Quote a Rust string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Desktop document provider; the webview has a DOM, so the title is set there
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, title: &str) {
        let _ = dioxus::document::eval(&format!("document.title = {};", js_string(title)));
    }
}

/// Desktop dialogs, rendered by the webview
#[derive(Clone, Default)]
pub struct DesktopDialogProvider;

impl DialogProvider for DesktopDialogProvider {
    fn alert(&self, message: &str) {
        let _ = dioxus::document::eval(&format!("alert({});", js_string(message)));
    }

    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        let script = format!("return confirm({});", js_string(message));
        Box::pin(async move {
            match dioxus::document::eval(&script).join::<bool>().await {
                Ok(answer) => answer,
                Err(e) => {
                    tracing::warn!("confirm dialog failed: {:?}", e);
                    false
                }
            }
        })
    }
}

/// Desktop viewport provider, driving the webview's window scroll
#[derive(Clone, Default)]
pub struct DesktopViewportProvider;

impl ViewportProvider for DesktopViewportProvider {
    fn scroll_offset(&self) -> Pin<Box<dyn Future<Output = f64> + 'static>> {
        Box::pin(async move {
            dioxus::document::eval("return window.scrollY;")
                .join::<f64>()
                .await
                .unwrap_or(0.0)
        })
    }

    fn scroll_to(&self, offset: f64) {
        let _ = dioxus::document::eval(&format!("window.scrollTo(0, {offset});"));
    }

    fn scroll_to_top(&self) {
        let _ = dioxus::document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopStorageProvider::new(),
        DesktopDocumentProvider,
        DesktopDialogProvider,
        DesktopViewportProvider,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let first = DesktopStorageProvider::with_path(&path);
        first.save("token", "abc");
        first.save("rol", "GM");
        first.remove("rol");

        let second = DesktopStorageProvider::with_path(&path);
        assert_eq!(second.load("token"), Some("abc".to_string()));
        assert_eq!(second.load("rol"), None);
    }

    #[test]
    fn corrupt_storage_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = DesktopStorageProvider::with_path(&path);
        assert_eq!(storage.load("token"), None);
    }

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string("Delete \"Thrall\"?"), r#""Delete \"Thrall\"?""#);
    }
}
