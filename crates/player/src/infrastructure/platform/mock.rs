//! In-memory platform for tests
//!
//! Storage is a shared map, dialogs are recorded, `confirm` answers with a
//! scripted value and the viewport is a single number.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{
    DialogProvider, DocumentProvider, StorageProvider, ViewportProvider,
};
use crate::state::Platform;

#[derive(Clone, Default)]
pub struct InMemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl StorageProvider for InMemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut data) = self.data.write() {
            data.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut data) = self.data.write() {
            data.remove(key);
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingDocumentProvider {
    pub titles: Arc<Mutex<Vec<String>>>,
}

impl DocumentProvider for RecordingDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut titles) = self.titles.lock() {
            titles.push(title.to_string());
        }
    }
}

#[derive(Clone)]
pub struct RecordingDialogProvider {
    pub alerts: Arc<Mutex<Vec<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    confirm_answer: bool,
}

impl RecordingDialogProvider {
    pub fn answering(confirm_answer: bool) -> Self {
        Self {
            alerts: Arc::default(),
            prompts: Arc::default(),
            confirm_answer,
        }
    }
}

impl DialogProvider for RecordingDialogProvider {
    fn alert(&self, message: &str) {
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_string());
        }
    }

    fn confirm(&self, message: &str) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(message.to_string());
        }
        let answer = self.confirm_answer;
        Box::pin(async move { answer })
    }
}

#[derive(Clone, Default)]
pub struct FakeViewportProvider {
    pub offset: Arc<Mutex<f64>>,
}

impl ViewportProvider for FakeViewportProvider {
    fn scroll_offset(&self) -> Pin<Box<dyn Future<Output = f64> + 'static>> {
        let offset = self.offset.lock().map(|o| *o).unwrap_or(0.0);
        Box::pin(async move { offset })
    }

    fn scroll_to(&self, offset: f64) {
        if let Ok(mut current) = self.offset.lock() {
            *current = offset;
        }
    }

    fn scroll_to_top(&self) {
        self.scroll_to(0.0);
    }
}

/// Handles onto the recording providers behind a mock `Platform`.
#[derive(Clone)]
pub struct MockPlatformHandles {
    pub storage: InMemoryStorageProvider,
    pub document: RecordingDocumentProvider,
    pub dialog: RecordingDialogProvider,
    pub viewport: FakeViewportProvider,
}

/// Build a `Platform` out of in-memory providers.
pub fn create_mock_platform(confirm_answer: bool) -> (Platform, MockPlatformHandles) {
    let handles = MockPlatformHandles {
        storage: InMemoryStorageProvider::default(),
        document: RecordingDocumentProvider::default(),
        dialog: RecordingDialogProvider::answering(confirm_answer),
        viewport: FakeViewportProvider::default(),
    };
    let platform = Platform::new(
        handles.storage.clone(),
        handles.document.clone(),
        handles.dialog.clone(),
        handles.viewport.clone(),
    );
    (platform, handles)
}
