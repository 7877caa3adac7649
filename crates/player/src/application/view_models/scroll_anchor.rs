//! Scroll preservation across reload-triggered re-renders

use crate::ports::outbound::PlatformPort;

/// Offset captured before a mutation, restored once after the next paint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollAnchor {
    pending: Option<f64>,
}

impl ScrollAnchor {
    pub async fn capture(platform: &dyn PlatformPort) -> Self {
        Self {
            pending: Some(platform.scroll_offset().await),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop a captured offset that no reload will paint.
    pub fn discard(&mut self) {
        self.pending = None;
    }

    /// Scroll back to the captured offset. Only the first call does anything.
    pub fn restore(&mut self, platform: &dyn PlatformPort) {
        if let Some(offset) = self.pending.take() {
            platform.scroll_to(offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;

    #[tokio::test]
    async fn restores_captured_offset_once() {
        let (platform, handles) = create_mock_platform(true);
        platform.scroll_to(640.0);

        let mut anchor = ScrollAnchor::capture(&platform).await;
        assert!(anchor.is_pending());

        // The reload re-render jumped back to the top.
        platform.scroll_to(0.0);
        anchor.restore(&platform);
        assert_eq!(*handles.viewport.offset.lock().unwrap(), 640.0);

        platform.scroll_to(10.0);
        anchor.restore(&platform);
        assert_eq!(*handles.viewport.offset.lock().unwrap(), 10.0);
        assert!(!anchor.is_pending());
    }

    #[tokio::test]
    async fn discarded_anchor_never_scrolls() {
        let (platform, handles) = create_mock_platform(true);
        platform.scroll_to(640.0);
        let mut anchor = ScrollAnchor::capture(&platform).await;

        // The reload failed; a later successful one must not jump back.
        anchor.discard();
        platform.scroll_to(25.0);
        anchor.restore(&platform);

        assert!(!anchor.is_pending());
        assert_eq!(*handles.viewport.offset.lock().unwrap(), 25.0);
    }
}
