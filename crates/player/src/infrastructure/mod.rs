//! Infrastructure adapters: HTTP transport, per-target platform providers
//! and task spawning.

pub mod http_client;
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use http_client::ApiAdapter;

/// Run a UI-side future on the current Dioxus runtime.
///
/// The task is owned by the calling component's scope, so a view that
/// unmounts mid-request simply stops caring about the response.
pub fn spawn_task(future: impl std::future::Future<Output = ()> + 'static) {
    dioxus::prelude::spawn(future);
}
