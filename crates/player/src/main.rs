//! Roster player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_player::application::api::Api;
use roster_player::application::services::SessionStore;
use roster_player::config::ClientConfig;
use roster_player::infrastructure::ApiAdapter;
use roster_player::ports::outbound::{CredentialPort, PlatformPort};
use roster_player::ShellKind;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Roster player");

    let config = ClientConfig::from_env();
    tracing::info!(api_root = %config.api_root(), "configuration loaded");

    // Platform
    let platform = roster_player::infrastructure::platform::create_platform();
    let session = SessionStore::new(platform.storage_adapter());
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // HTTP: the adapter reads the bearer token from the session on every request.
    let credentials: Arc<dyn CredentialPort> = Arc::new(session.clone());
    let raw_api = Arc::new(ApiAdapter::new(config.api_root(), credentials));
    let api = Api::new(raw_api);

    let shell = shell_kind(&config);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(roster_player::presentation::Services::new(api, session))
        .launch(roster_player::app);
}

/// Desktop takes the shell from configuration; the web build sizes it from the viewport.
fn shell_kind(config: &ClientConfig) -> ShellKind {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);

        if width < 768.0 {
            ShellKind::Mobile
        } else {
            ShellKind::Desktop
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        config.shell
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/roster.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
