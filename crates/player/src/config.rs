//! Start-up configuration
//!
//! Desktop builds read `ROSTER_API_URL` and `ROSTER_SHELL` from the process
//! environment (after loading a `.env` file). Web builds have no environment
//! at runtime, so the API URL is baked in at compile time and the shell is
//! picked from the viewport width by the binary.

use thiserror::Error;
use url::Url;

use crate::ui::ShellKind;

pub const API_URL_VAR: &str = "ROSTER_API_URL";
pub const SHELL_VAR: &str = "ROSTER_SHELL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Path prefix every REST route lives under.
const API_PREFIX: &str = "api";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    #[error("{var} must be an http(s) URL, got scheme '{scheme}'")]
    UnsupportedScheme { var: &'static str, scheme: String },

    #[error("{var} must be 'desktop' or 'mobile', got '{value}'")]
    UnknownShell { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Validated backend origin.
    pub api_url: String,
    pub shell: ShellKind,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            shell: ShellKind::default(),
        }
    }
}

pub fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        var: API_URL_VAR,
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            var: API_URL_VAR,
            scheme: other.to_string(),
        }),
    }
}

pub fn parse_shell(raw: &str) -> Result<ShellKind, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "desktop" => Ok(ShellKind::Desktop),
        "mobile" => Ok(ShellKind::Mobile),
        _ => Err(ConfigError::UnknownShell {
            var: SHELL_VAR,
            value: raw.to_string(),
        }),
    }
}

impl ClientConfig {
    /// Build a config from a variable lookup. Bad values are logged and
    /// replaced by their defaults; start-up never fails on configuration.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(API_URL_VAR) {
            match parse_api_url(&raw) {
                Ok(url) => config.api_url = url.into(),
                Err(e) => tracing::warn!(error = %e, "falling back to {}", DEFAULT_API_URL),
            }
        }

        if let Some(raw) = lookup(SHELL_VAR) {
            match parse_shell(&raw) {
                Ok(shell) => config.shell = shell,
                Err(e) => tracing::warn!(error = %e, "falling back to the desktop shell"),
            }
        }

        config
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "no .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            API_URL_VAR => option_env!("ROSTER_API_URL").map(str::to_string),
            _ => None,
        })
    }

    /// Root the REST paths are joined onto, e.g. `http://127.0.0.1:8000/api`.
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            API_PREFIX
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config.api_root(), "http://127.0.0.1:8000/api");
        assert_eq!(config.shell, ShellKind::Desktop);
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let config =
            ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "https://rpg.example.com/")]));
        assert_eq!(config.api_root(), "https://rpg.example.com/api");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_VAR, "not a url"),
            (SHELL_VAR, "tablet"),
        ]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn default_url_is_valid() {
        assert!(parse_api_url(DEFAULT_API_URL).is_ok());
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert_eq!(
            parse_api_url("ftp://files.example.com"),
            Err(ConfigError::UnsupportedScheme {
                var: API_URL_VAR,
                scheme: "ftp".into()
            })
        );
    }

    #[test]
    fn shell_is_case_insensitive() {
        assert_eq!(parse_shell(" Mobile "), Ok(ShellKind::Mobile));
        let config = ClientConfig::from_lookup(lookup(&[(SHELL_VAR, "MOBILE")]));
        assert_eq!(config.shell, ShellKind::Mobile);
    }
}
