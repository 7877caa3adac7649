//! Typed API port
//!
//! `ApiPort` is generic over request/response types, so it is not object-safe.
//! Adapters implement [`RawApiPort`](super::RawApiPort) instead and the
//! application layer provides the typed wrapper.

use serde::{de::DeserializeOwned, Serialize};

/// Transport-level failure, before any interpretation by the application layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, CORS...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The response body could not be decoded into the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    /// The backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn post_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>;

    async fn post_empty(&self, path: &str) -> Result<(), ApiError>;

    async fn patch<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
