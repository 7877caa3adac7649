//! HTTP adapter implementing `RawApiPort`
//!
//! `reqwest` on desktop, `gloo-net` in the browser. Both attach
//! `Authorization: Bearer <token>` when the `CredentialPort` has one and hand
//! the status + body to the shared decoder. No retries, no timeouts beyond the
//! transport's own.

use std::sync::Arc;

use serde_json::Value;

use crate::ports::outbound::{ApiError, CredentialPort, RawApiPort};

/// Turn a status code and raw body into the port's result.
///
/// Success bodies may be empty (204, or actions that answer with nothing);
/// those decode to `Value::Null`.
pub(crate) fn decode_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::HttpError {
            status,
            body: body.to_string(),
        });
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))
}

fn join_url(api_root: &str, path: &str) -> String {
    format!(
        "{}/{}",
        api_root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

/// HTTP adapter bound to one API root.
#[derive(Clone)]
pub struct ApiAdapter {
    api_root: String,
    credentials: Arc<dyn CredentialPort>,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(api_root: impl Into<String>, credentials: Arc<dyn CredentialPort>) -> Self {
        Self {
            api_root: api_root.into(),
            credentials,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.api_root, path)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, verb: Verb, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(?verb, %url, "api request");

        let method = match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        };

        let mut request = self.client.request(method, &url);
        if let Some(token) = self.credentials.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        decode_response(status, &text)
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(&self, verb: Verb, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        use gloo_net::http::{Method, RequestBuilder};

        let url = self.url(path);
        tracing::debug!(?verb, %url, "api request");

        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        };

        let mut builder = RequestBuilder::new(&url).method(method);
        if let Some(token) = self.credentials.bearer_token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::SerializeError(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        decode_response(status, &text)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Verb::Get, path, None).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Verb::Post, path, Some(body)).await
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.send(Verb::Post, path, Some(body)).await.map(|_| ())
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(Verb::Post, path, None).await.map(|_| ())
    }

    async fn patch_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Verb::Patch, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Verb::Delete, path, None).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockCredentialPort;
    use serde_json::json;

    #[test]
    fn empty_success_body_is_null() {
        assert_eq!(decode_response(204, ""), Ok(Value::Null));
        assert_eq!(decode_response(200, "  \n"), Ok(Value::Null));
    }

    #[test]
    fn success_body_is_parsed() {
        assert_eq!(
            decode_response(201, r#"{"id":3,"nombre":"Orco"}"#),
            Ok(json!({"id": 3, "nombre": "Orco"}))
        );
        assert!(matches!(
            decode_response(200, "<html>"),
            Err(ApiError::ParseError(_))
        ));
    }

    #[test]
    fn error_status_keeps_raw_body() {
        assert_eq!(
            decode_response(403, r#"{"detail":"nope"}"#),
            Err(ApiError::HttpError {
                status: 403,
                body: r#"{"detail":"nope"}"#.to_string()
            })
        );
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let mut credentials = MockCredentialPort::new();
        credentials.expect_bearer_token().returning(|| None);
        let adapter = ApiAdapter::new("http://127.0.0.1:8000/api/", Arc::new(credentials));

        assert_eq!(
            adapter.url("/personajes/7/elegir/"),
            "http://127.0.0.1:8000/api/personajes/7/elegir/"
        );
        assert_eq!(join_url("http://h/api", "yo/"), "http://h/api/yo/");
    }
}
