//! Typed API wrapper for application services.
//!
//! The composition root stores an object-safe `RawApiPort` implementation so
//! UI and services don't depend on adapter types. `Api` wraps that
//! `Arc<dyn RawApiPort>` and implements the typed `ApiPort` interface via
//! serde_json conversions.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))
}

fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        from_value(self.raw.get_json(path).await?)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value = to_body(body)?;
        from_value(self.raw.post_json(path, &body_value).await?)
    }

    async fn post_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body_value = to_body(body)?;
        self.raw.post_no_response_json(path, &body_value).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.raw.post_empty(path).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value = to_body(body)?;
        from_value(self.raw.patch_json(path, &body_value).await?)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.raw.delete(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Entry {
        id: i64,
        nombre: String,
    }

    #[tokio::test]
    async fn get_decodes_into_requested_type() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/razas/")
            .returning(|_| Ok(json!([{"id": 1, "nombre": "Orco"}])));

        let api = Api::new(Arc::new(raw));
        let entries: Vec<Entry> = api.get("/razas/").await.unwrap();
        assert_eq!(
            entries,
            vec![Entry {
                id: 1,
                nombre: "Orco".into()
            }]
        );
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json().returning(|_| Ok(json!({"unexpected": true})));

        let api = Api::new(Arc::new(raw));
        let result: Result<Vec<Entry>, _> = api.get("/razas/").await;
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[tokio::test]
    async fn post_serializes_body() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == "/razas/" && *body == json!({"nombre": "Elfo"}))
            .returning(|_, _| Ok(json!({"id": 2, "nombre": "Elfo"})));

        let api = Api::new(Arc::new(raw));
        let created: Entry = api.post("/razas/", &json!({"nombre": "Elfo"})).await.unwrap();
        assert_eq!(created.id, 2);
    }
}
