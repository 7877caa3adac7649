//! Client error taxonomy
//!
//! `ApiError` is what the transport saw; `ClientError` is what a view shows.
//! The conversion happens once, here, so views only ever match on four kinds.

use roster_domain::DomainError;
use serde_json::Value;

use crate::ports::outbound::ApiError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Rejected locally before any request was made
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// 401/403 from the backend
    #[error("{}", .message.as_deref().unwrap_or("Not authorized."))]
    Unauthorized { status: u16, message: Option<String> },

    /// Any other 4xx; `body` keeps the decoded payload for field lookups
    #[error("{}", .message.as_deref().unwrap_or("The server rejected the request."))]
    BackendRejection {
        status: u16,
        message: Option<String>,
        body: Option<Value>,
    },

    /// Network failure, 5xx or an undecodable response
    #[error("Could not reach the server: {0}")]
    TransportFailure(String),
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::HttpError { status, body } => {
                let parsed = serde_json::from_str::<Value>(&body).ok();
                let message = parsed.as_ref().and_then(extract_message);
                match status {
                    401 | 403 => Self::Unauthorized { status, message },
                    400..=499 => Self::BackendRejection {
                        status,
                        message,
                        body: parsed,
                    },
                    _ => Self::TransportFailure(format!("HTTP {status}")),
                }
            }
            ApiError::RequestFailed(msg) | ApiError::ParseError(msg) => {
                Self::TransportFailure(msg)
            }
            ApiError::SerializeError(msg) => Self::TransportFailure(msg),
        }
    }
}

impl ClientError {
    /// Message the backend put in the body, verbatim.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. } | Self::BackendRejection { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// First message listed under `field` in a field-error payload.
    pub fn field_message(&self, field: &str) -> Option<String> {
        let Self::BackendRejection {
            body: Some(body), ..
        } = self
        else {
            return None;
        };
        first_text(body.get(field)?)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Text for a banner or alert: local validation and backend messages
    /// verbatim, anything else replaced by `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            other => other
                .backend_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

/// `detail`, then `detalle`, then `non_field_errors`, then the first field error.
fn extract_message(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    ["detail", "detalle", "non_field_errors"]
        .iter()
        .find_map(|key| object.get(*key).and_then(first_text))
        .or_else(|| object.values().find_map(first_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: &str) -> ClientError {
        ClientError::from(ApiError::HttpError {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        let err = http(401, r#"{"detail":"No active account found"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.backend_message(), Some("No active account found"));

        let err = http(403, "");
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Not authorized.");
    }

    #[test]
    fn rejection_message_precedence() {
        let err = http(400, r#"{"nombre":["too long"],"detalle":"Dead characters cannot level up."}"#);
        assert_eq!(err.backend_message(), Some("Dead characters cannot level up."));

        let err = http(400, r#"{"non_field_errors":["Pick exactly two."]}"#);
        assert_eq!(err.backend_message(), Some("Pick exactly two."));

        let err = http(400, r#"{"username":["A user with that username already exists."]}"#);
        assert_eq!(
            err.backend_message(),
            Some("A user with that username already exists.")
        );
        assert_eq!(
            err.field_message("username").as_deref(),
            Some("A user with that username already exists.")
        );
        assert_eq!(err.field_message("email"), None);
    }

    #[test]
    fn server_errors_and_network_are_transport_failures() {
        assert!(matches!(http(502, "Bad gateway"), ClientError::TransportFailure(_)));
        let err = ClientError::from(ApiError::RequestFailed("connection refused".into()));
        assert!(matches!(err, ClientError::TransportFailure(_)));
        assert_eq!(err.user_message("Something went wrong."), "Something went wrong.");
    }

    #[test]
    fn validation_is_shown_verbatim() {
        let err = ClientError::from(DomainError::validation("Name cannot be empty."));
        assert_eq!(err.user_message("fallback"), "Name cannot be empty.");
        assert_eq!(err.backend_message(), None);
    }

    #[test]
    fn non_json_rejection_has_no_message() {
        let err = http(404, "<h1>Not Found</h1>");
        assert_eq!(err.backend_message(), None);
        assert_eq!(err.to_string(), "The server rejected the request.");
    }
}
