//! Failures surfaced by the game API.
//!
//! Transport and server-side failures are transient and worth retrying;
//! everything else means the response can never be turned into state.
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed")]
    Transport {
        path: String,
        #[source]
        source: BoxError,
    },

    /// `body` is whatever the server sent with the 404, often empty.
    #[error("{path} not found")]
    NotFound { path: String, body: String },

    #[error("request rejected with status {status}: {body}")]
    Validation { status: u16, body: String },

    #[error("server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("malformed response from {path}: missing `{discriminator}` in {payload}")]
    Malformed {
        path: String,
        discriminator: &'static str,
        payload: Value,
    },

    #[error("failed to decode response from {path}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("request timed out after {after:?}")]
    Timeout { after: Duration },
}

impl ApiError {
    pub fn transport(
        path: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Transport {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::ServerError { .. })
    }

    /// The raw payload a client-side rejection carried, if any.
    pub(crate) fn rejection_payload(&self) -> Option<Value> {
        match self {
            Self::Validation { body, .. } => Some(parse_body(body)),
            Self::NotFound { body, .. } if !body.trim().is_empty() => Some(parse_body(body)),
            Self::NotFound { path, .. } => Some(Value::String(format!("{path} not found"))),
            _ => None,
        }
    }
}

fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_and_server_errors_are_transient() {
        assert!(ApiError::transport("game/", "connection refused").is_transient());
        assert!(
            ApiError::ServerError {
                status: 502,
                body: String::new()
            }
            .is_transient()
        );
        assert!(
            !ApiError::NotFound {
                path: "game/".into(),
                body: String::new(),
            }
            .is_transient()
        );
        assert!(
            !ApiError::Malformed {
                path: "game/".into(),
                discriminator: "fow",
                payload: Value::Null,
            }
            .is_transient()
        );
    }

    #[test]
    fn validation_body_is_kept_as_json_when_possible() {
        let err = ApiError::Validation {
            status: 400,
            body: r#"{"error":"not your turn"}"#.into(),
        };
        assert_eq!(
            err.rejection_payload(),
            Some(serde_json::json!({"error": "not your turn"}))
        );

        let err = ApiError::Validation {
            status: 400,
            body: "nope".into(),
        };
        assert_eq!(err.rejection_payload(), Some(Value::String("nope".into())));
    }

    #[test]
    fn not_found_keeps_the_server_body() {
        let err = ApiError::NotFound {
            path: "game/info/g-9".into(),
            body: r#"{"error":"game not found"}"#.into(),
        };
        assert_eq!(
            err.rejection_payload(),
            Some(serde_json::json!({"error": "game not found"}))
        );

        let err = ApiError::NotFound {
            path: "game/info/g-9".into(),
            body: String::new(),
        };
        assert_eq!(
            err.rejection_payload(),
            Some(Value::String("game/info/g-9 not found".into()))
        );
    }
}
