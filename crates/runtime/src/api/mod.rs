//! HTTP/JSON protocol of the game server.
//!
//! [`Transport`] is the seam between the runtime and the network: it moves a
//! single [`ApiRequest`] and hands back the decoded JSON body. [`GameApi`]
//! layers the typed endpoints and discriminator checks on top.
mod client;
mod errors;
mod http;
mod types;

pub use client::{ActionReply, GameApi};
pub use errors::{ApiError, BoxError};
pub use http::HttpTransport;
pub use types::{Located, Surroundings};

use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
}

/// One API call, with `path` relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Moves requests to the server.
///
/// Implementations map HTTP-level failures onto [`ApiError`] and return the
/// parsed JSON body (`Value::Null` for an empty one).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}
