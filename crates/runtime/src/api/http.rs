use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::trace;

use super::{ApiError, ApiRequest, Method, Transport};

/// [`Transport`] over `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Joins `path` onto the base URL with exactly one `/`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.url(&request.path);
        trace!(method = %request.method, %url, "api request");

        let builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::transport(&request.path, err))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::transport(&request.path, err))?;

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                path: request.path,
                body,
            });
        }
        if status.is_client_error() {
            return Err(ApiError::Validation {
                status: status.as_u16(),
                body,
            });
        }
        if status.is_server_error() {
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: request.path,
            source,
        })
    }
}
