//! Backend API Bindings
//!
//! Thin JSON-over-HTTP client for the PixelHub backend, organized by domain.
//! Each domain is a trait so derived-state code can run against test doubles.

mod auth;
mod comments;
mod posts;
mod users;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::models::ErrorBody;

// Re-export all public items
pub use auth::*;
pub use comments::*;
pub use posts::*;
pub use users::*;

/// HTTP client bound to a base URL and, optionally, a session token
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
            token: None,
        }
    }

    /// Client for the configured backend (page origin when none is configured)
    pub fn from_config() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::new(resolve_base(config::api_base(), origin))
    }

    /// Attach `Authorization: Bearer` to every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = check_status(builder.send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        check_status(builder.send().await?).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into `ApiError::Status`, keeping the backend's message
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}

fn resolve_base(configured: &str, origin: Option<String>) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    origin.unwrap_or_default()
}
