//! REST API helpers for communicating with the account server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A response with a non-2xx status becomes `ApiError::Status`; failing to
//! get any response at all becomes `ApiError::Transport`. Callers map both
//! into user notices; transport failures are additionally written to the
//! console log. No retries, no cancellation, no explicit timeout — the
//! browser fetch defaults apply unchanged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, LoginRequest, SignupRequest};

/// Base URL of the account server, injected by the root component rather
/// than read from the ambient environment. An empty base means same-origin
/// relative requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Join the base URL and an absolute API path without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Register a new account via `POST /api/user/signup`.
///
/// Returns the raw response body on success; the caller only logs it.
///
/// # Errors
///
/// `ApiError::Status` for a non-success HTTP response (401 means the ID is
/// already registered), `ApiError::Transport` when no response arrived.
pub async fn signup(config: &ApiConfig, req: &SignupRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint("/api/user/signup"), req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Authenticate via `POST /api/user/login`.
///
/// Returns the raw response body, which carries the identifier shown in the
/// confirmation notice.
///
/// # Errors
///
/// `ApiError::Status` for a non-success HTTP response (401 means bad
/// credentials), `ApiError::Transport` when no response arrived.
pub async fn login(config: &ApiConfig, req: &LoginRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint("/api/user/login"), req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// POST a JSON body and return the response text.
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| transport(url, &e))?
        .send()
        .await
        .map_err(|e| transport(url, &e))?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    resp.text().await.map_err(|e| transport(url, &e))
}

/// Record a transport-level failure in the console log before surfacing it.
#[cfg(feature = "hydrate")]
fn transport(url: &str, err: &gloo_net::Error) -> ApiError {
    log::error!("request to {url} failed without a response: {err}");
    ApiError::Transport(err.to_string())
}
