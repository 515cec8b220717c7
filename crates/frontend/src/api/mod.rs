//! REST client for the dashboard.
//!
//! Every protected call flows through [`send`], which attaches the stored
//! bearer token and performs a single refresh-and-retry cycle when the
//! backend answers with an authentication failure. When the refresh itself
//! fails, or there is nothing to refresh with, the session is cleared and the
//! browser is sent back to the login page.

pub mod auth;
pub mod readings;
pub mod sensors;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::session;

/// Base path of the REST API; Trunk proxies this to the backend in dev.
const API_BASE: &str = "/api";

/// Errors surfaced by API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or decode failure inside the browser fetch stack.
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// Non-success status other than a recoverable authentication failure.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Authentication failed and the refresh cycle could not recover it.
    #[error("session expired")]
    SessionExpired,
}

/// Result type for API calls.
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// What the authorized pipeline does after seeing a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthStep {
    /// Hand the response to the caller, success or plain error alike.
    Accept,
    /// Exchange the refresh token for a new access token, reissue once.
    Refresh,
    /// Clear the session and send the client to the login page.
    Logout,
}

/// Decides the refresh-and-retry cycle. A request that was already reissued
/// never refreshes again.
fn after_status(status: u16, already_retried: bool, has_refresh: bool) -> AuthStep {
    if status != 401 {
        AuthStep::Accept
    } else if already_retried || !has_refresh {
        AuthStep::Logout
    } else {
        AuthStep::Refresh
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub(crate) fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

async fn dispatch(
    method: Method,
    url: &str,
    body: Option<&Value>,
    token: Option<&str>,
) -> Result<Response> {
    let mut request = builder(method, url);
    if let Some(token) = token {
        request = request.header("Authorization", &bearer(token));
    }
    let response = match body {
        Some(body) => request.json(body)?.send().await?,
        None => request.send().await?,
    };
    Ok(response)
}

/// Map non-success statuses to [`ApiError::Status`].
pub(crate) async fn check(response: Response) -> Result<Response> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message })
    }
}

fn expire_session() -> ApiError {
    session::clear();
    redirect_to_login();
    ApiError::SessionExpired
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Issue an authorized request, refreshing the access token at most once.
async fn send(method: Method, path: &str, body: Option<Value>) -> Result<Response> {
    let url = url(path);
    let token = session::access_token();
    let response = dispatch(method, &url, body.as_ref(), token.as_deref()).await?;

    match after_status(response.status(), false, session::refresh_token().is_some()) {
        AuthStep::Accept => check(response).await,
        AuthStep::Logout => Err(expire_session()),
        AuthStep::Refresh => match auth::refresh().await {
            Ok(access) => {
                let retried = dispatch(method, &url, body.as_ref(), Some(access.as_str())).await?;
                match after_status(retried.status(), true, true) {
                    AuthStep::Accept => check(retried).await,
                    _ => Err(expire_session()),
                }
            }
            Err(_) => Err(expire_session()),
        },
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let response = send(Method::Get, path, None).await?;
    Ok(response.json().await?)
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let body = serde_json::to_value(body)?;
    let response = send(Method::Post, path, Some(body)).await?;
    Ok(response.json().await?)
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let body = serde_json::to_value(body)?;
    let response = send(Method::Put, path, Some(body)).await?;
    Ok(response.json().await?)
}

pub(crate) async fn delete(path: &str) -> Result<()> {
    send(Method::Delete, path, None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_accepted() {
        assert_eq!(after_status(200, false, true), AuthStep::Accept);
        assert_eq!(after_status(201, false, false), AuthStep::Accept);
        assert_eq!(after_status(204, true, true), AuthStep::Accept);
    }

    #[test]
    fn test_plain_errors_skip_the_refresh_cycle() {
        assert_eq!(after_status(404, false, true), AuthStep::Accept);
        assert_eq!(after_status(500, false, true), AuthStep::Accept);
        assert_eq!(after_status(403, false, true), AuthStep::Accept);
    }

    #[test]
    fn test_first_auth_failure_refreshes() {
        assert_eq!(after_status(401, false, true), AuthStep::Refresh);
    }

    #[test]
    fn test_retried_request_never_refreshes_again() {
        assert_eq!(after_status(401, true, true), AuthStep::Logout);
    }

    #[test]
    fn test_missing_refresh_token_logs_out() {
        assert_eq!(after_status(401, false, false), AuthStep::Logout);
    }

    #[test]
    fn test_bearer_header_format() {
        assert_eq!(bearer("abc123"), "Bearer abc123");
    }

    #[test]
    fn test_url_prefixes_api_base() {
        assert_eq!(url("/sensors/"), "/api/sensors/");
    }
}
