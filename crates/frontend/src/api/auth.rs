//! Authentication endpoints.
//!
//! Login, registration and refresh are plain posts: they carry no bearer
//! token and never enter the refresh-and-retry cycle themselves.

use gloo_net::http::Request;
use web_types::{Credentials, RefreshRequest, RefreshResponse, RegisteredUser, Registration, TokenPair};

use super::{Result, check, url};
use crate::session;

/// Create an account. `POST /auth/register/`
pub async fn register(registration: &Registration) -> Result<RegisteredUser> {
    let response = Request::post(&url("/auth/register/"))
        .json(registration)?
        .send()
        .await?;
    let response = check(response).await?;
    Ok(response.json().await?)
}

/// Exchange credentials for a token pair. `POST /auth/token/`
pub async fn login(credentials: &Credentials) -> Result<TokenPair> {
    let response = Request::post(&url("/auth/token/"))
        .json(credentials)?
        .send()
        .await?;
    let response = check(response).await?;
    Ok(response.json().await?)
}

/// Exchange the stored refresh token for a new access token and persist it.
/// `POST /auth/refresh/`
pub(crate) async fn refresh() -> Result<String> {
    let Some(refresh) = session::refresh_token() else {
        return Err(super::ApiError::SessionExpired);
    };
    let response = Request::post(&url("/auth/refresh/"))
        .json(&RefreshRequest { refresh })?
        .send()
        .await?;
    let response = check(response).await?;
    let RefreshResponse { access } = response.json().await?;
    session::store_access(&access);
    Ok(access)
}

/// The signed-in account. `GET /auth/me/`
pub async fn me() -> Result<RegisteredUser> {
    super::get_json("/auth/me/").await
}
