//! Persisted session credentials.
//!
//! The access/refresh token pair lives in browser local storage so a session
//! survives page reloads. Both tokens are cleared together when the session
//! becomes unrecoverable.

use gloo_storage::{LocalStorage, Storage};
use web_types::TokenPair;

const ACCESS_KEY: &str = "access";
const REFRESH_KEY: &str = "refresh";

/// Stored access token, if any.
pub fn access_token() -> Option<String> {
    LocalStorage::get(ACCESS_KEY).ok()
}

/// Stored refresh token, if any.
pub fn refresh_token() -> Option<String> {
    LocalStorage::get(REFRESH_KEY).ok()
}

/// Persist both tokens after a login.
pub fn store_pair(pair: &TokenPair) {
    let _ = LocalStorage::set(ACCESS_KEY, &pair.access);
    let _ = LocalStorage::set(REFRESH_KEY, &pair.refresh);
}

/// Swap in a fresh access token after a refresh; the refresh token stays.
pub fn store_access(access: &str) {
    let _ = LocalStorage::set(ACCESS_KEY, access);
}

/// Drop both tokens.
pub fn clear() {
    LocalStorage::delete(ACCESS_KEY);
    LocalStorage::delete(REFRESH_KEY);
}

/// Whether an access token is currently stored.
pub fn is_authenticated() -> bool {
    access_token().is_some()
}
