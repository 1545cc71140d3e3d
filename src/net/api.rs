//! REST API helpers for communicating with the work-order backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`Err` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Data fetches reduce to `Option` so pages degrade to empty views instead of
//! crashing hydration. `login` is the one call whose failure reason matters
//! to the UI, so it returns a typed [`LoginError`] instead.
//!
//! The bearer credential installed by the session store lives in a
//! process-wide registry here and is attached to every authorized request,
//! mirroring a default-header mechanism. The browser runtime is
//! single-threaded, so a `thread_local` cell is sufficient.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;

use super::types::{LoginResponse, ProblemType, Statistics, User, WorkOrder};

/// Authentication endpoint; credentials go as multipart form fields.
pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";

thread_local! {
    static BEARER_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Install `token` as the bearer credential for all subsequent requests.
pub fn set_bearer_token(token: &str) {
    BEARER_TOKEN.with(|cell| *cell.borrow_mut() = Some(token.to_owned()));
}

/// Remove the bearer credential; subsequent requests go out unauthenticated.
pub fn clear_bearer_token() {
    BEARER_TOKEN.with(|cell| *cell.borrow_mut() = None);
}

/// Current `Authorization` header value, if a credential is installed.
pub fn bearer_header() -> Option<String> {
    BEARER_TOKEN.with(|cell| cell.borrow().as_ref().map(|t| format!("Bearer {t}")))
}

/// Why a login attempt failed. None of these propagate as panics; the login
/// page reduces them to a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginError {
    /// Transport-level failure before any HTTP status was received.
    Network(String),
    /// The server answered with a non-success status (e.g. 401).
    Rejected(u16),
    /// A success status whose body did not match the expected schema.
    MalformedResponse,
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Rejected(401) => write!(f, "invalid username or password"),
            Self::Rejected(status) => write!(f, "login rejected with status {status}"),
            Self::MalformedResponse => write!(f, "unexpected response from server"),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn work_orders_endpoint(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("/api/v1/work-orders?status={code}"),
        None => "/api/v1/work-orders".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn work_order_endpoint(id: i64) -> String {
    format!("/api/v1/work-orders/{id}")
}

/// Submit credentials to [`LOGIN_ENDPOINT`] as `multipart/form-data` with
/// cookies included.
///
/// # Errors
///
/// Returns a [`LoginError`] for transport failures, non-success statuses,
/// and malformed success payloads.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new()
            .map_err(|_| LoginError::Network("form construction failed".to_owned()))?;
        form.append_with_str("username", username)
            .map_err(|_| LoginError::Network("form construction failed".to_owned()))?;
        form.append_with_str("password", password)
            .map_err(|_| LoginError::Network("form construction failed".to_owned()))?;

        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .credentials(web_sys::RequestCredentials::Include)
            .body(form)
            .map_err(|e| LoginError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(LoginError::Rejected(resp.status()));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|_| LoginError::MalformedResponse)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(LoginError::Network("not available on server".to_owned()))
    }
}

/// GET `url` with the bearer credential attached, decoding a JSON body.
/// Returns `None` if unauthenticated, on transport failure, or on the server.
#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let mut req = gloo_net::http::Request::get(url);
    if let Some(header) = bearer_header() {
        req = req.header("Authorization", &header);
    }
    let resp = req.send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

/// Fetch the work-order list, optionally filtered to one status code.
pub async fn fetch_work_orders(status: Option<i32>) -> Option<Vec<WorkOrder>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&work_orders_endpoint(status)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = status;
        None
    }
}

/// Fetch a single work order by id.
pub async fn fetch_work_order(id: i64) -> Option<WorkOrder> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&work_order_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Fetch aggregate work-order statistics.
pub async fn fetch_statistics() -> Option<Statistics> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/api/v1/work-orders/statistics").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the active account list (admin only).
pub async fn fetch_users() -> Option<Vec<User>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/api/v1/auth/users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the configured problem types (admin only).
pub async fn fetch_problem_types() -> Option<Vec<ProblemType>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/api/v1/settings/problem-types").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
