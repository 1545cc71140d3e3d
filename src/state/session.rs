//! Client-side session store: the single source of truth for the current
//! login, kept in sync with `localStorage` and the bearer-credential
//! registry.
//!
//! DESIGN
//! ======
//! [`Session`] is a plain record provided to the component tree as an
//! `RwSignal<Session>` context; the route guard and user-aware components
//! read snapshots of it. All mutation is wholesale: `apply_login` populates
//! every field together, `clear` resets every field together, and restore
//! rebuilds the record from the two persisted keys. There is no partial
//! update path, which keeps the logged-out invariant (`token` empty ⇔ all
//! other fields at defaults) trivially true.
//!
//! ERROR HANDLING
//! ==============
//! `login` reduces transport, rejection, and decode failures to a typed
//! [`LoginError`] result; nothing here panics. A malformed persisted user
//! record falls back to default user fields instead of failing restore.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, LoginError};
use crate::net::types::{LoginResponse, User};
use crate::util::storage;

/// The authenticated identity and permissions currently held by the client.
///
/// `Default` is the logged-out state: empty token, no user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential; empty means unauthenticated.
    pub token: String,
    pub user_id: Option<i64>,
    pub username: String,
    pub full_name: String,
    pub is_admin: bool,
}

impl Session {
    /// Whether a login is currently held.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Populate every field from a successful login response.
    pub fn apply_login(&mut self, resp: &LoginResponse) {
        self.token = resp.access_token.clone();
        self.user_id = Some(resp.user.id);
        self.username = resp.user.username.clone();
        self.full_name = resp.user.full_name.clone();
        self.is_admin = resp.user.is_admin;
    }

    /// Reset every field to the logged-out defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Rebuild a session from the two persisted values.
    ///
    /// A missing or unparseable user record yields default user fields while
    /// keeping a present token. A user record without a token is ignored
    /// outright, so the logged-out invariant holds for every restored
    /// session.
    pub fn restore(token: Option<String>, user_json: Option<&str>) -> Self {
        let token = token.unwrap_or_default();
        if token.is_empty() {
            return Self::default();
        }
        match user_json.and_then(|raw| serde_json::from_str::<User>(raw).ok()) {
            Some(user) => Self {
                token,
                user_id: Some(user.id),
                username: user.username,
                full_name: user.full_name,
                is_admin: user.is_admin,
            },
            None => Self {
                token,
                ..Self::default()
            },
        }
    }
}

/// Build the boot-time session from `localStorage`.
pub fn restore_from_storage() -> Session {
    Session::restore(storage::read_token(), storage::read_user_json().as_deref())
}

/// Install the persisted token (if any) as the default bearer credential.
///
/// Idempotent; a missing token is simply "not logged in", not an error.
pub fn initialize() {
    if let Some(token) = storage::read_token() {
        if !token.is_empty() {
            api::set_bearer_token(&token);
        }
    }
}

/// Submit credentials and, on success, persist the new session and install
/// its bearer credential before publishing the updated [`Session`].
///
/// The persist-then-publish order matters: any navigation or request
/// triggered by the signal update already observes the new token.
///
/// # Errors
///
/// Returns the [`LoginError`] from the HTTP boundary; the session and the
/// persisted keys are untouched on failure.
pub async fn login(
    session: RwSignal<Session>,
    username: &str,
    password: &str,
) -> Result<(), LoginError> {
    let resp = api::login(username, password).await.inspect_err(|err| {
        #[cfg(feature = "hydrate")]
        log::error!("login failed: {err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
    })?;

    let user_json = serde_json::to_string(&resp.user).unwrap_or_default();
    storage::write_session(&resp.access_token, &user_json);
    api::set_bearer_token(&resp.access_token);
    session.update(|s| s.apply_login(&resp));
    Ok(())
}

/// Clear the session, the persisted keys, and the bearer credential.
///
/// Pure local operation: no network call, cannot fail, idempotent.
pub fn logout(session: RwSignal<Session>) {
    session.update(Session::clear);
    storage::clear_session();
    api::clear_bearer_token();
}
