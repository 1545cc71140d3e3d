//! Browser `localStorage` glue for the persisted session keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists two string keys across reloads: `token` (raw
//! credential) and `user` (JSON-serialized account record). These helpers
//! centralize the hydrate-only web-sys access; on the server every read is
//! `None` and every write a no-op.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn read_key(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Read the persisted raw token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        read_key(TOKEN_KEY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the persisted user record as its raw JSON string, if any.
pub fn read_user_json() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        read_key(USER_KEY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token and serialized user record together.
pub fn write_session(token: &str, user_json: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(USER_KEY, user_json);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_json);
    }
}

/// Remove both persisted session keys.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
