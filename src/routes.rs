//! Route metadata and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation, including the initial one, passes through a single
//! three-way decision over the target path and the current session: allow,
//! redirect to login, or redirect home. The decision itself is a pure
//! function so it can be tested without a router; [`install_route_guard`]
//! wires it to `leptos_router` as an effect over the current location.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;

/// The one path reachable without a session.
pub const LOGIN_PATH: &str = "/login";
/// Fallback for authenticated users who lack admin rights on the target.
pub const HOME_PATH: &str = "/";

/// Whether a path is restricted to administrators. Absent from this table
/// means "any authenticated user".
pub fn requires_admin(path: &str) -> bool {
    matches!(path, "/users" | "/settings")
}

/// Outcome of the navigation guard for one target path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectLogin,
    RedirectHome,
}

/// Decide how to handle a navigation to `path` under `session`.
///
/// Rule order is significant and short-circuits: the login path is always
/// allowed, then unauthenticated sessions go to login, then non-admins are
/// bounced home from admin-only paths.
pub fn decide(path: &str, session: &Session) -> RouteDecision {
    if path == LOGIN_PATH {
        RouteDecision::Allow
    } else if !session.is_authenticated() {
        RouteDecision::RedirectLogin
    } else if requires_admin(path) && !session.is_admin {
        RouteDecision::RedirectHome
    } else {
        RouteDecision::Allow
    }
}

/// Run the guard on the current location and on every subsequent
/// navigation or session change. Must be called inside a `Router`.
pub fn install_route_guard(session: RwSignal<Session>) {
    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move || {
        let path = location.pathname.get();
        match decide(&path, &session.get()) {
            RouteDecision::Allow => {}
            RouteDecision::RedirectLogin => navigate(LOGIN_PATH, NavigateOptions::default()),
            RouteDecision::RedirectHome => navigate(HOME_PATH, NavigateOptions::default()),
        }
    });
}
