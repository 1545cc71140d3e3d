//! Application chrome: sidebar navigation, current-user header, logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, Session};

/// Shell wrapping every authenticated page. Admin-only navigation entries
/// are hidden from non-admin sessions; the route guard still enforces the
/// restriction if such a path is entered directly.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session);
        navigate(crate::routes::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="layout">
            <aside class="layout__sidebar">
                <div class="layout__brand">"WorkDesk"</div>
                <nav class="layout__nav">
                    <A href="/">"Dashboard"</A>
                    <A href="/work-orders">"Work Orders"</A>
                    <A href="/statistics">"Statistics"</A>
                    <Show when=move || session.get().is_admin>
                        <A href="/users">"Users"</A>
                        <A href="/settings">"Settings"</A>
                    </Show>
                    <A href="/profile">"Profile"</A>
                </nav>
            </aside>
            <div class="layout__main">
                <header class="layout__header">
                    <span class="layout__user">{move || session.get().full_name}</span>
                    <button class="btn" on:click=on_logout>
                        "Log out"
                    </button>
                </header>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
