//! Login page with the credential form driving the session store.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Login page — submits credentials through the session store and navigates
/// home on success. Failures stay on this page with a message; the store
/// guarantees they leave the session untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let user = user.trim().to_owned();
            let navigate = navigate.clone();
            error.set(None);
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::state::session::login(session, &user, &pass).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(err) => error.set(Some(err.to_string())),
                }
                pending.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, session);
        }
    });

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"WorkDesk"</h1>
                <p>"Work-order administration"</p>
                <label class="login-page__label">
                    "Username"
                    <input
                        class="login-page__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="btn btn--primary"
                    disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </div>
        </div>
    }
}
