//! Profile page rendering the current session's identity.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::state::session::Session;

/// Profile page — a read-only view of the logged-in account.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <Layout>
            <div class="profile-page">
                <h2>"Profile"</h2>
                <dl class="profile-page__fields">
                    <div>
                        <dt>"Username"</dt>
                        <dd>{move || session.get().username}</dd>
                    </div>
                    <div>
                        <dt>"Full Name"</dt>
                        <dd>{move || session.get().full_name}</dd>
                    </div>
                    <div>
                        <dt>"Role"</dt>
                        <dd>{move || if session.get().is_admin { "Admin" } else { "Operator" }}</dd>
                    </div>
                </dl>
            </div>
        </Layout>
    }
}
