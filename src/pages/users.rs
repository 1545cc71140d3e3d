//! Admin-only account list page.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::net::types::User;

/// User list page — active accounts and their roles. Admin-gated by the
/// route guard.
#[component]
pub fn UsersPage() -> impl IntoView {
    let users = LocalResource::new(|| crate::net::api::fetch_users());

    view! {
        <Layout>
            <div class="users-page">
                <h2>"Users"</h2>
                <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                    {move || {
                        users
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) => user_table(list).into_any(),
                                None => view! { <p>"Users unavailable."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

fn user_table(list: Vec<User>) -> impl IntoView {
    view! {
        <table class="users-page__table">
            <thead>
                <tr>
                    <th>"Username"</th>
                    <th>"Full Name"</th>
                    <th>"Role"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|user| {
                        view! {
                            <tr>
                                <td>{user.username}</td>
                                <td>{user.full_name}</td>
                                <td>{if user.is_admin { "Admin" } else { "Operator" }}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
