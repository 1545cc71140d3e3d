//! Admin-only settings page listing configured problem types.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::net::types::ProblemType;

/// Settings page — the problem-type catalogue. Admin-gated by the route
/// guard.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let types = LocalResource::new(|| crate::net::api::fetch_problem_types());

    view! {
        <Layout>
            <div class="settings-page">
                <h2>"Settings"</h2>
                <h3>"Problem Types"</h3>
                <Suspense fallback=move || view! { <p>"Loading problem types..."</p> }>
                    {move || {
                        types
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) if !list.is_empty() => type_list(list).into_any(),
                                Some(_) => view! { <p>"No problem types configured."</p> }.into_any(),
                                None => view! { <p>"Settings unavailable."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

fn type_list(list: Vec<ProblemType>) -> impl IntoView {
    view! {
        <ul class="settings-page__types">
            {list
                .into_iter()
                .map(|t| view! { <li>{t.name}</li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}
