//! Dashboard page with the work-order status summary.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::net::types::Statistics;

/// Dashboard page — headline counts per work-order status.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = LocalResource::new(|| crate::net::api::fetch_statistics());

    view! {
        <Layout>
            <div class="dashboard-page">
                <h2>"Overview"</h2>
                <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                    {move || {
                        stats
                            .get()
                            .map(|loaded| match loaded {
                                Some(s) => summary_cards(&s).into_any(),
                                None => view! { <p>"Statistics unavailable."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

fn summary_cards(stats: &Statistics) -> impl IntoView {
    let count = |code: &str| stats.status.get(code).copied().unwrap_or(0);
    let cards = vec![
        ("Total", stats.total),
        ("Pending", count("0")),
        ("Assigned", count("1")),
        ("Processing", count("2")),
        ("Completed", count("3")),
    ];
    view! {
        <div class="dashboard-page__cards">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="dashboard-page__card">
                            <span class="dashboard-page__card-value">{value}</span>
                            <span class="dashboard-page__card-label">{label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
