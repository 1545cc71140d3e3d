//! Statistics page with per-status and per-type breakdowns.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::net::types::Statistics;
use crate::util::status::status_label;

/// Statistics page — count tables by status and by problem type.
#[component]
pub fn StatisticsPage() -> impl IntoView {
    let stats = LocalResource::new(|| crate::net::api::fetch_statistics());

    view! {
        <Layout>
            <div class="statistics-page">
                <h2>"Statistics"</h2>
                <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                    {move || {
                        stats
                            .get()
                            .map(|loaded| match loaded {
                                Some(s) => breakdown_tables(&s).into_any(),
                                None => view! { <p>"Statistics unavailable."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

fn breakdown_tables(stats: &Statistics) -> impl IntoView {
    let by_status = stats
        .status
        .iter()
        .map(|(code, count)| {
            let label = code
                .parse::<i32>()
                .map_or("Unknown", status_label)
                .to_owned();
            (label, *count)
        })
        .collect::<Vec<_>>();
    let by_type = stats
        .by_type
        .iter()
        .map(|(name, count)| (name.clone(), *count))
        .collect::<Vec<_>>();
    let total = stats.total;

    view! {
        <p class="statistics-page__total">{format!("{total} work orders in total")}</p>
        <div class="statistics-page__tables">
            {count_table("By status", by_status)}
            {count_table("By problem type", by_type)}
        </div>
    }
}

fn count_table(title: &'static str, rows: Vec<(String, i64)>) -> impl IntoView {
    view! {
        <table class="statistics-page__table">
            <caption>{title}</caption>
            <tbody>
                {rows
                    .into_iter()
                    .map(|(label, count)| {
                        view! {
                            <tr>
                                <td>{label}</td>
                                <td>{count}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
