//! Work-order detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::layout::Layout;
use crate::net::types::WorkOrder;
use crate::util::status::status_label;
use crate::util::time::format_date_time;

/// Work-order detail page — read-only view of one order by route id.
#[component]
pub fn WorkOrderDetailPage() -> impl IntoView {
    let params = use_params_map();
    let order = LocalResource::new(move || {
        let id = params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
        async move {
            match id {
                Some(id) => crate::net::api::fetch_work_order(id).await,
                None => None,
            }
        }
    });

    view! {
        <Layout>
            <div class="work-order-detail-page">
                <h2>"Work Order"</h2>
                <Suspense fallback=move || view! { <p>"Loading work order..."</p> }>
                    {move || {
                        order
                            .get()
                            .map(|loaded| match loaded {
                                Some(order) => detail_fields(order).into_any(),
                                None => view! { <p>"Work order not found."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

fn detail_fields(order: WorkOrder) -> impl IntoView {
    let assignee = order
        .assigned_to
        .map_or_else(|| "-".to_owned(), |u| u.full_name);
    let rows = vec![
        ("Order No.", order.order_no),
        ("Status", status_label(order.status).to_owned()),
        ("Reporter", order.reporter_name),
        ("Contact", order.contact_phone),
        ("Location", order.location),
        ("Problem", order.problem_desc),
        (
            "Type",
            order.problem_type.unwrap_or_else(|| "-".to_owned()),
        ),
        ("Assignee", assignee),
        (
            "Assigned at",
            format_date_time(order.assigned_time.as_deref()),
        ),
        (
            "Processing notes",
            order.processing_desc.unwrap_or_else(|| "-".to_owned()),
        ),
        (
            "Solution",
            order.solution_type.unwrap_or_else(|| "-".to_owned()),
        ),
        ("Created", format_date_time(Some(&order.created_at))),
        ("Modified", format_date_time(Some(&order.modified_at))),
    ];
    view! {
        <dl class="work-order-detail-page__fields">
            {rows
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="work-order-detail-page__row">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </dl>
    }
}
