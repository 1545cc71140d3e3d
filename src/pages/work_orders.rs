//! Work-order list page with a status filter.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::Layout;
use crate::net::types::WorkOrder;
use crate::util::status::status_label;
use crate::util::time::format_date_time;

/// Work-order list page — server-filtered by status, newest first.
#[component]
pub fn WorkOrdersPage() -> impl IntoView {
    // None = all statuses; refetches whenever the filter changes.
    let filter = RwSignal::new(Option::<i32>::None);
    let orders = LocalResource::new(move || crate::net::api::fetch_work_orders(filter.get()));

    view! {
        <Layout>
            <div class="work-orders-page">
                <header class="work-orders-page__header">
                    <h2>"Work Orders"</h2>
                    <select
                        class="work-orders-page__filter"
                        on:change=move |ev| {
                            filter.set(event_target_value(&ev).parse::<i32>().ok());
                        }
                    >
                        <option value="all">"All statuses"</option>
                        <option value="0">"Pending"</option>
                        <option value="1">"Assigned"</option>
                        <option value="2">"Processing"</option>
                        <option value="3">"Completed"</option>
                    </select>
                </header>
                <Suspense fallback=move || view! { <p>"Loading work orders..."</p> }>
                    {move || {
                        orders
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) if !list.is_empty() => order_table(list).into_any(),
                                Some(_) => view! { <p>"No work orders."</p> }.into_any(),
                                None => view! { <p>"Work orders unavailable."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

fn order_table(list: Vec<WorkOrder>) -> impl IntoView {
    view! {
        <table class="work-orders-page__table">
            <thead>
                <tr>
                    <th>"Order No."</th>
                    <th>"Status"</th>
                    <th>"Reporter"</th>
                    <th>"Location"</th>
                    <th>"Type"</th>
                    <th>"Assignee"</th>
                    <th>"Created"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|order| {
                        let detail = format!("/work-orders/{}", order.id);
                        let assignee = order
                            .assigned_to
                            .map_or_else(|| "-".to_owned(), |u| u.full_name);
                        view! {
                            <tr>
                                <td>
                                    <A href=detail>{order.order_no}</A>
                                </td>
                                <td>{status_label(order.status)}</td>
                                <td>{order.reporter_name}</td>
                                <td>{order.location}</td>
                                <td>{order.problem_type.unwrap_or_else(|| "-".to_owned())}</td>
                                <td>{assignee}</td>
                                <td>{format_date_time(Some(&order.created_at))}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
