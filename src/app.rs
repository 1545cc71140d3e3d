//! Root application component with routing, the session context, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, profile::ProfilePage, settings::SettingsPage,
    statistics::StatisticsPage, users::UsersPage, work_order_detail::WorkOrderDetailPage,
    work_orders::WorkOrdersPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session, primes the HTTP bearer credential, and
/// sets up client-side routing with the guard watching every navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Boot: read the persisted session and install its token before any
    // route renders or any request goes out.
    let session = RwSignal::new(crate::state::session::restore_from_storage());
    crate::state::session::initialize();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/workdesk.css"/>
        <Title text="WorkDesk"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("work-orders") view=WorkOrdersPage/>
                <Route
                    path=(StaticSegment("work-orders"), ParamSegment("id"))
                    view=WorkOrderDetailPage
                />
                <Route path=StaticSegment("statistics") view=StatisticsPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}

/// Renders nothing; exists to run the route guard inside the router context.
#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    crate::routes::install_route_guard(session);
}
