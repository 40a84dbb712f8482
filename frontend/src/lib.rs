//! Seva Kendra CRM frontend
//!
//! - `web`: thin wrappers over browser APIs (fetch, storage, history, timers)
//! - `auth` / `notify`: app-wide contexts
//! - `components`: shared widgets
//! - `pages`: one component per route

mod api;
mod auth;
mod components {
    pub mod confirm_dialog;
    pub mod data_table;
    pub mod filter_bar;
    pub mod layout;
    pub mod pagination;
    pub mod record_dialog;
    pub mod record_form;
    pub mod report_tables;
    pub mod sidebar;
}
mod notify;
mod pages {
    pub mod dashboard;
    pub mod intake_form;
    pub mod module_reports;
    pub mod not_found;
    pub mod records;
    pub mod reports;
    pub mod sign_in;
}

use leptos::prelude::*;
use seva_kendra::AppRoute;

use crate::auth::{AuthContext, init_auth};
use crate::notify::{NoticeContext, ToastHost};
use crate::pages::dashboard::DashboardPage;
use crate::pages::intake_form::IntakeFormPage;
use crate::pages::module_reports::ModuleReportsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::records::RecordsPage;
use crate::pages::reports::ReportsPage;
use crate::pages::sign_in::SignInPage;

// Browser API wrappers
pub(crate) mod web {
    pub mod download;
    mod http;
    pub mod router;
    mod storage;
    pub mod timer;

    pub use http::FetchClient;
    pub use storage::{BrowserNavigator, BrowserStorage};
}

use web::router::{Router, RouterOutlet};

fn route_matcher(route: AppRoute) -> AnyView {
    if let Some(category) = route.category() {
        return view! { <RecordsPage category=category /> }.into_any();
    }
    match route {
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Reports => view! { <ReportsPage /> }.into_any(),
        AppRoute::ModuleReports => view! { <ModuleReportsPage /> }.into_any(),
        AppRoute::PublicForm => view! { <IntakeFormPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
        // Root is always redirected by the guard; sign-in is the fallback.
        _ => view! { <SignInPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    provide_context(NoticeContext::new());

    init_auth(&auth);

    view! {
        <Router status=auth.status_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <ToastHost />
    }
}
