use leptos::prelude::*;
use seva_kendra::AppRoute;

use crate::web::router::Link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-6xl font-bold">"404"</h1>
                    <p class="py-6">"The page you are looking for does not exist."</p>
                    <Link to=AppRoute::Dashboard.to_path() class="btn btn-primary".to_string()>"Back to Dashboard"</Link>
                </div>
            </div>
        </div>
    }
}
