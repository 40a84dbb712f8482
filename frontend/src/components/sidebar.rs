use leptos::prelude::*;
use seva_kendra::route::AppRoute;
use seva_kendra_shared::schema::{RecordCategory, Section};

use crate::auth::{logout, use_auth};
use crate::web::router::{Link, use_router};

const PROGRAMMES: [Section; 3] = [Section::Education, Section::Health, Section::SocialJustice];

fn link_class(active: bool) -> String {
    if active {
        "active font-semibold".to_string()
    } else {
        String::new()
    }
}

#[component]
fn NavLink(route: AppRoute, label: &'static str) -> impl IntoView {
    let router = use_router();
    let active = move || router.current_route().get() == route;
    view! {
        <li>
            <Link to=route.to_path() class=Signal::derive(move || link_class(active()))>
                {label}
            </Link>
        </li>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let router = use_router();
    let auth = use_auth();
    let expanded = RwSignal::new(None::<Section>);

    // The open section follows the page being shown
    Effect::new(move |_| {
        let section = router
            .current_route()
            .get()
            .category()
            .map(|c| c.schema().section)
            .filter(|s| *s != Section::General);
        if section.is_some() {
            expanded.set(section);
        }
    });

    let section_view = move |section: Section| {
        let is_open = move || expanded.get() == Some(section);
        let toggle = move |_| {
            expanded.update(|open| {
                *open = if *open == Some(section) { None } else { Some(section) };
            })
        };
        let items = section
            .categories()
            .map(|category: RecordCategory| {
                let schema = category.schema();
                view! { <NavLink route=AppRoute::Records(category) label=schema.title /> }
            })
            .collect_view();
        view! {
            <li>
                <button class="flex justify-between" on:click=toggle>
                    <span>{section.label()}</span>
                    <span class="opacity-60">{move || if is_open() { "-" } else { "+" }}</span>
                </button>
                <ul class:hidden=move || !is_open()>{items}</ul>
            </li>
        }
    };

    view! {
        <aside class="w-72 min-h-full bg-base-100 border-r border-base-300 flex flex-col">
            <div class="p-4 text-xl font-bold text-primary">"Seva Kendra"</div>
            <ul class="menu flex-1 w-full">
                <NavLink route=AppRoute::Dashboard label="Dashboard" />
                <NavLink route=AppRoute::Beneficiaries label="Beneficiaries" />
                <NavLink route=AppRoute::ModuleReports label="Module Reports" />
                <NavLink route=AppRoute::Reports label="Reports" />
                <li class="menu-title">"Programmes"</li>
                {PROGRAMMES.into_iter().map(section_view).collect_view()}
            </ul>
            <div class="p-4">
                <button class="btn btn-outline btn-error btn-block" on:click=move |_| logout(&auth)>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
