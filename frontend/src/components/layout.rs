use leptos::prelude::*;

use super::sidebar::Sidebar;
use crate::auth::use_auth;

/// Page chrome for signed-in pages: drawer sidebar and top bar.
#[component]
pub fn AppShell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let auth = use_auth();
    let name = move || {
        auth.user()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };
    let initials = move || auth.user().map(|u| u.initials()).unwrap_or_default();

    view! {
        <div class="drawer lg:drawer-open">
            <input id="nav-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <header class="navbar bg-base-100 shadow-sm px-4">
                    <div class="flex-none lg:hidden">
                        <label for="nav-drawer" class="btn btn-square btn-ghost">"☰"</label>
                    </div>
                    <div class="flex-1">
                        <h1 class="text-xl font-semibold">{title}</h1>
                    </div>
                    <div class="flex-none gap-2 items-center">
                        <span class="hidden md:inline text-sm">{name}</span>
                        <div class="avatar placeholder">
                            <div class="bg-primary text-primary-content rounded-full w-9">
                                <span class="text-sm">{initials}</span>
                            </div>
                        </div>
                    </div>
                </header>
                <main class="p-4 md:p-8 space-y-6">{children()}</main>
            </div>
            <div class="drawer-side z-40">
                <label for="nav-drawer" aria-label="close sidebar" class="drawer-overlay"></label>
                <Sidebar />
            </div>
        </div>
    }
}
