use leptos::prelude::*;
use leptos::task::spawn_local;
use seva_kendra::route::AppRoute;
use seva_kendra::session::LoginOutcome;
use seva_kendra_shared::session::Credentials;

use crate::auth::{login, use_auth};
use crate::web::router::use_router;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Errors from an earlier visit should not greet the user
    auth.state.update(|s| s.clear_error());

    let is_loading = move || auth.state.with(|s| s.is_loading);
    let error = move || auth.state.with(|s| s.error.clone());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            if let LoginOutcome::Success(_) = login(&auth, credentials).await {
                router.navigate(AppRoute::auth_success_redirect().to_path());
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold text-primary">"Seva Kendra"</h1>
                    <p class="text-base-content/70">"Sign in to manage programmes and beneficiaries"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <Show when=move || error().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                autocomplete="username"
                                placeholder="you@sevakendra.org"
                                class="input input-bordered"
                                prop:value=email
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    autocomplete="current-password"
                                    class="input input-bordered join-item w-full"
                                    prop:value=password
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button
                                    type="button"
                                    class="btn join-item"
                                    on:click=move |_| show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_loading>
                                {move || if is_loading() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
