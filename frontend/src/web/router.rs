//! Router service.
//!
//! Wraps the History API and applies the route guard on every navigation,
//! back/forward event and session change. Pages read the current route from
//! a signal; nothing else touches `window.history`.

use leptos::prelude::*;
use seva_kendra::route::{AppRoute, GuardDecision, guard};
use seva_kendra::session::AuthStatus;
use wasm_bindgen::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        seva_kendra::log_warn!("[Router] history update failed: {:?}", e);
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    /// Route requested by the URL; may still be waiting on the session
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Injected by the app so routing does not depend on the auth module
    status: Signal<AuthStatus>,
}

impl RouterService {
    fn new(status: Signal<AuthStatus>) -> Self {
        let initial = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial);
        Self {
            current_route,
            set_route,
            status,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Guard decision for the current route, tracked.
    pub fn decision(&self) -> GuardDecision {
        guard(self.current_route.get(), self.status.get())
    }

    pub fn navigate(&self, path: &str) {
        self.apply(AppRoute::from_path(path), path, true);
    }

    /// Resolve `target`, reached through `requested`, against the session and
    /// commit the result.
    fn apply(&self, target: AppRoute, requested: &str, push: bool) {
        match guard(target, self.status.get_untracked()) {
            GuardDecision::Render(route) => {
                write_history(route.address(requested), push);
                self.set_route.set(route);
            }
            GuardDecision::Redirect(route) => {
                seva_kendra::log_info!("[Router] {} -> {}", target, route);
                write_history(route.to_path(), push);
                self.set_route.set(route);
            }
            GuardDecision::Wait => self.set_route.set(target),
        }
    }

    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            router.apply(AppRoute::from_path(&path), &path, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // The listener lives as long as the page
        closure.forget();
    }

    /// Re-run the guard whenever the session status changes.
    fn setup_auth_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            let status = router.status.get();
            let route = router.current_route.get_untracked();
            seva_kendra::log_info!("[Router] session {:?} on {}", status, route);
            router.apply(route, &current_path(), false);
        });
    }
}

fn provide_router(status: Signal<AuthStatus>) -> RouterService {
    let router = RouterService::new(status);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn Router(status: Signal<AuthStatus>, children: Children) -> impl IntoView {
    provide_router(status);
    children()
}

/// Renders the matched page, or a spinner while the session is restored.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    let decision = Memo::new(move |_| router.decision());

    move || match decision.get() {
        GuardDecision::Render(route) => matcher(route),
        GuardDecision::Redirect(_) | GuardDecision::Wait => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

/// In-app link that goes through the router instead of reloading.
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
