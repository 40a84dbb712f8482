//! Authentication context.
//!
//! Holds the client core's `AuthState` in a signal. The router only sees a
//! derived status signal, so it never depends on this module directly.

use leptos::prelude::*;
use seva_kendra::api::auth as auth_api;
use seva_kendra::session::{AuthState, AuthStatus, LoginOutcome};
use seva_kendra_shared::session::{Credentials, User};

use crate::api;
use crate::web::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Changes only when the status itself changes, not on every keystroke
    /// of loading or error state.
    pub fn status_signal(&self) -> Signal<AuthStatus> {
        let state = self.state;
        Memo::new(move |_| state.with(AuthState::status)).into()
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Read the stored session once at startup.
pub fn init_auth(ctx: &AuthContext) {
    ctx.state.set(AuthState::restore(&BrowserStorage));
}

pub async fn login(ctx: &AuthContext, credentials: Credentials) -> LoginOutcome {
    match ctx.state.try_update(|s| s.begin_login(&credentials)) {
        Some(Ok(())) => {}
        Some(Err(message)) => return LoginOutcome::Failed(message),
        None => return LoginOutcome::Failed("Session is unavailable".to_string()),
    }

    let result = auth_api::login(&api::client(), &credentials).await;
    ctx.state
        .try_update(|s| s.complete_login(&BrowserStorage, result))
        .unwrap_or_else(|| LoginOutcome::Failed("Session is unavailable".to_string()))
}

/// The router reacts to the status change and leaves gated pages.
pub fn logout(ctx: &AuthContext) {
    ctx.state.update(|s| s.logout(&BrowserStorage));
}
