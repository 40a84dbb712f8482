//! Client core for the Seva Kendra CRM dashboard.
//!
//! Everything here is platform neutral: HTTP, storage and navigation sit
//! behind traits so the same code runs in the browser and under `tokio`
//! in tests.

// =========================================================
// Cross-platform logging macros
// =========================================================

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub use web_sys as __web_sys;

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => ($crate::__web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log_warn {
    ($($t:tt)*) => ($crate::__web_sys::console::warn_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log_warn {
    ($($t:tt)*) => (eprintln!($($t)*))
}

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => ($crate::__web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

pub mod api;
pub mod client;
pub mod concurrent;
pub mod config;
pub mod error;
pub mod listing;
pub mod notify;
pub mod request;
pub mod route;
pub mod session;
pub mod storage;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use listing::{ListState, ModalState, RecordSource};
pub use notify::{Notice, NoticeLevel};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use route::{AppRoute, GuardDecision, guard};
pub use session::{AuthState, AuthStatus, LoginOutcome, SessionStore};
pub use storage::{KeyValueStore, Navigator};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ReqwestHttpClient;
    use crate::storage::{MemoryStore, RecordingNavigator};
    use seva_kendra_shared::session::Credentials;

    /// Run with `cargo test -- --ignored` against the deployed backend.
    #[tokio::test]
    #[ignore]
    async fn live_backend_rejects_unknown_user() {
        let client = ApiClient::new(
            ClientConfig::from_build_env(),
            ReqwestHttpClient::new(),
            MemoryStore::new(),
            RecordingNavigator::default(),
        );
        let creds = Credentials::new("nobody@example.org", "not-a-password");
        let err = api::auth::login(&client, &creds).await.unwrap_err();
        log_info!("live login answered: {}", err);
        assert!(!matches!(err, ApiError::Decode(_)));
    }
}
