use seva_kendra_shared::session::{Credentials, Session, User};
use seva_kendra_shared::{STORAGE_TOKEN_KEY, STORAGE_USER_KEY};

use crate::api::auth;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::HttpClient;
use crate::storage::{KeyValueStore, Navigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Storage has not been read yet
    Initializing,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success(Session),
    Failed(String),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }
}

/// In-memory view of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub initialized: bool,
}

impl AuthState {
    /// Read the persisted session once.
    pub fn restore<S: KeyValueStore>(storage: &S) -> Self {
        let token = storage.get(STORAGE_TOKEN_KEY).filter(|t| !t.is_empty());
        let user = storage.get(STORAGE_USER_KEY).and_then(|raw| {
            serde_json::from_str::<User>(&raw)
                .inspect_err(|e| log_warn!("Ignoring unreadable stored user: {}", e))
                .ok()
        });
        Self {
            token,
            user,
            is_loading: false,
            error: None,
            initialized: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn status(&self) -> AuthStatus {
        match (self.initialized, self.is_authenticated()) {
            (false, _) => AuthStatus::Initializing,
            (true, true) => AuthStatus::Authenticated,
            (true, false) => AuthStatus::Unauthenticated,
        }
    }

    /// Validate credentials and mark the login as in flight.
    ///
    /// Returns the first validation message without touching the network.
    pub fn begin_login(&mut self, credentials: &Credentials) -> Result<(), String> {
        if let Some(err) = credentials.validate().first() {
            let message = err.message().to_string();
            self.error = Some(message.clone());
            return Err(message);
        }
        self.is_loading = true;
        self.error = None;
        Ok(())
    }

    pub fn complete_login<S: KeyValueStore>(
        &mut self,
        storage: &S,
        result: Result<Session, ApiError>,
    ) -> LoginOutcome {
        self.is_loading = false;
        match result {
            Ok(session) => {
                storage.set(STORAGE_TOKEN_KEY, &session.token);
                match serde_json::to_string(&session.user) {
                    Ok(user) => storage.set(STORAGE_USER_KEY, &user),
                    Err(e) => log_error!("Failed to persist user: {}", e),
                }
                self.token = Some(session.token.clone());
                self.user = Some(session.user.clone());
                self.error = None;
                self.initialized = true;
                log_info!("Signed in as {}", session.user.display_name());
                LoginOutcome::Success(session)
            }
            Err(e) => {
                let message = match e {
                    ApiError::Unauthorized => "Invalid email or password".to_string(),
                    other => other.user_message(),
                };
                log_error!("Login failed: {}", message);
                self.error = Some(message.clone());
                LoginOutcome::Failed(message)
            }
        }
    }

    pub fn logout<S: KeyValueStore>(&mut self, storage: &S) {
        storage.remove(STORAGE_TOKEN_KEY);
        storage.remove(STORAGE_USER_KEY);
        self.token = None;
        self.user = None;
        self.error = None;
        self.is_loading = false;
        self.initialized = true;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Session state bound to its storage, with an explicit lifecycle.
pub struct SessionStore<S> {
    storage: S,
    state: AuthState,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: AuthState::default(),
        }
    }

    pub fn init(&mut self) -> AuthStatus {
        self.state = AuthState::restore(&self.storage);
        self.state.status()
    }

    /// End the lifecycle: storage is cleared like `logout`, and the store
    /// returns to its pre-`init` state.
    pub fn teardown(&mut self) {
        self.state.logout(&self.storage);
        self.state = AuthState::default();
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn status(&self) -> AuthStatus {
        self.state.status()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn clear_error(&mut self) {
        self.state.clear_error();
    }

    pub fn logout(&mut self) {
        self.state.logout(&self.storage);
    }

    pub async fn login<C, S2, N>(
        &mut self,
        client: &ApiClient<C, S2, N>,
        credentials: &Credentials,
    ) -> LoginOutcome
    where
        C: HttpClient,
        S2: KeyValueStore,
        N: Navigator,
    {
        if let Err(message) = self.state.begin_login(credentials) {
            return LoginOutcome::Failed(message);
        }
        let result = auth::login(client, credentials).await;
        self.state.complete_login(&self.storage, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use crate::request::HttpMethod;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn status_moves_out_of_initializing() {
        let storage = MemoryStore::new();
        let mut store = SessionStore::new(storage.clone());
        assert_eq!(store.status(), AuthStatus::Initializing);
        assert_eq!(store.init(), AuthStatus::Unauthenticated);

        storage.set(STORAGE_TOKEN_KEY, "t");
        storage.set(STORAGE_USER_KEY, "{ broken");
        assert_eq!(store.init(), AuthStatus::Authenticated);
        assert!(store.state().user.is_none());

        store.teardown();
        assert_eq!(store.status(), AuthStatus::Initializing);
        assert_eq!(storage.get(STORAGE_TOKEN_KEY).as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn invalid_credentials_never_hit_the_network() {
        let (client, http, storage, _) = test_client();
        let mut store = SessionStore::new(storage);
        store.init();

        let outcome = store.login(&client, &Credentials::new("asha@sk.org", "12345")).await;

        assert_eq!(
            outcome,
            LoginOutcome::Failed("Password must be at least 6 characters".into())
        );
        assert_eq!(http.total_calls(), 0);
        assert!(!store.state().is_loading);
    }

    #[tokio::test]
    async fn successful_login_persists_session() {
        let (client, http, storage, _) = test_client();
        http.mock_response(
            HttpMethod::Post,
            "/auth/login",
            200,
            json!({ "success": true, "data": { "token": "jwt-1", "user": { "_id": "u1", "name": "Asha" } } }),
        );
        let mut store = SessionStore::new(storage.clone());
        store.init();

        let outcome = store.login(&client, &Credentials::new("asha@sk.org", "secret1")).await;

        assert!(outcome.is_success());
        assert_eq!(store.status(), AuthStatus::Authenticated);
        assert_eq!(storage.get(STORAGE_TOKEN_KEY).as_deref(), Some("jwt-1"));
        let user: User = serde_json::from_str(&storage.get(STORAGE_USER_KEY).unwrap()).unwrap();
        assert_eq!(user.name.as_deref(), Some("Asha"));

        let sent = &http.calls(HttpMethod::Post, "/auth/login")[0];
        assert_eq!(sent.body.as_deref(), Some(r#"{"email":"asha@sk.org","password":"secret1"}"#));
    }

    #[tokio::test]
    async fn rejected_login_reports_backend_message() {
        let (client, http, storage, _) = test_client();
        http.mock_response(
            HttpMethod::Post,
            "/auth/login",
            400,
            json!({ "success": false, "message": "Invalid credentials" }),
        );
        let mut store = SessionStore::new(storage.clone());
        store.init();

        let outcome = store.login(&client, &Credentials::new("asha@sk.org", "wrongpass")).await;

        assert_eq!(outcome, LoginOutcome::Failed("Invalid credentials".into()));
        assert_eq!(store.state().error.as_deref(), Some("Invalid credentials"));
        assert!(storage.is_empty());

        store.clear_error();
        assert!(store.state().error.is_none());
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let storage = MemoryStore::new();
        storage.set(STORAGE_TOKEN_KEY, "t");
        storage.set(STORAGE_USER_KEY, r#"{"name":"Asha"}"#);
        let mut store = SessionStore::new(storage.clone());
        store.init();

        store.logout();

        assert_eq!(store.status(), AuthStatus::Unauthenticated);
        assert!(storage.is_empty());
    }

    #[test]
    fn teardown_clears_storage_and_resets() {
        let storage = MemoryStore::new();
        storage.set(STORAGE_TOKEN_KEY, "t");
        storage.set(STORAGE_USER_KEY, r#"{"name":"Asha"}"#);
        let mut store = SessionStore::new(storage.clone());
        assert_eq!(store.init(), AuthStatus::Authenticated);

        store.teardown();

        assert!(storage.is_empty());
        assert!(!store.is_authenticated());
        assert_eq!(store.status(), AuthState::default().status());
        assert_eq!(store.init(), AuthStatus::Unauthenticated);
    }
}
