use seva_kendra_shared::session::{Credentials, Session};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::HttpClient;
use crate::storage::{KeyValueStore, Navigator};

/// `POST /auth/login`
pub async fn login<C, S, N>(
    client: &ApiClient<C, S, N>,
    credentials: &Credentials,
) -> Result<Session, ApiError>
where
    C: HttpClient,
    S: KeyValueStore,
    N: Navigator,
{
    let credentials = Credentials::new(credentials.email.trim(), credentials.password.as_str());
    let session = client.call(&credentials).await?;
    if session.token.is_empty() {
        return Err(ApiError::Decode("login response carried no token".into()));
    }
    Ok(session)
}
