use serde_json::Value;
use seva_kendra_shared::protocol::{ApiRequest, envelope_data};
use seva_kendra_shared::{
    CONTENT_TYPE_JSON, FILTER_ALL, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, SIGN_IN_PATH,
    STORAGE_TOKEN_KEY, STORAGE_USER_KEY,
};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::storage::{KeyValueStore, Navigator};

/// Drop parameters that mean "no constraint": blank values and `all`.
pub fn sanitize_query<I, K, V>(params: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    params
        .into_iter()
        .filter_map(|(k, v)| {
            let v = v.as_ref().trim();
            (!v.is_empty() && v != FILTER_ALL).then(|| (k.into(), v.to_string()))
        })
        .collect()
}

/// The single entry point for backend calls.
///
/// Attaches the bearer token, applies the fixed timeout and turns a 401
/// into a global sign-out.
#[derive(Clone)]
pub struct ApiClient<C, S, N> {
    config: ClientConfig,
    http: C,
    storage: S,
    navigator: N,
}

impl<C: HttpClient, S: KeyValueStore, N: Navigator> ApiClient<C, S, N> {
    pub fn new(config: ClientConfig, http: C, storage: S, navigator: N) -> Self {
        Self {
            config,
            http,
            storage,
            navigator,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn build(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        query: &[(String, String)],
    ) -> HttpRequest {
        let mut req = HttpRequest::new(&self.config.url(path), method)
            .with_timeout(self.config.timeout)
            .with_query(sanitize_query(query.iter().map(|(k, v)| (k.as_str(), v.as_str()))));

        if let Some(token) = self.storage.get(STORAGE_TOKEN_KEY).filter(|t| !t.is_empty()) {
            req = req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }
        if let Some(body) = body {
            req = req
                .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
                .with_json_body(body);
        }
        req
    }

    fn expire_session(&self) {
        self.storage.remove(STORAGE_TOKEN_KEY);
        self.storage.remove(STORAGE_USER_KEY);
        log_warn!("Session rejected by the backend, redirecting to {}", SIGN_IN_PATH);
        self.navigator.redirect(SIGN_IN_PATH);
    }

    async fn dispatch(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = req.method;
        let url = req.url.clone();
        let resp = self.http.send(req).await.inspect_err(|e| {
            log_error!("{} {} failed: {}", method.as_str(), url, e);
        })?;

        if resp.status == 401 {
            self.expire_session();
            return Err(ApiError::Unauthorized);
        }
        if !resp.is_success() {
            let err = ApiError::from_response(&resp);
            log_error!("{} {} -> {}", method.as_str(), url, err);
            return Err(err);
        }
        Ok(resp)
    }

    /// Send a request and return the decoded JSON body (`Null` when empty).
    pub async fn request_json(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        query: &[(String, String)],
    ) -> Result<Value, ApiError> {
        let resp = self.dispatch(self.build(method, path, body, query)).await?;
        if resp.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        resp.json()
    }

    /// Send a request and return the raw body, for file exports.
    pub async fn request_bytes(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Vec<u8>, ApiError> {
        let resp = self.dispatch(self.build(method, path, None, query)).await?;
        Ok(resp.body)
    }

    /// Call a fixed endpoint, decoding its payload from the response envelope.
    pub async fn call<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let body = if R::METHOD.has_body() {
            Some(serde_json::to_value(req)?)
        } else {
            None
        };
        let value = self.request_json(R::METHOD, R::PATH, body.as_ref(), &[]).await?;
        Ok(serde_json::from_value(envelope_data(&value).clone())?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::request::mock::{BASE, MockHttpClient};
    use crate::storage::{MemoryStore, RecordingNavigator};
    use serde_json::json;

    pub(crate) type TestClient = ApiClient<MockHttpClient, MemoryStore, RecordingNavigator>;

    pub(crate) fn test_client() -> (TestClient, MockHttpClient, MemoryStore, RecordingNavigator) {
        let http = MockHttpClient::new();
        let storage = MemoryStore::new();
        let navigator = RecordingNavigator::default();
        let client = ApiClient::new(
            ClientConfig::default().with_base_url(BASE),
            http.clone(),
            storage.clone(),
            navigator.clone(),
        );
        (client, http, storage, navigator)
    }

    #[test]
    fn sanitize_drops_blank_and_all() {
        let params = sanitize_query([("page", "1"), ("search", " "), ("gender", "all"), ("wardNo", " 4 ")]);
        assert_eq!(
            params,
            vec![("page".to_string(), "1".to_string()), ("wardNo".to_string(), "4".to_string())]
        );
    }

    #[tokio::test]
    async fn attaches_bearer_token_and_json_headers() {
        let (client, http, storage, _) = test_client();
        storage.set(STORAGE_TOKEN_KEY, "tok-1");
        http.mock_response(HttpMethod::Post, "/pwd", 201, json!({ "success": true }));

        client
            .request_json(HttpMethod::Post, "/pwd", Some(&json!({ "nameOfPwd": "Ravi" })), &[])
            .await
            .unwrap();

        let sent = &http.calls(HttpMethod::Post, "/pwd")[0];
        assert_eq!(sent.header("Authorization"), Some("Bearer tok-1"));
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert_eq!(sent.body.as_deref(), Some(r#"{"nameOfPwd":"Ravi"}"#));
        assert_eq!(sent.timeout, std::time::Duration::from_millis(10_000));
    }

    #[tokio::test]
    async fn no_token_means_no_authorization_header() {
        let (client, http, _, _) = test_client();
        http.mock_response(HttpMethod::Get, "/elderly", 200, json!({ "data": [] }));

        client.request_json(HttpMethod::Get, "/elderly", None, &[]).await.unwrap();

        let sent = &http.calls(HttpMethod::Get, "/elderly")[0];
        assert_eq!(sent.header("Authorization"), None);
        assert_eq!(sent.header("Content-Type"), None);
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_redirects() {
        let (client, http, storage, navigator) = test_client();
        storage.set(STORAGE_TOKEN_KEY, "stale");
        storage.set(STORAGE_USER_KEY, r#"{"name":"Asha"}"#);
        http.mock_response(HttpMethod::Get, "/schools", 401, json!({ "message": "jwt expired" }));

        let err = client
            .request_json(HttpMethod::Get, "/schools", None, &[])
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Unauthorized);
        assert!(storage.get(STORAGE_TOKEN_KEY).is_none());
        assert!(storage.get(STORAGE_USER_KEY).is_none());
        assert_eq!(*navigator.visited.borrow(), vec!["/signin".to_string()]);
    }

    #[tokio::test]
    async fn backend_failures_keep_the_session() {
        let (client, http, storage, navigator) = test_client();
        storage.set(STORAGE_TOKEN_KEY, "tok");
        http.mock_response(HttpMethod::Delete, "/pwd/9", 500, json!({ "message": "Database unavailable" }));

        let err = client
            .request_json(HttpMethod::Delete, "/pwd/9", None, &[])
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Database unavailable");
        assert_eq!(storage.get(STORAGE_TOKEN_KEY).as_deref(), Some("tok"));
        assert!(navigator.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let (client, http, _, _) = test_client();
        http.mock_error(HttpMethod::Get, "/dashboard/overview", ApiError::Timeout);

        let err = client
            .request_json(HttpMethod::Get, "/dashboard/overview", None, &[])
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Timeout);
    }

    #[tokio::test]
    async fn empty_body_is_null() {
        let (client, http, _, _) = test_client();
        http.mock_raw(HttpMethod::Delete, "/pwd/1", 204, Vec::new(), "text/plain");

        let value = client.request_json(HttpMethod::Delete, "/pwd/1", None, &[]).await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn query_is_sanitized_before_sending() {
        let (client, http, _, _) = test_client();
        http.mock_response(HttpMethod::Get, "/pwd", 200, json!({}));
        let query = vec![
            ("page".to_string(), "2".to_string()),
            ("disabilityType".to_string(), "all".to_string()),
            ("search".to_string(), String::new()),
        ];

        client.request_json(HttpMethod::Get, "/pwd", None, &query).await.unwrap();

        let sent = &http.calls(HttpMethod::Get, "/pwd")[0];
        assert_eq!(sent.query, vec![("page".to_string(), "2".to_string())]);
    }
}
