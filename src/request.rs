use std::time::Duration;

use serde::de::DeserializeOwned;

pub use seva_kendra_shared::protocol::HttpMethod;

use crate::error::ApiError;

// =========================================================
// HTTP seam
// =========================================================

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            timeout: Duration::from_millis(crate::config::DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(key));
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_json_body(mut self, body: &serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Transport abstraction.
///
/// `?Send` because the browser fetch future holds JS handles.
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

// =========================================================
// Test transports
// =========================================================

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    pub const BASE: &str = "http://api.test";

    pub fn url(path: &str) -> String {
        format!("{BASE}{path}")
    }

    type Reply = Result<HttpResponse, ApiError>;

    /// Canned responses keyed by `METHOD url`; every request is recorded.
    #[derive(Clone, Default)]
    pub struct MockHttpClient {
        routes: Rc<RefCell<HashMap<String, Reply>>>,
        pub requests: Rc<RefCell<Vec<HttpRequest>>>,
    }

    fn key(method: HttpMethod, url: &str) -> String {
        format!("{} {}", method.as_str(), url)
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn mock_response(&self, method: HttpMethod, path: &str, status: u16, body: Value) {
            self.mock_raw(method, path, status, body.to_string().into_bytes(), "application/json");
        }

        pub fn mock_raw(&self, method: HttpMethod, path: &str, status: u16, body: Vec<u8>, content_type: &str) {
            let reply = Ok(HttpResponse {
                status,
                content_type: Some(content_type.to_string()),
                body,
            });
            self.routes.borrow_mut().insert(key(method, &url(path)), reply);
        }

        pub fn mock_error(&self, method: HttpMethod, path: &str, error: ApiError) {
            self.routes.borrow_mut().insert(key(method, &url(path)), Err(error));
        }

        pub fn calls(&self, method: HttpMethod, path: &str) -> Vec<HttpRequest> {
            let target = url(path);
            self.requests
                .borrow()
                .iter()
                .filter(|r| r.method == method && r.url == target)
                .cloned()
                .collect()
        }

        pub fn total_calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait::async_trait(?Send)]
    impl HttpClient for MockHttpClient {
        async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
            let reply = self.routes.borrow().get(&key(req.method, &req.url)).cloned();
            self.requests.borrow_mut().push(req);
            reply.unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 404,
                    content_type: Some("application/json".into()),
                    body: json!({ "message": "Route not found" }).to_string().into_bytes(),
                })
            })
        }
    }
}

/// Native transport for smoke tests against a live backend.
#[cfg(test)]
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(test)]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        };

        let mut builder = self
            .client
            .request(method, &req.url)
            .query(&req.query)
            .timeout(req.timeout);
        for (k, v) in &req.headers {
            builder = builder.header(k, v);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .to_vec();

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_replace_case_insensitively() {
        let req = HttpRequest::new("http://x", HttpMethod::Get)
            .with_header("Authorization", "Bearer a")
            .with_header("authorization", "Bearer b");
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.header("AUTHORIZATION"), Some("Bearer b"));
    }

    #[test]
    fn decode_errors_are_typed() {
        let resp = HttpResponse {
            status: 200,
            content_type: None,
            body: b"not json".to_vec(),
        };
        assert!(matches!(resp.json::<serde_json::Value>(), Err(ApiError::Decode(_))));
        assert_eq!(resp.text(), "not json");
    }
}
