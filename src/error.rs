use std::fmt;

use serde_json::Value;

use crate::request::HttpResponse;

/// Shown when neither the backend nor the transport says anything useful
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Every way a call to the backend can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Rejected on the client before any request was made
    Validation(String),
    /// 401; the session has already been cleared and the user redirected
    Unauthorized,
    /// Non-2xx response, with the backend's `message` when it sent one
    Backend { status: u16, message: Option<String> },
    /// The request never produced a response
    Transport(String),
    Timeout,
    /// A 2xx response whose body did not have the expected shape
    Decode(String),
}

impl ApiError {
    pub fn from_response(resp: &HttpResponse) -> Self {
        let message = serde_json::from_slice::<Value>(&resp.body)
            .ok()
            .and_then(|body| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| body.get(*key).and_then(Value::as_str).map(str::to_owned))
            })
            .filter(|m| !m.trim().is_empty());

        ApiError::Backend {
            status: resp.status,
            message,
        }
    }

    /// Text for the user-facing notification.
    ///
    /// Backend message first, then the HTTP status, then the transport
    /// message, then the fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Backend { status, message: None } => {
                format!("Request failed with status code {}", status)
            }
            ApiError::Transport(message) if !message.trim().is_empty() => message.clone(),
            ApiError::Timeout => "The server took too long to respond".to_string(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }

    /// 401s are handled globally and never reach a page notification.
    pub fn should_notify(&self) -> bool {
        !matches!(self, ApiError::Unauthorized)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(m) => write!(f, "validation failed: {}", m),
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::Backend {
                status,
                message: Some(m),
            } => write!(f, "backend error {}: {}", status, m),
            ApiError::Backend {
                status,
                message: None,
            } => write!(f, "backend error {}", status),
            ApiError::Transport(m) => write!(f, "transport error: {}", m),
            ApiError::Timeout => write!(f, "request timed out"),
            ApiError::Decode(m) => write!(f, "unexpected response: {}", m),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            content_type: Some("application/json".into()),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn backend_message_wins() {
        let err = ApiError::from_response(&response(400, r#"{"success":false,"message":"Ward No is required"}"#));
        assert_eq!(err.user_message(), "Ward No is required");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn falls_back_to_status_transport_then_default() {
        assert_eq!(ApiError::Transport("Failed to fetch".into()).user_message(), "Failed to fetch");
        assert_eq!(ApiError::Transport(" ".into()).user_message(), FALLBACK_MESSAGE);

        let err = ApiError::from_response(&response(500, "<html>gateway</html>"));
        assert_eq!(err, ApiError::Backend { status: 500, message: None });
        assert_eq!(err.user_message(), "Request failed with status code 500");
        assert_eq!(ApiError::Decode("eof".into()).user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn unauthorized_is_silent() {
        assert!(!ApiError::Unauthorized.should_notify());
        assert!(ApiError::Timeout.should_notify());
        assert!(ApiError::Validation("x".into()).should_notify());
    }
}
