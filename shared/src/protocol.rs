use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::dashboard::{Activity, OverviewStats};
use crate::session::{Credentials, Session};

/// HTTP methods used by the backend API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Whether the request carries a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// A fixed endpoint with a known payload type.
///
/// The response type is decoded from the `data` member of the backend
/// envelope when present, otherwise from the whole body.
pub trait ApiRequest: Serialize {
    type Response: DeserializeOwned;
    const PATH: &'static str;
    const METHOD: HttpMethod;
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for Credentials {
    type Response = Session;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Headline counters for the dashboard
#[derive(Debug, Serialize, Deserialize)]
pub struct OverviewRequest;

impl ApiRequest for OverviewRequest {
    type Response = OverviewStats;
    const PATH: &'static str = "/dashboard/overview";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Latest activity feed
#[derive(Debug, Serialize, Deserialize)]
pub struct RecentActivityRequest;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecentActivity {
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl ApiRequest for RecentActivityRequest {
    type Response = RecentActivity;
    const PATH: &'static str = "/dashboard/recent-activity";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Extract the payload from the backend's `{ success, message, data }` envelope.
pub fn envelope_data(body: &serde_json::Value) -> &serde_json::Value {
    match body.get("data") {
        Some(data) if !data.is_null() => data,
        _ => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_prefers_data_member() {
        let body = json!({ "success": true, "data": { "total": 4 } });
        assert_eq!(envelope_data(&body), &json!({ "total": 4 }));

        let bare = json!({ "token": "t" });
        assert_eq!(envelope_data(&bare), &bare);

        let null_data = json!({ "data": null, "token": "t" });
        assert_eq!(envelope_data(&null_data), &null_data);
    }

    #[test]
    fn only_mutations_carry_bodies() {
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
    }
}
