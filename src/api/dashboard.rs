use serde_json::Value;
use seva_kendra_shared::dashboard::{Activity, CategoryCount, ModuleStats, OverviewStats};
use seva_kendra_shared::protocol::{ApiRequest, OverviewRequest, RecentActivityRequest, envelope_data};
use seva_kendra_shared::report::{DateRange, OverviewReport};
use seva_kendra_shared::schema::RecordCategory;

use crate::api::records::RecordsApi;
use crate::api::reports::ReportsApi;
use crate::client::ApiClient;
use crate::concurrent::join_all;
use crate::error::ApiError;
use crate::request::HttpClient;
use crate::storage::{KeyValueStore, Navigator};

/// Everything the dashboard page shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub overview: OverviewStats,
    pub modules: ModuleStats,
    pub activities: Vec<Activity>,
    /// Absent when the overview report endpoint failed
    pub report: Option<OverviewReport>,
}

#[derive(Clone)]
pub struct DashboardApi<C, S, N> {
    client: ApiClient<C, S, N>,
}

impl<C, S, N> DashboardApi<C, S, N>
where
    C: HttpClient + Clone,
    S: KeyValueStore + Clone,
    N: Navigator + Clone,
{
    pub fn new(client: ApiClient<C, S, N>) -> Self {
        Self { client }
    }

    pub async fn overview(&self) -> Result<OverviewStats, ApiError> {
        self.client.call(&OverviewRequest).await
    }

    /// Accepts either `{ activities: [...] }` or a bare array.
    pub async fn recent_activity(&self) -> Result<Vec<Activity>, ApiError> {
        let body = self
            .client
            .request_json(RecentActivityRequest::METHOD, RecentActivityRequest::PATH, None, &[])
            .await?;
        let data = envelope_data(&body);
        let list = match data {
            Value::Array(_) => data,
            _ => data.get("activities").unwrap_or(&Value::Null),
        };
        if list.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(list.clone())?)
    }

    /// One `limit=1` listing per category, all in flight at once.
    ///
    /// A failing category counts as zero and is flagged; the rest still land.
    pub async fn module_stats(&self) -> ModuleStats {
        let requests = RecordCategory::ALL.into_iter().map(|category| {
            let api = RecordsApi::new(self.client.clone(), category);
            async move { (category, api.count().await) }
        });

        let counts = join_all(requests)
            .await
            .into_iter()
            .map(|(category, result)| match result {
                Ok(count) => CategoryCount {
                    category,
                    count,
                    failed: false,
                },
                Err(err) => {
                    log_warn!("Count for {} unavailable: {}", category.schema().title, err);
                    CategoryCount {
                        category,
                        count: 0,
                        failed: true,
                    }
                }
            })
            .collect();
        ModuleStats { counts }
    }

    /// Load the whole dashboard. Only the headline overview is mandatory.
    pub async fn load(&self, range: DateRange) -> Result<DashboardData, ApiError> {
        let overview = self.overview().await?;
        let reports = ReportsApi::new(self.client.clone());
        let (modules, activities, report) = futures::join!(
            self.module_stats(),
            self.recent_activity(),
            reports.overview(range)
        );
        let activities = activities
            .inspect_err(|e| log_warn!("Recent activity unavailable: {}", e))
            .unwrap_or_default();
        let report = report
            .inspect_err(|e| log_warn!("Overview report unavailable: {}", e))
            .ok();
        Ok(DashboardData {
            overview,
            modules,
            activities,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use crate::request::HttpMethod;
    use crate::request::mock::MockHttpClient;
    use crate::storage::{MemoryStore, RecordingNavigator};
    use serde_json::json;
    use seva_kendra_shared::schema::Section;

    type TestDashboard = DashboardApi<MockHttpClient, MemoryStore, RecordingNavigator>;

    fn dashboard() -> (TestDashboard, MockHttpClient) {
        let (client, http, _, _) = test_client();
        (DashboardApi::new(client), http)
    }

    fn count_paths() -> impl Iterator<Item = (HttpMethod, &'static str)> {
        RecordCategory::ALL
            .into_iter()
            .map(|c| (HttpMethod::Get, c.schema().endpoint))
    }

    fn total(n: u64) -> Value {
        json!({ "success": true, "data": { "pagination": { "page": 1, "limit": 1, "total": n } } })
    }

    #[tokio::test]
    async fn one_failing_category_defaults_to_zero() {
        let (api, http) = dashboard();
        for (method, path) in count_paths() {
            http.mock_response(method, path, 200, total(5));
        }
        let failing = RecordCategory::Pwd.schema().endpoint;
        http.mock_error(HttpMethod::Get, failing, ApiError::Transport("reset".into()));

        let stats = api.module_stats().await;

        assert_eq!(stats.counts.len(), RecordCategory::ALL.len());
        assert_eq!(stats.count(RecordCategory::Pwd), 0);
        assert_eq!(stats.failed().collect::<Vec<_>>(), [RecordCategory::Pwd]);
        assert_eq!(stats.count(RecordCategory::Elderly), 5);
        let health = Section::Health.categories().count() as u64;
        assert_eq!(stats.section_total(Section::Health), (health - 1) * 5);
        for (_, path) in count_paths() {
            let sent = &http.calls(HttpMethod::Get, path)[0];
            assert_eq!(sent.query_value("limit"), Some("1"));
        }
    }

    #[tokio::test]
    async fn load_tolerates_optional_sections() {
        let (api, http) = dashboard();
        http.mock_response(
            HttpMethod::Get,
            "/dashboard/overview",
            200,
            json!({ "data": { "totalBeneficiaries": 120, "activeCases": 7 } }),
        );
        http.mock_response(
            HttpMethod::Get,
            "/dashboard/recent-activity",
            200,
            json!({ "data": [{ "_id": "x", "message": "Camp held", "type": "health_camp" }] }),
        );

        let data = api.load(DateRange::default()).await.unwrap();

        assert_eq!(data.overview.total_beneficiaries, 120);
        assert_eq!(data.activities[0].description, "Camp held");
        assert_eq!(data.activities[0].badge(), "HEALTH CAMP");
        assert!(data.report.is_none());
        assert_eq!(data.modules.failed().count(), RecordCategory::ALL.len());
    }

    #[tokio::test]
    async fn load_fails_without_overview() {
        let (api, http) = dashboard();
        http.mock_response(HttpMethod::Get, "/dashboard/overview", 500, json!({ "message": "db down" }));
        let err = api.load(DateRange::Last7Days).await.unwrap_err();
        assert_eq!(err.user_message(), "db down");
        assert_eq!(http.total_calls(), 1);
    }

    #[tokio::test]
    async fn activity_wrapped_in_object() {
        let (api, http) = dashboard();
        http.mock_response(
            HttpMethod::Get,
            "/dashboard/recent-activity",
            200,
            json!({ "data": { "activities": [{ "id": "a", "description": "Added", "type": "create" }] } }),
        );
        let list = api.recent_activity().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "a");
    }
}
