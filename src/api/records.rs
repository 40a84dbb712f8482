use std::collections::BTreeMap;

use serde_json::Value;
use seva_kendra_shared::form::FormValues;
use seva_kendra_shared::pagination::Pagination;
use seva_kendra_shared::record::{Record, RecordPage, record_from_body};
use seva_kendra_shared::protocol::envelope_data;
use seva_kendra_shared::schema::{CategorySchema, RecordCategory};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::{HttpClient, HttpMethod};
use crate::storage::{KeyValueStore, Navigator};

/// Listing parameters: paging window, search term and filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }

    /// Raw parameters; the client drops blank and `all` values.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("search".to_string(), self.search.clone()),
        ];
        params.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        params
    }
}

/// Distinct values the backend offers for each remote filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions(pub BTreeMap<String, Vec<String>>);

impl FilterOptions {
    pub fn from_body(body: &Value) -> Self {
        let Some(data) = envelope_data(body).as_object() else {
            return Self::default();
        };
        let options = data
            .iter()
            .filter_map(|(key, value)| {
                let values = value
                    .as_array()?
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) if !s.is_empty() => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                Some((key.clone(), values))
            })
            .collect();
        Self(options)
    }

    pub fn get(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// CRUD operations for one record category.
#[derive(Clone)]
pub struct RecordsApi<C, S, N> {
    client: ApiClient<C, S, N>,
    schema: &'static CategorySchema,
}

impl<C: HttpClient, S: KeyValueStore, N: Navigator> RecordsApi<C, S, N> {
    pub fn new(client: ApiClient<C, S, N>, category: RecordCategory) -> Self {
        Self {
            client,
            schema: category.schema(),
        }
    }

    pub fn schema(&self) -> &'static CategorySchema {
        self.schema
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.schema.endpoint, id)
    }

    pub async fn get_all(&self, query: &ListQuery) -> Result<RecordPage, ApiError> {
        let body = self
            .client
            .request_json(HttpMethod::Get, self.schema.endpoint, None, &query.params())
            .await?;
        let requested = Pagination {
            page: query.page,
            limit: query.limit,
            ..Pagination::default()
        };
        Ok(RecordPage::from_body(&body, self.schema.collection_key, requested))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Record, ApiError> {
        let body = self
            .client
            .request_json(HttpMethod::Get, &self.item_path(id), None, &[])
            .await?;
        record_from_body(&body, self.schema.singular_key)
            .ok_or_else(|| ApiError::Decode(format!("no {} in response", self.schema.singular_key)))
    }

    /// Create a record. The echoed document is optional; callers refetch anyway.
    pub async fn create(&self, values: &FormValues) -> Result<Record, ApiError> {
        let payload = self.schema.form_to_body(values);
        let body = self
            .client
            .request_json(HttpMethod::Post, self.schema.endpoint, Some(&payload), &[])
            .await?;
        Ok(record_from_body(&body, self.schema.singular_key).unwrap_or_default())
    }

    pub async fn update(&self, id: &str, values: &FormValues) -> Result<Record, ApiError> {
        let payload = self.schema.form_to_body(values);
        let body = self
            .client
            .request_json(HttpMethod::Put, &self.item_path(id), Some(&payload), &[])
            .await?;
        Ok(record_from_body(&body, self.schema.singular_key).unwrap_or_else(|| Record {
            id: id.to_string(),
            ..Record::default()
        }))
    }

    /// Delete a record; whatever the backend echoes is ignored.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .request_bytes(HttpMethod::Delete, &self.item_path(id), &[])
            .await
            .map(|_| ())
    }

    pub async fn filter_options(&self) -> Result<FilterOptions, ApiError> {
        let Some(path) = self.schema.filter_options_endpoint() else {
            return Ok(FilterOptions::default());
        };
        let body = self.client.request_json(HttpMethod::Get, &path, None, &[]).await?;
        Ok(FilterOptions::from_body(&body))
    }

    /// Total number of records, fetched with a one-row page.
    pub async fn count(&self) -> Result<u64, ApiError> {
        let page = self.get_all(&ListQuery::new(1, 1)).await?;
        Ok(page.pagination.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use crate::request::mock::MockHttpClient;
    use crate::storage::{MemoryStore, RecordingNavigator};
    use seva_kendra_shared::form::form_set;
    use serde_json::json;

    type TestRecords = RecordsApi<MockHttpClient, MemoryStore, RecordingNavigator>;

    fn adolescents() -> (TestRecords, MockHttpClient) {
        let (client, http, _, _) = test_client();
        (RecordsApi::new(client, RecordCategory::Adolescents), http)
    }

    #[tokio::test]
    async fn list_sends_window_search_and_filters() {
        let (api, http) = adolescents();
        http.mock_response(
            HttpMethod::Get,
            "/adolescents",
            200,
            json!({ "data": { "adolescents": [{ "_id": "a1", "nameOfAdolescent": "Priya" }], "pagination": { "page": 2, "limit": 10, "total": 11 } } }),
        );
        let mut query = ListQuery::new(2, 10);
        query.search = "pri".into();
        query.filters.insert("gender".into(), "Female".into());
        query.filters.insert("educationStatus".into(), "all".into());

        let page = api.get_all(&query).await.unwrap();

        assert_eq!(page.records.len(), 1);
        assert_eq!(page.pagination.page_count(), 2);
        let sent = &http.calls(HttpMethod::Get, "/adolescents")[0];
        assert_eq!(sent.query_value("page"), Some("2"));
        assert_eq!(sent.query_value("search"), Some("pri"));
        assert_eq!(sent.query_value("gender"), Some("Female"));
        assert_eq!(sent.query_value("educationStatus"), None);
    }

    #[tokio::test]
    async fn update_puts_converted_body() {
        let (api, http) = adolescents();
        http.mock_response(HttpMethod::Put, "/adolescents/a1", 200, json!({ "success": true }));
        let mut values = api.schema().blank_form();
        form_set(&mut values, "nameOfAdolescent", json!("Priya"));
        form_set(&mut values, "age", json!("15"));

        let record = api.update("a1", &values).await.unwrap();

        assert_eq!(record.id, "a1");
        let sent = &http.calls(HttpMethod::Put, "/adolescents/a1")[0];
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, api.schema().form_to_body(&values));
        assert_eq!(body["nameOfAdolescent"], json!("Priya"));
        assert_eq!(body["age"], json!(15));
        assert_eq!(body["schoolName"], json!(""));
    }

    #[tokio::test]
    async fn create_without_echoed_document() {
        let (api, http) = adolescents();
        http.mock_response(HttpMethod::Post, "/adolescents", 201, json!({ "success": true }));
        let record = api.create(&api.schema().blank_form()).await.unwrap();
        assert_eq!(record, Record::default());

        http.mock_response(
            HttpMethod::Post,
            "/adolescents",
            201,
            json!({ "data": { "adolescent": { "_id": "a9", "nameOfAdolescent": "Asha" } } }),
        );
        let record = api.create(&api.schema().blank_form()).await.unwrap();
        assert_eq!(record.id, "a9");
        assert_eq!(record.text("nameOfAdolescent"), "Asha");
    }

    #[tokio::test]
    async fn delete_ignores_response_shape() {
        let (api, http) = adolescents();
        http.mock_raw(HttpMethod::Delete, "/adolescents/a1", 200, b"OK".to_vec(), "text/plain");
        assert!(api.delete("a1").await.is_ok());

        http.mock_response(HttpMethod::Delete, "/adolescents/a1", 404, json!({ "message": "Record not found" }));
        let err = api.delete("a1").await.unwrap_err();
        assert_eq!(err.user_message(), "Record not found");
    }

    #[tokio::test]
    async fn filter_options_only_where_supported() {
        let (client, http, _, _) = test_client();
        http.mock_response(
            HttpMethod::Get,
            "/sc-students/filter-options",
            200,
            json!({ "data": { "wardNumbers": ["1", "2", 3], "genders": ["Male", ""] } }),
        );
        let api = RecordsApi::new(client.clone(), RecordCategory::StudyCenterStudents);
        let options = api.filter_options().await.unwrap();
        assert_eq!(options.get("wardNumbers"), ["1", "2", "3"]);
        assert_eq!(options.get("genders"), ["Male"]);
        assert!(options.get("projectResponsibles").is_empty());

        let pwd = RecordsApi::new(client, RecordCategory::Pwd);
        assert_eq!(pwd.filter_options().await.unwrap(), FilterOptions::default());
        assert_eq!(http.total_calls(), 1);
    }
}
