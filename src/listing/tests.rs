use super::*;
use crate::client::tests::test_client;
use crate::request::HttpMethod;
use crate::request::mock::MockHttpClient;
use crate::storage::{MemoryStore, RecordingNavigator};
use serde_json::{Map, json};
use seva_kendra_shared::form::form_text;
use seva_kendra_shared::schema::{FieldKind, FieldSpec, RecordCategory};

type TestPage = ListPage<RecordsApi<MockHttpClient, MemoryStore, RecordingNavigator>>;

fn page_for(category: RecordCategory) -> (TestPage, MockHttpClient) {
    let (client, http, _, _) = test_client();
    (ListPage::new(RecordsApi::new(client, category), 10), http)
}

fn listing_body(schema: &CategorySchema, ids: &[&str], page: u32, total: u64) -> Value {
    let rows: Vec<Value> = ids.iter().map(|id| json!({ "_id": id })).collect();
    let mut data = Map::new();
    data.insert(schema.collection_key.to_string(), Value::Array(rows));
    data.insert("pagination".into(), json!({ "page": page, "limit": 10, "total": total }));
    json!({ "success": true, "data": data })
}

fn sample(field: &FieldSpec) -> Value {
    match field.kind {
        FieldKind::Text | FieldKind::TextArea => json!("Sample"),
        FieldKind::Email => json!("field@seva.org"),
        FieldKind::Phone => json!("9876543210"),
        FieldKind::Date => json!("2024-01-15"),
        FieldKind::Number { min, .. } => json!(format!("{}", min.unwrap_or(1.0))),
        FieldKind::Select(options) => json!(options[0]),
        FieldKind::Checkbox => json!(true),
        FieldKind::Group(children) => Value::Object(complete_form(children)),
    }
}

fn complete_form(fields: &[FieldSpec]) -> FormValues {
    fields
        .iter()
        .map(|f| (f.name.to_string(), sample(f)))
        .collect()
}

fn gets(http: &MockHttpClient, schema: &CategorySchema) -> usize {
    http.calls(HttpMethod::Get, schema.endpoint).len()
}

#[tokio::test]
async fn listing_reflects_returned_rows_and_pagination() {
    for category in RecordCategory::ALL {
        let (mut page, http) = page_for(category);
        let schema = category.schema();
        http.mock_response(HttpMethod::Get, schema.endpoint, 200, listing_body(schema, &["r1", "r2"], 1, 23));

        page.refresh().await;

        let ids: Vec<_> = page.state.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2"], "{}", schema.title);
        assert_eq!(page.state.pagination.page_count(), 3);
        assert!(page.state.pagination.has_next());
        assert!(!page.state.loading);
        assert!(page.notices.is_empty());
    }
}

#[tokio::test]
async fn create_calls_once_then_refetches_once() {
    for category in RecordCategory::ALL {
        let (mut page, http) = page_for(category);
        let schema = category.schema();
        http.mock_response(HttpMethod::Get, schema.endpoint, 200, listing_body(schema, &["r1"], 1, 1));
        http.mock_response(HttpMethod::Post, schema.endpoint, 201, json!({ "success": true }));

        page.state.open_create();
        page.state.form = complete_form(schema.fields);
        let values = page.state.form.clone();

        assert!(page.submit().await, "{}", schema.title);

        let posts = http.calls(HttpMethod::Post, schema.endpoint);
        assert_eq!(posts.len(), 1);
        let sent: Value = serde_json::from_str(posts[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, schema.form_to_body(&values));
        assert_eq!(gets(&http, schema), 1);
        assert_eq!(page.state.modal, ModalState::Closed);
        assert_eq!(page.state.form, schema.blank_form());
        assert_eq!(page.notices.last().unwrap().message, format!("{} created successfully", schema.noun));
    }
}

#[tokio::test]
async fn invalid_form_stays_local() {
    let (mut page, http) = page_for(RecordCategory::Adolescents);
    page.state.open_create();
    page.state.set_field("age", json!("25"));

    assert!(!page.submit().await);

    assert_eq!(http.total_calls(), 0);
    assert_eq!(page.state.modal, ModalState::Create);
    assert_eq!(page.state.field_error("age"), Some("Age must be between 10 and 19"));
    assert!(page.notices[0].is_error());
}

#[tokio::test]
async fn failed_update_keeps_editor_open() {
    let (mut page, http) = page_for(RecordCategory::Pwd);
    let schema = page.state.schema;
    http.mock_response(HttpMethod::Put, &format!("{}/p1", schema.endpoint), 400, json!({ "message": "Ward No is invalid" }));
    let record = Record::from_value(json!({ "_id": "p1" })).unwrap();
    page.state.open_edit(record.clone());
    page.state.form = complete_form(schema.fields);

    assert!(!page.submit().await);

    assert_eq!(page.state.modal, ModalState::Edit(record));
    assert!(!page.state.submitting);
    assert_eq!(gets(&http, schema), 0);
    assert_eq!(
        page.notices[0].message,
        format!("Failed to update {}: Ward No is invalid", schema.noun.to_lowercase())
    );
}

#[tokio::test]
async fn clearing_a_field_on_edit_sends_it_blank() {
    let (mut page, http) = page_for(RecordCategory::Adolescents);
    let schema = page.state.schema;
    let path = format!("{}/a1", schema.endpoint);
    http.mock_response(HttpMethod::Get, schema.endpoint, 200, listing_body(schema, &["a1"], 1, 1));
    http.mock_response(HttpMethod::Put, &path, 200, json!({ "success": true }));
    let mut stored = complete_form(schema.fields);
    stored.insert("_id".into(), json!("a1"));
    stored.insert("schoolName".into(), json!("ZP School"));
    page.state.open_edit(Record::from_value(Value::Object(stored)).unwrap());
    assert_eq!(form_text(&page.state.form, "schoolName"), "ZP School");

    page.state.set_field("schoolName", json!(""));
    assert!(page.submit().await);

    let puts = http.calls(HttpMethod::Put, &path);
    assert_eq!(puts.len(), 1);
    let sent: Value = serde_json::from_str(puts[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(sent["schoolName"], json!(""));
    assert_eq!(sent["nameOfAdolescent"], json!("Sample"));
    assert_eq!(gets(&http, schema), 1);
}

#[tokio::test]
async fn delete_refetches_once_whatever_the_payload() {
    let replies: [(u16, &[u8], &str); 4] = [
        (200, b"{\"success\":true}", "application/json"),
        (200, b"OK", "text/plain"),
        (204, b"", "text/plain"),
        (500, b"{\"message\":\"boom\"}", "application/json"),
    ];
    for (status, body, content_type) in replies {
        let (mut page, http) = page_for(RecordCategory::Workshops);
        let schema = page.state.schema;
        let item = format!("{}/w9", schema.endpoint);
        http.mock_raw(HttpMethod::Delete, &item, status, body.to_vec(), content_type);
        http.mock_response(HttpMethod::Get, schema.endpoint, 200, listing_body(schema, &[], 1, 0));

        page.state.request_delete(Record::from_value(json!({ "_id": "w9" })).unwrap());
        page.confirm_delete().await;

        assert_eq!(http.calls(HttpMethod::Delete, &item).len(), 1, "status {status}");
        assert_eq!(gets(&http, schema), 1, "status {status}");
        assert_eq!(page.state.modal, ModalState::Closed);
    }
}

#[tokio::test]
async fn failed_fetch_keeps_previous_rows() {
    let (mut page, http) = page_for(RecordCategory::Elderly);
    let schema = page.state.schema;
    http.mock_response(HttpMethod::Get, schema.endpoint, 200, listing_body(schema, &["e1"], 1, 1));
    page.refresh().await;

    http.mock_error(HttpMethod::Get, schema.endpoint, ApiError::Transport("offline".into()));
    page.refresh().await;

    assert_eq!(page.state.records.len(), 1);
    assert!(page.notices[0].message.starts_with("Failed to fetch elderly"));
}

#[test]
fn search_and_filters_reset_to_first_page() {
    let mut state = ListState::new(RecordCategory::Beneficiaries.schema(), 10);
    state.pagination.total = 40;
    assert!(state.go_to_page(3));
    assert!(!state.go_to_page(3));
    assert!(state.go_to_page(9));
    assert_eq!(state.pagination.page, 4);

    state.set_search("  ravi ");
    assert_eq!(state.pagination.page, 1);
    assert_eq!(state.query().search, "ravi");

    state.go_to_page(2);
    state.set_filter("gender", "Female");
    assert_eq!(state.pagination.page, 1);
    state.set_filter("gender", "");
    assert!(state.filters.is_empty());

    state.set_filter("status", "Active");
    state.clear_filters();
    assert!(state.filters.is_empty() && state.search.is_empty());
}

#[test]
fn edit_prefills_input_dates() {
    let mut state = ListState::new(RecordCategory::Beneficiaries.schema(), 10);
    let record = Record::from_value(json!({
        "_id": "b1",
        "name": "Asha",
        "registrationDate": "2023-11-02T10:30:00.000Z"
    }))
    .unwrap();
    state.open_edit(record);
    assert!(state.modal.is_editing());
    assert_eq!(form_text(&state.form, "registrationDate"), "2023-11-02");

    state.close_modal();
    assert!(!state.modal.is_open());
}

#[test]
fn only_latest_debounce_ticket_fires() {
    let mut debouncer = Debouncer::default();
    let first = debouncer.schedule();
    let second = debouncer.schedule();
    assert!(!debouncer.is_current(first));
    assert!(debouncer.is_current(second));
    debouncer.cancel();
    assert!(!debouncer.is_current(second));
}
