use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::pagination::Pagination;
use crate::protocol::envelope_data;

/// A single backend document.
///
/// Records are loosely typed: the category schema decides which members
/// are shown or edited, everything else passes through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        let id = ["_id", "id"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(id_text))
            .unwrap_or_default();
        fields.remove("_id");
        Some(Self { id, fields })
    }

    /// Look up a member, following `.` separated paths into nested objects.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.fields, path)
    }

    /// Cell text for tables and detail views.
    pub fn text(&self, path: &str) -> String {
        self.get(path).map(display_value).unwrap_or_default()
    }

    /// First non-empty member among `keys`, for summary rows.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .map(|key| self.text(key))
            .find(|text| !text.is_empty())
    }

    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        if !self.id.is_empty() {
            fields.insert("_id".into(), Value::String(self.id));
        }
        Value::Object(fields)
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn lookup<'a>(fields: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.');
    let mut current = fields.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Render a JSON scalar the way the tables show it.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "Yes".into(),
        Value::Bool(false) => "No".into(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .get("name")
            .map(display_value)
            .unwrap_or_default(),
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.clone().into_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Record::from_value(value).ok_or_else(|| serde::de::Error::custom("record must be a JSON object"))
    }
}

/// One page of a category listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPage {
    pub records: Vec<Record>,
    pub pagination: Pagination,
}

impl RecordPage {
    /// Decode a listing response.
    ///
    /// The list is read from the category's collection key, then `data`,
    /// then the payload itself when it is an array. Pagination falls back
    /// to the requested window when the backend omits it.
    pub fn from_body(body: &Value, collection_key: &str, requested: Pagination) -> Self {
        let data = envelope_data(body);
        let list = [data.get(collection_key), data.get("data"), body.get(collection_key)]
            .into_iter()
            .flatten()
            .chain(std::iter::once(data))
            .find_map(Value::as_array);

        let records: Vec<Record> = list
            .map(|items| items.iter().cloned().filter_map(Record::from_value).collect())
            .unwrap_or_default();

        let pagination = [data.get("pagination"), body.get("pagination")]
            .into_iter()
            .flatten()
            .find_map(|p| serde_json::from_value::<Pagination>(p.clone()).ok())
            .unwrap_or(Pagination {
                total: records.len() as u64,
                ..requested
            })
            .normalized();

        Self { records, pagination }
    }
}

/// Decode a single-record response (`create`, `update`, `getById`).
///
/// `None` unless the response carries a document with an `_id` or `id`.
pub fn record_from_body(body: &Value, singular_key: &str) -> Option<Record> {
    let data = envelope_data(body);
    let value = data
        .get(singular_key)
        .filter(|v| v.is_object())
        .unwrap_or(data);
    Record::from_value(value.clone()).filter(|r| !r.id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_comes_from_either_key() {
        let r = Record::from_value(json!({ "_id": "abc", "name": "Ravi" })).unwrap();
        assert_eq!(r.id, "abc");
        assert!(r.get("_id").is_none());

        let r = Record::from_value(json!({ "id": 7, "name": "Ravi" })).unwrap();
        assert_eq!(r.id, "7");

        assert!(Record::from_value(json!([1, 2])).is_none());
    }

    #[test]
    fn nested_paths_and_display() {
        let r = Record::from_value(json!({
            "_id": "g1",
            "president": { "name": "Meena", "contactNo": "9876543210" },
            "active": true,
            "tags": ["a", "b"],
            "age": 14
        }))
        .unwrap();

        assert_eq!(r.text("president.name"), "Meena");
        assert_eq!(r.text("active"), "Yes");
        assert_eq!(r.text("tags"), "a, b");
        assert_eq!(r.text("age"), "14");
        assert_eq!(r.text("missing.path"), "");
    }

    #[test]
    fn listing_uses_collection_key_then_data() {
        let body = json!({
            "success": true,
            "data": {
                "adolescents": [{ "_id": "1" }, { "_id": "2" }],
                "pagination": { "page": 1, "limit": 10, "total": 23 }
            }
        });
        let page = RecordPage::from_body(&body, "adolescents", Pagination::new(10));
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.pagination.pages, 3);

        let body = json!({ "data": [{ "_id": "1" }], "pagination": { "page": 2, "limit": 5, "total": 6 } });
        let page = RecordPage::from_body(&body, "studyCenters", Pagination::new(5));
        assert_eq!(page.records[0].id, "1");
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.page_count(), 2);
    }

    #[test]
    fn listing_without_pagination_uses_request_window() {
        let body = json!([{ "_id": "x" }, { "_id": "y" }, { "_id": "z" }]);
        let page = RecordPage::from_body(&body, "pwd", Pagination::new(10));
        assert_eq!(page.records.len(), 3);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.page, 1);
    }

    #[test]
    fn single_record_unwraps_envelope() {
        let body = json!({ "data": { "legalAidService": { "_id": "l1", "clientName": "Sita" } } });
        let r = record_from_body(&body, "legalAidService").unwrap();
        assert_eq!(r.id, "l1");

        let body = json!({ "data": { "_id": "l2" } });
        assert_eq!(record_from_body(&body, "legalAidService").unwrap().id, "l2");
    }

    #[test]
    fn acknowledgement_is_not_a_record() {
        assert!(record_from_body(&json!({ "success": true }), "adolescent").is_none());
        assert!(record_from_body(&json!({ "data": { "message": "Updated" } }), "adolescent").is_none());
        assert!(record_from_body(&json!("OK"), "adolescent").is_none());
    }
}
