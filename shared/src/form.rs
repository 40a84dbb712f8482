//! Form values for the create/edit dialogs.
//!
//! Inputs are kept as JSON values keyed by field name (nested groups are
//! nested objects). Conversion to the request body happens on submit.

use serde_json::{Map, Number, Value};

use crate::date;
use crate::record::{Record, display_value, lookup};
use crate::schema::{CategorySchema, FieldKind, FieldSpec};

pub type FormValues = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub fn form_get<'a>(values: &'a FormValues, path: &str) -> Option<&'a Value> {
    lookup(values, path)
}

pub fn form_text(values: &FormValues, path: &str) -> String {
    form_get(values, path).map(display_value).unwrap_or_default()
}

pub fn form_flag(values: &FormValues, path: &str) -> bool {
    form_get(values, path)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Set a value, creating intermediate objects along a dotted path.
pub fn form_set(values: &mut FormValues, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            values.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = values
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                form_set(child, rest, value);
            }
        }
    }
}

/// Ten digits starting with 6, 7, 8 or 9.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == 10
        && value.starts_with(['6', '7', '8', '9'])
        && value.bytes().all(|b| b.is_ascii_digit())
}

fn blank_fields(fields: &[FieldSpec]) -> FormValues {
    fields
        .iter()
        .map(|field| {
            let value = match field.kind {
                FieldKind::Checkbox => Value::Bool(false),
                FieldKind::Group(children) => Value::Object(blank_fields(children)),
                _ => Value::String(String::new()),
            };
            (field.name.to_string(), value)
        })
        .collect()
}

fn fields_from(fields: &[FieldSpec], source: &Map<String, Value>) -> FormValues {
    let mut values = blank_fields(fields);
    for field in fields {
        let Some(current) = source.get(field.name) else {
            continue;
        };
        let value = match field.kind {
            FieldKind::Checkbox => Value::Bool(current.as_bool().unwrap_or(false)),
            FieldKind::Group(children) => match current {
                Value::Object(child) => Value::Object(fields_from(children, child)),
                _ => Value::Object(blank_fields(children)),
            },
            FieldKind::Date => Value::String(date::to_input_date(current)),
            _ => Value::String(display_value(current)),
        };
        values.insert(field.name.to_string(), value);
    }
    values
}

fn check_fields(fields: &[FieldSpec], values: &FormValues, prefix: &str, errors: &mut Vec<FieldError>) {
    for field in fields {
        let path = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{prefix}.{}", field.name)
        };

        if let FieldKind::Group(children) = field.kind {
            let empty = Map::new();
            let child = values
                .get(field.name)
                .and_then(Value::as_object)
                .unwrap_or(&empty);
            check_fields(children, child, &path, errors);
            continue;
        }
        if field.kind == FieldKind::Checkbox {
            continue;
        }

        let text = values.get(field.name).map(display_value).unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            if field.required {
                errors.push(FieldError::new(&path, format!("{} is required", field.label)));
            }
            continue;
        }

        match field.kind {
            FieldKind::Phone if !is_valid_phone(text) => {
                errors.push(FieldError::new(
                    &path,
                    format!("{} must be a valid 10-digit mobile number", field.label),
                ));
            }
            FieldKind::Email if !text.contains('@') => {
                errors.push(FieldError::new(&path, "Please enter a valid email address"));
            }
            FieldKind::Date if date::parse_input_date(text).is_none() => {
                errors.push(FieldError::new(&path, format!("{} must be a valid date", field.label)));
            }
            FieldKind::Select(options) if !options.contains(&text) => {
                errors.push(FieldError::new(&path, format!("Please select a valid {}", field.label)));
            }
            FieldKind::Number { min, max } => match text.parse::<f64>() {
                Err(_) => errors.push(FieldError::new(&path, format!("{} must be a number", field.label))),
                Ok(n) if min.is_some_and(|m| n < m) || max.is_some_and(|m| n > m) => {
                    let message = match (min, max) {
                        (Some(lo), Some(hi)) => format!("{} must be between {lo} and {hi}", field.label),
                        (Some(lo), None) => format!("{} must be at least {lo}", field.label),
                        (None, Some(hi)) => format!("{} must be at most {hi}", field.label),
                        (None, None) => format!("{} is out of range", field.label),
                    };
                    errors.push(FieldError::new(&path, message));
                }
                Ok(_) => {}
            },
            _ => {}
        }
    }
}

fn number_value(text: &str) -> Option<Value> {
    let n = text.parse::<f64>().ok()?;
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Some(Value::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number)
    }
}

fn body_fields(fields: &[FieldSpec], values: &FormValues) -> Map<String, Value> {
    let empty = Map::new();
    let mut body = Map::new();
    for field in fields {
        let value = values.get(field.name).unwrap_or(&Value::Null);
        let converted = match field.kind {
            FieldKind::Checkbox => Value::Bool(value.as_bool().unwrap_or(false)),
            FieldKind::Group(children) => {
                Value::Object(body_fields(children, value.as_object().unwrap_or(&empty)))
            }
            FieldKind::Number { .. } => {
                let text = display_value(value);
                let text = text.trim();
                if text.is_empty() {
                    Value::Null
                } else {
                    number_value(text).unwrap_or_else(|| Value::String(text.to_string()))
                }
            }
            _ => Value::String(display_value(value).trim().to_string()),
        };
        body.insert(field.name.to_string(), converted);
    }
    body
}

impl CategorySchema {
    pub fn blank_form(&self) -> FormValues {
        blank_fields(self.fields)
    }

    /// Pre-fill the edit form, normalizing dates to `YYYY-MM-DD`.
    pub fn form_from_record(&self, record: &Record) -> FormValues {
        fields_from(self.fields, &record.fields)
    }

    pub fn validate_form(&self, values: &FormValues) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_fields(self.fields, values, "", &mut errors);
        errors
    }

    /// Build the create/update body. Every field is sent so a cleared input
    /// overwrites the stored value: text is trimmed (`""` when blank), numbers
    /// are numeric (`null` when blank), groups are always objects.
    pub fn form_to_body(&self, values: &FormValues) -> Value {
        Value::Object(body_fields(self.fields, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RecordCategory;
    use serde_json::json;

    #[test]
    fn edit_form_normalizes_dates() {
        let schema = RecordCategory::Adolescents.schema();
        let record = Record::from_value(json!({
            "_id": "a1",
            "nameOfAdolescent": "Priya",
            "age": 14,
            "dateOfReporting": "2024-03-05T00:00:00.000Z"
        }))
        .unwrap();

        let form = schema.form_from_record(&record);
        assert_eq!(form_text(&form, "dateOfReporting"), "2024-03-05");
        assert_eq!(form_text(&form, "age"), "14");
        assert_eq!(form_text(&form, "schoolName"), "");
    }

    #[test]
    fn adolescent_age_and_phone_rules() {
        let schema = RecordCategory::Adolescents.schema();
        let mut form = schema.blank_form();
        form_set(&mut form, "nameOfAdolescent", json!("Priya"));
        form_set(&mut form, "gender", json!("Female"));
        form_set(&mut form, "wardNo", json!("12"));
        form_set(&mut form, "age", json!("22"));
        form_set(&mut form, "contactNo", json!("5123456789"));

        let errors = schema.validate_form(&form);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["age", "contactNo"]);
        assert_eq!(errors[0].message, "Age must be between 10 and 19");

        form_set(&mut form, "age", json!("15"));
        form_set(&mut form, "contactNo", json!("9876543210"));
        assert!(schema.validate_form(&form).is_empty());
    }

    #[test]
    fn required_fields_reported() {
        let schema = RecordCategory::Workshops.schema();
        let errors = schema.validate_form(&schema.blank_form());
        assert!(errors.iter().any(|e| e.message == "Workshop Title is required"));
        assert!(errors.iter().any(|e| e.field == "dateScheduled"));
    }

    #[test]
    fn body_converts_numbers_and_keeps_blanks() {
        let schema = RecordCategory::CbuCbo.schema();
        let mut form = schema.blank_form();
        form_set(&mut form, "groupName", json!("  Mahila Mandal "));
        form_set(&mut form, "totalMembers", json!("12"));
        form_set(&mut form, "savingsAmount", json!("1500.50"));
        form_set(&mut form, "president.name", json!("Meena"));

        let body = schema.form_to_body(&form);
        assert_eq!(body["groupName"], json!("Mahila Mandal"));
        assert_eq!(body["totalMembers"], json!(12));
        assert_eq!(body["savingsAmount"], json!(1500.5));
        assert_eq!(body["president"]["name"], json!("Meena"));
        assert_eq!(body["president"]["contactNo"], json!(""));
        assert!(body["secretary"].is_object());
        assert_eq!(body["habitation"], json!(""));
    }

    #[test]
    fn cleared_inputs_are_sent_blank() {
        let schema = RecordCategory::Adolescents.schema();
        let record = Record::from_value(json!({
            "_id": "a1",
            "nameOfAdolescent": "Priya",
            "schoolName": "ZP School",
            "age": 14
        }))
        .unwrap();
        let mut form = schema.form_from_record(&record);
        form_set(&mut form, "schoolName", json!(""));
        form_set(&mut form, "age", json!(" "));

        let body = schema.form_to_body(&form);
        assert_eq!(body["schoolName"], json!(""));
        assert_eq!(body["age"], Value::Null);
        assert_eq!(body["nameOfAdolescent"], json!("Priya"));
    }

    #[test]
    fn checkbox_groups_round_out() {
        let schema = RecordCategory::Dropouts.schema();
        let mut form = schema.blank_form();
        assert!(!form_flag(&form, "documentsCheck.polioCard"));
        form_set(&mut form, "documentsCheck.polioCard", json!(true));

        let body = schema.form_to_body(&form);
        assert_eq!(body["documentsCheck"]["polioCard"], json!(true));
        assert_eq!(body["documentsCheck"]["birthCertificate"], json!(false));
    }

    #[test]
    fn phone_pattern() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("6000000000"));
        assert!(!is_valid_phone("5876543210"));
        assert!(!is_valid_phone("98765"));
        assert!(!is_valid_phone("98765432a0"));
    }
}
