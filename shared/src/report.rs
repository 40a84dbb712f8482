use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::date::parse_input_date;
use crate::protocol::envelope_data;
use crate::record::display_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportModule {
    Education,
    Health,
}

impl ReportModule {
    pub const ALL: [ReportModule; 2] = [ReportModule::Education, ReportModule::Health];

    pub fn slug(&self) -> &'static str {
        match self {
            ReportModule::Education => "education",
            ReportModule::Health => "health",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportModule::Education => "Education",
            ReportModule::Health => "Health",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.slug() == slug)
    }

    /// `(value, label)` pairs offered by the category selector.
    pub fn categories(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ReportModule::Education => &[
                ("study-centers", "Study Centers"),
                ("sc-students", "SC Students"),
                ("dropouts", "Dropouts"),
                ("schools", "Schools"),
                ("competitive-exams", "Competitive Exams"),
                ("board-preparation", "Board Preparation"),
            ],
            ReportModule::Health => &[
                ("health-camps", "Health Camps"),
                ("elderly", "Elderly Care"),
                ("mother-child", "Mother & Child"),
                ("pwd", "Persons with Disabilities"),
                ("adolescents", "Adolescents"),
                ("tuberculosis", "Tuberculosis"),
                ("hiv", "HIV/AIDS"),
                ("leprosy", "Leprosy"),
                ("addiction", "Addiction"),
                ("other-diseases", "Other Diseases"),
            ],
        }
    }

    pub fn filters(&self) -> &'static [ReportFilter] {
        match self {
            ReportModule::Education => EDUCATION_FILTERS,
            ReportModule::Health => HEALTH_FILTERS,
        }
    }

    pub fn endpoint(&self, action: &str) -> String {
        format!("/reports/{}/{action}", self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Summary,
    Detailed,
    Analytics,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [ReportType::Summary, ReportType::Detailed, ReportType::Analytics];

    pub fn slug(&self) -> &'static str {
        match self {
            ReportType::Summary => "summary",
            ReportType::Detailed => "detailed",
            ReportType::Analytics => "analytics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Summary => "Summary Report",
            ReportType::Detailed => "Detailed Report",
            ReportType::Analytics => "Analytics Report",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn slug(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Excel => "Excel",
        }
    }
}

// =========================================================
// Module-specific filters
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFilterKind {
    Text,
    /// `(value, label)` pairs; `all` is always offered first
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFilter {
    /// Query parameter name
    pub param: &'static str,
    pub label: &'static str,
    pub kind: ReportFilterKind,
}

const fn text_filter(param: &'static str, label: &'static str) -> ReportFilter {
    ReportFilter {
        param,
        label,
        kind: ReportFilterKind::Text,
    }
}

const fn select_filter(
    param: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> ReportFilter {
    ReportFilter {
        param,
        label,
        kind: ReportFilterKind::Select(options),
    }
}

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("active", "Active"),
    ("inactive", "Inactive"),
    ("completed", "Completed"),
    ("pending", "Pending"),
];

const EDUCATION_FILTERS: &[ReportFilter] = &[
    text_filter("wardNo", "Ward No"),
    text_filter("habitation", "Habitation"),
    text_filter("centerName", "Center Name"),
    text_filter("studentName", "Student Name"),
    text_filter("schoolName", "School Name"),
    select_filter(
        "examType",
        "Exam Type",
        &[
            ("upsc", "UPSC"),
            ("ssc", "SSC"),
            ("railway", "Railway"),
            ("banking", "Banking"),
            ("state-pcs", "State PCS"),
        ],
    ),
    select_filter(
        "boardType",
        "Board Type",
        &[("cbse", "CBSE"), ("state", "State Board"), ("icse", "ICSE")],
    ),
    select_filter("status", "Status", STATUS_OPTIONS),
    select_filter("class", "Class", &[("10", "Class 10"), ("12", "Class 12")]),
];

const HEALTH_FILTERS: &[ReportFilter] = &[
    text_filter("wardNo", "Ward No"),
    text_filter("habitation", "Habitation"),
    text_filter("patientName", "Patient Name"),
    select_filter(
        "diseaseType",
        "Disease Type",
        &[
            ("chronic", "Chronic"),
            ("acute", "Acute"),
            ("infectious", "Infectious"),
            ("non-communicable", "Non-Communicable"),
        ],
    ),
    select_filter(
        "treatmentStatus",
        "Treatment Status",
        &[
            ("ongoing", "Ongoing"),
            ("completed", "Completed"),
            ("follow-up", "Follow-up Required"),
            ("referred", "Referred"),
        ],
    ),
    select_filter("status", "Status", STATUS_OPTIONS),
];

// =========================================================
// Query validation
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    ModuleMissing,
    TypeOrCategoryMissing,
    DatesMissing,
    InvalidDate,
    StartAfterEnd,
    NotGenerated,
}

impl ReportError {
    pub fn message(&self) -> &'static str {
        match self {
            ReportError::ModuleMissing => "Please select a module",
            ReportError::TypeOrCategoryMissing => "Please select report type and category",
            ReportError::DatesMissing => "Please select start and end dates",
            ReportError::InvalidDate => "Please enter valid dates",
            ReportError::StartAfterEnd => "Start date cannot be after end date",
            ReportError::NotGenerated => "Please generate a report first",
        }
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Raw selector state of the module report page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub module: Option<ReportModule>,
    pub report_type: Option<ReportType>,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
    pub filters: BTreeMap<String, String>,
}

/// A query that passed validation and can be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReport {
    pub module: ReportModule,
    pub report_type: ReportType,
    pub category: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub filters: BTreeMap<String, String>,
}

impl ReportQuery {
    /// Switching module invalidates the category and every filter.
    pub fn set_module(&mut self, module: Option<ReportModule>) {
        self.module = module;
        self.category.clear();
        self.filters.clear();
    }

    pub fn validate(&self) -> Result<ValidReport, ReportError> {
        let module = self.module.ok_or(ReportError::ModuleMissing)?;
        let report_type = match self.report_type {
            Some(t) if !self.category.trim().is_empty() => t,
            _ => return Err(ReportError::TypeOrCategoryMissing),
        };
        if self.start_date.trim().is_empty() || self.end_date.trim().is_empty() {
            return Err(ReportError::DatesMissing);
        }
        let start = parse_input_date(&self.start_date).ok_or(ReportError::InvalidDate)?;
        let end = parse_input_date(&self.end_date).ok_or(ReportError::InvalidDate)?;
        if start > end {
            return Err(ReportError::StartAfterEnd);
        }

        let allowed: Vec<&str> = module.filters().iter().map(|f| f.param).collect();
        let filters = self
            .filters
            .iter()
            .filter(|(param, _)| allowed.contains(&param.as_str()))
            .map(|(param, value)| (param.clone(), value.trim().to_string()))
            .filter(|(_, value)| !value.is_empty() && value != "all")
            .collect();

        Ok(ValidReport {
            module,
            report_type,
            category: self.category.trim().to_string(),
            start,
            end,
            filters,
        })
    }
}

impl ValidReport {
    pub fn start_date(&self) -> String {
        self.start.format(crate::date::INPUT_FORMAT).to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format(crate::date::INPUT_FORMAT).to_string()
    }

    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("reportType".to_string(), self.report_type.slug().to_string()),
            ("category".to_string(), self.category.clone()),
            ("startDate".to_string(), self.start_date()),
            ("endDate".to_string(), self.end_date()),
        ];
        params.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        params
    }

    pub fn filename(&self, format: ExportFormat) -> String {
        format!(
            "{}-report-{}-{}-to-{}.{}",
            self.module.slug(),
            self.category,
            self.start_date(),
            self.end_date(),
            format.extension()
        )
    }
}

// =========================================================
// Responses
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSummary {
    pub total_records: u64,
    pub active: u64,
    pub pending: u64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportData {
    pub summary: ReportSummary,
    pub records: Vec<Value>,
}

/// Columns of the report preview table
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub ward: String,
    pub status: String,
    pub date: String,
}

impl ReportRow {
    pub fn from_value(value: &Value) -> Self {
        let pick = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| value.get(*key))
                .map(display_value)
                .find(|s| !s.is_empty())
                .unwrap_or_else(|| "N/A".to_string())
        };
        Self {
            name: pick(&[
                "name",
                "centreName",
                "centerName",
                "studentName",
                "schoolName",
                "patientName",
                "nameOfAdolescent",
                "nameOfPwd",
                "campName",
            ]),
            ward: pick(&["wardNo"]),
            status: pick(&["status", "enrollmentStatus", "treatmentStatus"]),
            date: crate::date::display_date(
                ["createdAt", "dateOfReporting", "date"]
                    .iter()
                    .find_map(|key| value.get(*key)),
            ),
        }
    }
}

impl ReportData {
    /// Read `report` (or `data.report`) from a generate response.
    pub fn from_body(body: &Value) -> Option<Self> {
        let report = body
            .get("report")
            .or_else(|| envelope_data(body).get("report"))?;
        serde_json::from_value(report.clone()).ok()
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.records.iter().map(ReportRow::from_value).collect()
    }
}

/// A generated export ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

// =========================================================
// Overview report
// =========================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    LastYear,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::Last90Days,
        DateRange::LastYear,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "last_7_days",
            DateRange::Last30Days => "last_30_days",
            DateRange::Last90Days => "last_90_days",
            DateRange::LastYear => "last_year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last90Days => "Last 90 days",
            DateRange::LastYear => "Last year",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

/// Free-form overview report; sections are rendered as key/value tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewReport {
    pub sections: Vec<(String, Vec<(String, String)>)>,
}

impl OverviewReport {
    pub fn from_body(body: &Value) -> Self {
        let data = envelope_data(body);
        let data = data.get("report").unwrap_or(data);
        let Some(object) = data.as_object() else {
            return Self::default();
        };

        let mut sections = Vec::new();
        let mut loose = Vec::new();
        for (key, value) in object {
            match value {
                Value::Object(map) => sections.push((title_case(key), flatten(map))),
                Value::Array(_) => {}
                other => loose.push((title_case(key), display_value(other))),
            }
        }
        if !loose.is_empty() {
            sections.insert(0, ("Summary".to_string(), loose));
        }
        Self { sections }
    }
}

fn flatten(map: &Map<String, Value>) -> Vec<(String, String)> {
    map.iter()
        .filter(|(_, v)| !v.is_object() && !v.is_array())
        .map(|(k, v)| (title_case(k), display_value(v)))
        .collect()
}

/// `totalBeneficiaries` -> `Total Beneficiaries`
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch == '_' || ch == '-' {
            out.push(' ');
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query() -> ReportQuery {
        ReportQuery {
            module: Some(ReportModule::Education),
            report_type: Some(ReportType::Summary),
            category: "study-centers".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-03-31".into(),
            filters: BTreeMap::new(),
        }
    }

    #[test]
    fn validation_order() {
        let mut q = ReportQuery::default();
        assert_eq!(q.validate(), Err(ReportError::ModuleMissing));

        q.module = Some(ReportModule::Health);
        assert_eq!(q.validate(), Err(ReportError::TypeOrCategoryMissing));

        q.report_type = Some(ReportType::Detailed);
        q.category = "pwd".into();
        assert_eq!(q.validate(), Err(ReportError::DatesMissing));

        q.start_date = "2024-05-10".into();
        q.end_date = "2024-05-01".into();
        let err = q.validate().unwrap_err();
        assert_eq!(err, ReportError::StartAfterEnd);
        assert_eq!(err.message(), "Start date cannot be after end date");

        q.end_date = "2024-05-10".into();
        assert!(q.validate().is_ok());
    }

    #[test]
    fn only_meaningful_filters_are_sent() {
        let mut q = query();
        q.filters.insert("wardNo".into(), " 12 ".into());
        q.filters.insert("examType".into(), "all".into());
        q.filters.insert("habitation".into(), "".into());
        q.filters.insert("patientName".into(), "ignored".into());
        q.filters.insert("class".into(), "10".into());

        let params = q.validate().unwrap().params();
        assert_eq!(
            params,
            vec![
                ("reportType".to_string(), "summary".to_string()),
                ("category".to_string(), "study-centers".to_string()),
                ("startDate".to_string(), "2024-01-01".to_string()),
                ("endDate".to_string(), "2024-03-31".to_string()),
                ("class".to_string(), "10".to_string()),
                ("wardNo".to_string(), "12".to_string()),
            ]
        );
    }

    #[test]
    fn export_filename() {
        let report = query().validate().unwrap();
        assert_eq!(
            report.filename(ExportFormat::Excel),
            "education-report-study-centers-2024-01-01-to-2024-03-31.xlsx"
        );
        assert_eq!(
            report.filename(ExportFormat::Pdf),
            "education-report-study-centers-2024-01-01-to-2024-03-31.pdf"
        );
    }

    #[test]
    fn module_switch_clears_dependents() {
        let mut q = query();
        q.filters.insert("wardNo".into(), "3".into());
        q.set_module(Some(ReportModule::Health));
        assert!(q.category.is_empty());
        assert!(q.filters.is_empty());
    }

    #[test]
    fn report_data_from_either_location() {
        let body = json!({ "data": { "report": { "summary": { "totalRecords": 4, "completionRate": 50.0 }, "records": [{ "centreName": "Sunrise", "wardNo": "7" }] } } });
        let report = ReportData::from_body(&body).unwrap();
        assert_eq!(report.summary.total_records, 4);
        let rows = report.rows();
        assert_eq!(rows[0].name, "Sunrise");
        assert_eq!(rows[0].status, "N/A");

        assert!(ReportData::from_body(&json!({ "success": true })).is_none());
    }

    #[test]
    fn overview_sections() {
        let body = json!({ "data": { "totalBeneficiaries": 120, "demographics": { "male": 50, "female": 70 } } });
        let report = OverviewReport::from_body(&body);
        assert_eq!(report.sections[0].0, "Summary");
        assert_eq!(report.sections[0].1, vec![("Total Beneficiaries".to_string(), "120".to_string())]);
        assert_eq!(report.sections[1].0, "Demographics");
    }
}
