use seva_kendra_shared::report::{
    DateRange, Download, ExportFormat, OverviewReport, ReportData, ReportError, ReportQuery,
};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::{HttpClient, HttpMethod};
use crate::storage::{KeyValueStore, Navigator};

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        ApiError::Validation(err.message().to_string())
    }
}

/// Report endpoints of the education and health modules.
#[derive(Clone)]
pub struct ReportsApi<C, S, N> {
    client: ApiClient<C, S, N>,
}

impl<C: HttpClient, S: KeyValueStore, N: Navigator> ReportsApi<C, S, N> {
    pub fn new(client: ApiClient<C, S, N>) -> Self {
        Self { client }
    }

    /// Validate the selectors, then fetch the report preview.
    pub async fn generate(&self, query: &ReportQuery) -> Result<ReportData, ApiError> {
        let report = query.validate()?;
        let path = report.module.endpoint("generate");
        let body = self
            .client
            .request_json(HttpMethod::Get, &path, None, &report.params())
            .await?;
        ReportData::from_body(&body).ok_or_else(|| ApiError::Decode("no report in response".into()))
    }

    pub async fn export(&self, query: &ReportQuery, format: ExportFormat) -> Result<Download, ApiError> {
        let report = query.validate()?;
        let mut params = report.params();
        params.push(("format".to_string(), format.slug().to_string()));
        let bytes = self
            .client
            .request_bytes(HttpMethod::Get, &report.module.endpoint("export"), &params)
            .await?;
        Ok(Download {
            filename: report.filename(format),
            mime_type: format.mime_type(),
            bytes,
        })
    }

    pub async fn overview(&self, range: DateRange) -> Result<OverviewReport, ApiError> {
        let params = [("dateRange".to_string(), range.slug().to_string())];
        let body = self
            .client
            .request_json(HttpMethod::Get, "/reports/overview", None, &params)
            .await?;
        Ok(OverviewReport::from_body(&body))
    }
}

/// Selector state plus the last generated preview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleReportState {
    pub query: ReportQuery,
    pub report: Option<ReportData>,
    pub generating: bool,
    pub exporting: Option<ExportFormat>,
}

impl ModuleReportState {
    /// Exports are only offered for a report that has been previewed.
    pub fn check_export(&self) -> Result<(), ApiError> {
        if self.report.is_none() {
            return Err(ReportError::NotGenerated.into());
        }
        self.query.validate().map(|_| ()).map_err(Into::into)
    }

    /// Store a generate result sent for `sent`. Returns false and keeps the
    /// preview empty when the selectors changed while it was in flight.
    pub fn finish_generate(&mut self, sent: &ReportQuery, result: Result<ReportData, ApiError>) -> bool {
        self.generating = false;
        if self.query != *sent {
            return false;
        }
        self.report = result.ok();
        true
    }
}
