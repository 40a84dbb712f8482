//! Typed façades over [`ApiClient`](crate::client::ApiClient), one per backend area.

pub mod auth;
pub mod dashboard;
pub mod records;
pub mod reports;

pub use dashboard::{DashboardApi, DashboardData};
pub use records::{FilterOptions, ListQuery, RecordsApi};
pub use reports::{ModuleReportState, ReportsApi};
