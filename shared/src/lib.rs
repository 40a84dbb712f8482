pub mod categories;
pub mod dashboard;
pub mod date;
pub mod form;
pub mod pagination;
pub mod protocol;
pub mod record;
pub mod report;
pub mod schema;
pub mod session;

// =========================================================
// Constants
// =========================================================

/// Storage key holding the raw bearer token
pub const STORAGE_TOKEN_KEY: &str = "authToken";
/// Storage key holding the JSON-encoded user
pub const STORAGE_USER_KEY: &str = "user";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Where an expired session lands
pub const SIGN_IN_PATH: &str = "/signin";

/// Query value meaning "no filter"
pub const FILTER_ALL: &str = "all";

pub use dashboard::{Activity, CategoryCount, ModuleStats, OverviewStats};
pub use form::{FieldError, FormValues};
pub use pagination::Pagination;
pub use record::{Record, RecordPage};
pub use report::{DateRange, Download, ExportFormat, ReportData, ReportModule, ReportQuery, ReportType};
pub use schema::{CategorySchema, FieldKind, FieldSpec, FilterKind, FilterSpec, RecordCategory, Section};
pub use session::{Credentials, Session, User};
