//! Browser wiring of the API façades.

use seva_kendra::api::{DashboardApi, RecordsApi, ReportsApi};
use seva_kendra::{ApiClient, ClientConfig};
use seva_kendra_shared::schema::RecordCategory;

use crate::web::{BrowserNavigator, BrowserStorage, FetchClient};

pub type BrowserClient = ApiClient<FetchClient, BrowserStorage, BrowserNavigator>;

pub fn client() -> BrowserClient {
    ApiClient::new(
        ClientConfig::from_build_env(),
        FetchClient,
        BrowserStorage,
        BrowserNavigator,
    )
}

pub fn records(category: RecordCategory) -> RecordsApi<FetchClient, BrowserStorage, BrowserNavigator> {
    RecordsApi::new(client(), category)
}

pub fn dashboard() -> DashboardApi<FetchClient, BrowserStorage, BrowserNavigator> {
    DashboardApi::new(client())
}

pub fn reports() -> ReportsApi<FetchClient, BrowserStorage, BrowserNavigator> {
    ReportsApi::new(client())
}

pub fn page_size() -> u32 {
    ClientConfig::from_build_env().page_size
}
