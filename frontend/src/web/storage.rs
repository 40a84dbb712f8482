//! Local storage and full-page navigation for the client core.

use gloo_storage::{LocalStorage, Storage};
use seva_kendra::storage::{KeyValueStore, Navigator};

/// Raw string values in `window.localStorage`.
///
/// Values are stored unencoded so existing `authToken` entries stay readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            seva_kendra::log_error!("localStorage write failed for {}: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Hard navigation through `window.location`, which also resets all page state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if location.pathname().ok().as_deref() == Some(path) {
            return;
        }
        if let Err(e) = location.set_href(path) {
            seva_kendra::log_error!("Redirect to {} failed: {:?}", path, e);
        }
    }
}
