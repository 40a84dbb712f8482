use std::time::Duration;

use seva_kendra_shared::pagination::DEFAULT_PAGE_SIZE;

// =========================================================
// Client configuration
// =========================================================

/// Used when `SEVA_API_BASE_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "https://sevakendra-backend.onrender.com/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Fixed client settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Read the compile-time overrides, falling back to the defaults.
    pub fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("SEVA_API_BASE_URL"),
            option_env!("SEVA_API_TIMEOUT_MS"),
        )
    }

    pub fn from_vars(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: base_url
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            timeout: timeout_ms
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            page_size: defaults.page_size,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join an API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        let cfg = ClientConfig::from_vars(None, Some("not-a-number"));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, Duration::from_millis(10_000));
        assert_eq!(cfg.page_size, 10);
    }

    #[test]
    fn overrides_are_trimmed() {
        let cfg = ClientConfig::from_vars(Some("http://localhost:5000/api/v1/ "), Some("2500"));
        assert_eq!(cfg.base_url, "http://localhost:5000/api/v1");
        assert_eq!(cfg.timeout, Duration::from_millis(2500));
        assert_eq!(cfg.url("/auth/login"), "http://localhost:5000/api/v1/auth/login");
    }
}
