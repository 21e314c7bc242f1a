//! Backend location.

use tracing::info;

/// Address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable naming the backend base URL.
pub const BASE_URL_VAR: &str = "PARKALL_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        Self {
            base_url: normalize_base(&raw),
        }
    }

    /// Resolve the base URL: runtime variable (native only), then the value
    /// captured at build time, then [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        if let Some(url) = runtime_base_url() {
            info!("{BASE_URL_VAR} set, using backend at {url}");
            return Self::new(url);
        }
        match option_env!("PARKALL_API_URL") {
            Some(url) if !url.trim().is_empty() => {
                info!("Using build-time backend address {url}");
                Self::new(url)
            }
            _ => {
                info!("{BASE_URL_VAR} not set, using default: {DEFAULT_BASE_URL}");
                Self::new(DEFAULT_BASE_URL)
            }
        }
    }

    /// Join an API path (`/api/...`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for a server-relative image path. Absolute URLs pass through.
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
            return path.to_string();
        }
        self.endpoint(path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_base_url() -> Option<String> {
    std::env::var(BASE_URL_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_base_url() -> Option<String> {
    None
}
