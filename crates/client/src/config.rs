use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// --- Environment helpers ---

fn api_base_url() -> String {
    std::env::var("LEXAID_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

fn http_timeout_secs() -> u64 {
    std::env::var("LEXAID_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

/// Connection settings for the backend API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Single client-wide request timeout; there is no per-request logic.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read configuration from the environment (`LEXAID_API_BASE_URL`,
    /// `LEXAID_HTTP_TIMEOUT_SECS`), loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            base_url: api_base_url().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(http_timeout_secs()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
