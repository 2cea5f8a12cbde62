//! Client configuration

/// Env var holding the backend base URL
pub const ENV_API_URL: &str = "ARSENAL_API_URL";
/// Env var holding the request timeout in seconds
pub const ENV_API_TIMEOUT: &str = "ARSENAL_API_TIMEOUT";
/// Env var holding a previously issued token
pub const ENV_API_TOKEN: &str = "ARSENAL_API_TOKEN";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// JWT token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `ARSENAL_API_URL` / `ARSENAL_API_TIMEOUT` / `ARSENAL_API_TOKEN`,
    /// falling back to defaults
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout = std::env::var(ENV_API_TIMEOUT)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let config = Self::new(base_url).with_timeout(timeout);
        match std::env::var(ENV_API_TOKEN) {
            Ok(token) if !token.is_empty() => config.with_token(token),
            _ => config,
        }
    }

    /// Set the JWT token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
