//! Client configuration

use std::time::Duration;

/// Client configuration for connecting to the Konveksi backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Bearer token for the admin endpoints
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Load from environment variables (and `.env` if present)
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `KONVEKSI_API_URL` | `http://localhost:5000` |
    /// | `KONVEKSI_ADMIN_TOKEN` | unset |
    /// | `KONVEKSI_TIMEOUT_SECS` | `30` |
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let base_url = std::env::var("KONVEKSI_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".into());
        let token = std::env::var("KONVEKSI_ADMIN_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        let timeout = std::env::var("KONVEKSI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            token,
            timeout,
        }
    }

    /// Set the admin token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}
