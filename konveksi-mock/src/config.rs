//! Mock server configuration

/// Mock server configuration, loaded from the environment
///
/// | Variable | Default |
/// |---|---|
/// | `KONVEKSI_MOCK_HOST` | `127.0.0.1` |
/// | `KONVEKSI_MOCK_PORT` | `5000` |
/// | `ADMIN_TOKEN` | unset (admin routes open) |
/// | `LOG_LEVEL` | `info` |
/// | `LOG_JSON` | `false` |
/// | `LOG_DIR` | unset (console only) |
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub admin_token: Option<String>,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("KONVEKSI_MOCK_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: std::env::var("KONVEKSI_MOCK_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            admin_token: std::env::var("ADMIN_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            admin_token: None,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = Config {
            port: 8088,
            ..Default::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8088");
    }
}
