//! API client configuration from the environment.
//!
//! Resolution order for the base URL: the `TALENT_API_BASE_URL` environment
//! variable at runtime (a `.env` file is honoured), the same variable captured at
//! build time (the only option in the browser), then the dashboard config file.

use std::time::Duration;

use store::DashboardConfig;

pub const BASE_URL_ENV: &str = "TALENT_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "TALENT_API_TIMEOUT_SECS";

/// Upper bound for every outbound request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

/// Settings the [`ApiClient`](crate::ApiClient) is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Settings from the dashboard config file only.
    pub fn from_dashboard(config: &DashboardConfig) -> Self {
        let timeout = match config.api.timeout_secs {
            0 => {
                tracing::warn!("ignoring api.timeout_secs = 0; using {DEFAULT_TIMEOUT:?}");
                DEFAULT_TIMEOUT
            }
            secs => Duration::from_secs(secs),
        };
        Self {
            base_url: config.api.base_url.clone(),
            timeout,
        }
    }

    /// Settings from the environment, falling back to `config`.
    pub fn from_env(config: &DashboardConfig) -> Self {
        dotenvy::dotenv().ok();

        let mut settings = Self::from_dashboard(config);

        if let Some(url) = std::env::var(BASE_URL_ENV)
            .ok()
            .or_else(|| option_env!("TALENT_API_BASE_URL").map(str::to_string))
            .filter(|url| !url.trim().is_empty())
        {
            settings.base_url = url;
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            match parse_timeout(&raw) {
                Ok(timeout) => settings.timeout = timeout,
                Err(e) => tracing::warn!("ignoring {TIMEOUT_ENV}: {e}"),
            }
        }

        settings
    }
}

/// Whole seconds, at least one.
fn parse_timeout(raw: &str) -> Result<Duration, String> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err("timeout must be at least one second".to_string()),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(format!("{raw:?}: {e}")),
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_dashboard(&DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("30"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_timeout(" 5 "), Ok(Duration::from_secs(5)));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("-1").is_err());
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn test_from_dashboard() {
        let mut dashboard = DashboardConfig::default().with_base_url("https://hr.example.com/api");
        dashboard.api.timeout_secs = 5;

        let config = ApiConfig::from_dashboard(&dashboard);
        assert_eq!(config.base_url, "https://hr.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(5));

        dashboard.api.timeout_secs = 0;
        assert_eq!(ApiConfig::from_dashboard(&dashboard).timeout, DEFAULT_TIMEOUT);
    }
}
