use std::env;
use std::time::Duration;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Base URL of the analysis service
    pub analysis_url: String,
    /// Hard timeout for a single analysis request
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let analysis_url = env::var("ANALYSIS_SERVICE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let timeout_secs = env::var("ANALYSIS_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(15);

        AppConfig {
            bind_addr,
            analysis_url,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
