//! Configuration module for the sipboard service and dashboard.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Storage service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON documents and the refresh marker
    pub data_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("SIPBOARD_DATA_DIR")
            .unwrap_or_else(|_| ".".to_string())
            .into();

        let bind_addr = env::var("SIPBOARD_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .expect("Invalid SIPBOARD_BIND_ADDR format");

        let log_level = env::var("SIPBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            data_dir,
            bind_addr,
            log_level,
        }
    }
}

/// Dashboard client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the storage service
    pub server_url: String,
    /// How often to check the service for changes
    pub poll_interval: Duration,
    /// Timeout applied to every request
    pub request_timeout: Duration,
    /// Log level for stderr diagnostics
    pub log_level: String,
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_url = env::var("SIPBOARD_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();

        let poll_interval = millis_var("SIPBOARD_POLL_INTERVAL_MS", 2000);
        let request_timeout = millis_var("SIPBOARD_REQUEST_TIMEOUT_MS", 5000);

        let log_level =
            env::var("SIPBOARD_DASHBOARD_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Self {
            server_url,
            poll_interval,
            request_timeout,
            log_level,
        }
    }
}

fn millis_var(name: &str, default_ms: u64) -> Duration {
    let ms = env::var(name)
        .ok()
        .map(|v| {
            v.parse()
                .unwrap_or_else(|_| panic!("Invalid {} format", name))
        })
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}
