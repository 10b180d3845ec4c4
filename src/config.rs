// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{MonitorError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:80/status";
pub const DEFAULT_INTERVAL_MS: u64 = 100;
pub const DEFAULT_LANE_COUNT: usize = 3;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub poller: PollerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollerConfig {
    pub endpoint: String,
    pub interval_ms: u64,
    /// No timeout unless set; a hung request holds only its own tick.
    pub request_timeout_ms: Option<u64>,
    pub max_ticks: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub lane_count: usize,
    pub color: bool,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            request_timeout_ms: None,
            max_ticks: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            lane_count: DEFAULT_LANE_COUNT,
            color: true,
        }
    }
}

impl PollerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("LANE_MONITOR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| MonitorError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| MonitorError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.poller.interval_ms == 0 {
            return Err(MonitorError::Config(
                "interval_ms must be greater than 0".to_string(),
            ));
        }

        if self.display.lane_count == 0 {
            return Err(MonitorError::Config(
                "lane_count must be greater than 0".to_string(),
            ));
        }

        let endpoint = &self.poller.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(MonitorError::Config(format!(
                "Invalid endpoint URL: {}",
                endpoint
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.poller.interval(), Duration::from_millis(100));
        assert_eq!(config.display.lane_count, 3);
        assert!(config.poller.request_timeout().is_none());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitor.toml");
        fs::write(
            &path,
            r#"
[poller]
endpoint = "http://10.0.0.7/status"
interval_ms = 250
request_timeout_ms = 2000

[display]
color = false
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.poller.endpoint, "http://10.0.0.7/status");
        assert_eq!(config.poller.interval_ms, 250);
        assert_eq!(
            config.poller.request_timeout(),
            Some(Duration::from_secs(2))
        );
        assert_eq!(config.poller.max_ticks, None);
        assert_eq!(config.display.lane_count, 3);
        assert!(!config.display.color);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = Config::default_config();
        config.poller.interval_ms = 0;
        assert!(matches!(config.validate(), Err(MonitorError::Config(_))));
    }

    #[test]
    fn test_zero_lanes_rejected() {
        let mut config = Config::default_config();
        config.display.lane_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let mut config = Config::default_config();
        config.poller.endpoint = "ftp://controller/status".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ftp://controller/status"));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitor.toml");
        fs::write(
            &path,
            r#"
[poller]
endpoint = "http://10.0.0.7/status"
interval_ms = 100
"#,
        )
        .unwrap();

        // Same value as test_load_from_toml expects, so parallel tests agree.
        unsafe { std::env::set_var("LANE_MONITOR__POLLER__INTERVAL_MS", "250") };
        let loaded = Config::load(Some(path.as_path()));
        unsafe { std::env::remove_var("LANE_MONITOR__POLLER__INTERVAL_MS") };

        let config = loaded.unwrap();
        assert_eq!(config.poller.interval_ms, 250);
        assert_eq!(config.poller.endpoint, "http://10.0.0.7/status");
    }
}
