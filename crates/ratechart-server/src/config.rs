//! Server configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ratechart_core::allocation::AllocationParams;
use ratechart_core::RateChartError;

/// Name of the API server entry used for holiday lookups.
pub const HOLIDAY_SERVER: &str = "holidayInfo";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`ServerConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error(transparent)]
    Invalid(#[from] RateChartError),
}

/// An external API server entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiServerConfig {
    /// Lookup name, matched case-insensitively
    pub name: String,

    /// Base URL of the server
    pub domain: String,

    /// Service key sent with each request
    #[serde(default)]
    pub key: String,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// First path segment of the functional API
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Holiday lookup timeout in milliseconds
    #[serde(default = "default_holiday_timeout_ms")]
    pub holiday_timeout_ms: u64,

    /// Rows requested from the holiday service
    #[serde(default = "default_holiday_rows")]
    pub holiday_rows: u32,

    /// External API servers
    #[serde(default)]
    pub api_servers: Vec<ApiServerConfig>,

    /// Allocator parameters
    #[serde(default)]
    pub allocation: AllocationParams,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_version() -> String {
    "v1".to_string()
}

fn default_holiday_timeout_ms() -> u64 {
    3000
}

fn default_holiday_rows() -> u32 {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_version: default_api_version(),
            holiday_timeout_ms: default_holiday_timeout_ms(),
            holiday_rows: default_holiday_rows(),
            api_servers: Vec::new(),
            allocation: AllocationParams::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.allocation.validate()?;
        Ok(config)
    }

    /// Look up an API server by name, ignoring case.
    ///
    /// The returned domain always ends in `/`.
    pub fn api_server(&self, name: &str) -> Option<ApiServerConfig> {
        self.api_servers
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| {
                let mut server = s.clone();
                if !server.domain.ends_with('/') {
                    server.domain.push('/');
                }
                server
            })
    }

    /// Holiday lookup timeout.
    pub fn holiday_timeout(&self) -> Duration {
        Duration::from_millis(self.holiday_timeout_ms)
    }

    /// Path of the chart endpoint.
    pub fn chart_path(&self) -> String {
        format!("/{}/functional/random/chart", self.api_version)
    }

    /// Path of the masking endpoint.
    pub fn mask_path(&self) -> String {
        format!("/{}/functional/mask", self.api_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.holiday_timeout(), Duration::from_secs(3));
        assert_eq!(config.holiday_rows, 100);
        assert!(config.api_servers.is_empty());
        assert_eq!(config.allocation, AllocationParams::default());
        assert_eq!(config.chart_path(), "/v1/functional/random/chart");
    }

    #[test]
    fn test_api_server_lookup() {
        let config = ServerConfig::from_toml_str(
            r#"
            api_version = "v2"

            [[api_servers]]
            name = "holidayInfo"
            domain = "https://apis.example.kr/B090041/openapi/service/SpcdeInfoService"
            key = "secret"
            "#,
        )
        .unwrap();

        let server = config.api_server("HOLIDAYINFO").unwrap();
        assert_eq!(
            server.domain,
            "https://apis.example.kr/B090041/openapi/service/SpcdeInfoService/"
        );
        assert_eq!(server.key, "secret");
        assert!(config.api_server("other").is_none());
        assert_eq!(config.mask_path(), "/v2/functional/mask");
    }

    #[test]
    fn test_allocation_override() {
        let config = ServerConfig::from_toml_str(
            r#"
            [allocation]
            variation_range = 2
            target_multiplier = "9.5"
            "#,
        )
        .unwrap();
        assert_eq!(config.allocation.variation_range, dec!(2));
        assert_eq!(config.allocation.target_multiplier, dec!(9.5));
        assert_eq!(config.allocation.target_shift, dec!(3));
    }

    #[test]
    fn test_invalid_allocation_rejected() {
        let err = ServerConfig::from_toml_str("[allocation]\nvariation_range = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
