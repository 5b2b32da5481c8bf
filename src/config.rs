//! Configuration types for gastrend

use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Input data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the monthly prices CSV (date,price per row)
    pub prices_path: PathBuf,
}

/// Estimation model configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Default forecast horizon in months
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
}

fn default_horizon_months() -> u32 {
    12
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { horizon_months: 12 }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g. "info", "gastrend=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON instead of human-readable lines
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
