//! Configuration management utilities

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Environment (dev, prod, etc.)
    pub environment: String,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "stock-research".to_string(),
            environment: "development".to_string(),
            log_filter: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Override defaults from `APP_ENV`, `LOG_FILTER` and `LOG_FORMAT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(env) = lookup("APP_ENV") {
            config.environment = env;
        }
        if let Some(filter) = lookup("LOG_FILTER") {
            config.log_filter = filter;
        }
        if let Some(format) = lookup("LOG_FORMAT").and_then(|f| f.parse().ok()) {
            config.log_format = format;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.app_name, "stock-research");
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("APP_ENV", "production"),
            ("LOG_FILTER", "warn,stock_indicators=debug"),
            ("LOG_FORMAT", "JSON"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).map(|v| (*v).to_string()));

        assert_eq!(config.environment, "production");
        assert_eq!(config.log_filter, "warn,stock_indicators=debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_keeps_default() {
        let config = Config::from_lookup(|k| (k == "LOG_FORMAT").then(|| "xml".to_string()));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_serde_round_trip_uses_lowercase_format() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["log_format"], "pretty");
    }
}
