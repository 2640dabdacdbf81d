//! Configuration for stock research tools

use crate::error::{Result, StockError};
use crate::indicators::IndicatorWindow;
use crate::period::Period;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for stock research tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockConfig {
    /// Default indicator windows (20 / 50 / 14)
    pub window: IndicatorWindow,

    /// Lookback used when a tool call omits `period`
    pub default_period: Period,

    /// Maximum results requested from the search provider
    pub search_max_results: usize,

    /// Directory holding `<SYMBOL>.json` bar files for the file loader
    pub data_dir: PathBuf,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            window: IndicatorWindow::default(),
            default_period: Period::ThreeMonths,
            search_max_results: 5,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl StockConfig {
    /// Create a new configuration builder
    pub fn builder() -> StockConfigBuilder {
        StockConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;

        if self.search_max_results == 0 {
            return Err(StockError::ConfigError(
                "search_max_results must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for StockConfig
#[derive(Debug, Default)]
pub struct StockConfigBuilder {
    short_window: Option<usize>,
    long_window: Option<usize>,
    rsi_lookback: Option<usize>,
    default_period: Option<Period>,
    search_max_results: Option<usize>,
    data_dir: Option<PathBuf>,
    env_error: Option<StockError>,
}

impl StockConfigBuilder {
    /// Set the short SMA window
    pub fn short_window(mut self, window: usize) -> Self {
        self.short_window = Some(window);
        self
    }

    /// Set the long SMA window
    pub fn long_window(mut self, window: usize) -> Self {
        self.long_window = Some(window);
        self
    }

    /// Set the RSI lookback
    pub fn rsi_lookback(mut self, lookback: usize) -> Self {
        self.rsi_lookback = Some(lookback);
        self
    }

    /// Set all three windows at once
    pub fn window(self, window: IndicatorWindow) -> Self {
        self.short_window(window.short)
            .long_window(window.long)
            .rsi_lookback(window.rsi_lookback)
    }

    /// Set the default lookback period
    pub fn default_period(mut self, period: Period) -> Self {
        self.default_period = Some(period);
        self
    }

    /// Set the search result cap
    pub fn search_max_results(mut self, max: usize) -> Self {
        self.search_max_results = Some(max);
        self
    }

    /// Set the bar file directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Load overrides from the environment
    ///
    /// Reads `INDICATOR_SMA_SHORT`, `INDICATOR_SMA_LONG`,
    /// `INDICATOR_RSI_LOOKBACK`, `STOCK_DEFAULT_PERIOD`,
    /// `SEARCH_MAX_RESULTS` and `STOCK_DATA_DIR`. Unparseable values are
    /// reported by [`build`](Self::build).
    pub fn with_env(self) -> Self {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut number = |key: &str| -> Option<usize> {
            let raw = lookup(key)?;
            match raw.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    self.env_error.get_or_insert(StockError::ConfigError(format!(
                        "{key} must be a non-negative integer, got '{raw}'"
                    )));
                    None
                }
            }
        };

        let short = number("INDICATOR_SMA_SHORT");
        let long = number("INDICATOR_SMA_LONG");
        let rsi = number("INDICATOR_RSI_LOOKBACK");
        let max_results = number("SEARCH_MAX_RESULTS");

        self.short_window = short.or(self.short_window);
        self.long_window = long.or(self.long_window);
        self.rsi_lookback = rsi.or(self.rsi_lookback);
        self.search_max_results = max_results.or(self.search_max_results);

        if let Some(raw) = lookup("STOCK_DEFAULT_PERIOD") {
            match raw.parse() {
                Ok(period) => self.default_period = Some(period),
                Err(err) => {
                    self.env_error.get_or_insert(err);
                }
            }
        }
        if let Some(dir) = lookup("STOCK_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<StockConfig> {
        if let Some(err) = self.env_error {
            return Err(err);
        }

        let defaults = StockConfig::default();

        let config = StockConfig {
            window: IndicatorWindow {
                short: self.short_window.unwrap_or(defaults.window.short),
                long: self.long_window.unwrap_or(defaults.window.long),
                rsi_lookback: self.rsi_lookback.unwrap_or(defaults.window.rsi_lookback),
            },
            default_period: self.default_period.unwrap_or(defaults.default_period),
            search_max_results: self
                .search_max_results
                .unwrap_or(defaults.search_max_results),
            data_dir: self.data_dir.unwrap_or(defaults.data_dir),
        };

        config.validate()?;
        Ok(config)
    }
}
