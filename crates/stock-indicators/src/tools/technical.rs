//! Tool for calculating technical indicators

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::normalize_symbol;
use crate::config::StockConfig;
use crate::error::Result;
use crate::formatter::{indicator_record, stock_error_record};
use crate::indicators::{IndicatorResult, IndicatorWindow, compute_indicators};
use crate::loader::SeriesLoader;
use crate::period::Period;

/// Tool for calculating SMA, RSI and the trend signal for a symbol
pub struct TechnicalIndicatorTool {
    loader: Arc<dyn SeriesLoader>,
    config: Arc<StockConfig>,
}

#[derive(Debug, Deserialize)]
struct TechnicalParams {
    symbol: String,
    #[serde(default)]
    period: Option<String>,
    #[serde(default)]
    short_window: Option<usize>,
    #[serde(default)]
    long_window: Option<usize>,
    #[serde(default)]
    rsi_window: Option<usize>,
}

impl TechnicalIndicatorTool {
    /// Create a new technical indicator tool
    pub fn new(loader: Arc<dyn SeriesLoader>, config: Arc<StockConfig>) -> Self {
        Self { loader, config }
    }

    /// Load the series and compute indicators
    pub async fn calculate(
        &self,
        symbol: &str,
        period: Period,
        window: &IndicatorWindow,
    ) -> Result<IndicatorResult> {
        let series = self.loader.load_series(symbol, period).await?;
        tracing::debug!(
            symbol,
            %period,
            bars = series.len(),
            required = window.required_bars(),
            loader = self.loader.name(),
            "Computing technical indicators"
        );
        let result = compute_indicators(&series, window)?;
        if !result.is_complete() {
            tracing::debug!(symbol, bars = series.len(), "Not enough history for every indicator");
        }
        Ok(result)
    }

    fn window_for(&self, params: &TechnicalParams) -> AgentResult<IndicatorWindow> {
        let defaults = self.config.window;
        let window = IndicatorWindow::new(
            params.short_window.unwrap_or(defaults.short),
            params.long_window.unwrap_or(defaults.long),
            params.rsi_window.unwrap_or(defaults.rsi_lookback),
        );
        window.validate()?;
        Ok(window)
    }
}

#[async_trait]
impl Tool for TechnicalIndicatorTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: TechnicalParams = serde_json::from_value(params).map_err(|e| {
            agent_core::Error::InvalidInput(format!("Invalid parameters: {e}"))
        })?;

        let symbol = normalize_symbol(&params.symbol)?;
        let period = match params.period.as_deref() {
            Some(raw) => raw.parse::<Period>()?,
            None => self.config.default_period,
        };
        let window = self.window_for(&params)?;

        match self.calculate(&symbol, period, &window).await {
            Ok(result) => Ok(indicator_record(&result)),
            Err(err) => {
                tracing::warn!(%symbol, %period, error = %err, "Technical indicators unavailable");
                Ok(stock_error_record(&err))
            }
        }
    }

    fn name(&self) -> &str {
        "technical_indicators"
    }

    fn description(&self) -> &str {
        "Get and calculate technical indicators for a given stock symbol over a specified period. \
         Returns the current price, short and long simple moving averages, RSI, latest volume \
         and a bullish/bearish trend signal. Indicators without enough history are null."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol (e.g., 'AAPL')"
                },
                "period": {
                    "type": "string",
                    "description": "Lookback period for historical data",
                    "enum": Period::ALL.map(Period::as_str),
                    "default": self.config.default_period.as_str()
                },
                "short_window": {
                    "type": "integer",
                    "description": "Short moving average length",
                    "minimum": 1,
                    "default": self.config.window.short
                },
                "long_window": {
                    "type": "integer",
                    "description": "Long moving average length",
                    "minimum": 1,
                    "default": self.config.window.long
                },
                "rsi_window": {
                    "type": "integer",
                    "description": "RSI lookback length",
                    "minimum": 1,
                    "default": self.config.window.rsi_lookback
                }
            },
            "required": ["symbol"]
        })
    }
}
