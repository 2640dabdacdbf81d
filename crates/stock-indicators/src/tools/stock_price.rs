//! Tool for the latest price snapshot of a symbol

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::normalize_symbol;
use crate::error::Result;
use crate::formatter::stock_error_record;
use crate::indicators::{round_to_cents, validate_series};
use crate::loader::SeriesLoader;
use crate::period::Period;

/// Tool returning the current price plus company reference data
pub struct StockPriceTool {
    loader: Arc<dyn SeriesLoader>,
}

#[derive(Debug, Deserialize)]
struct StockPriceParams {
    symbol: String,
}

impl StockPriceTool {
    /// Create a new stock price tool
    pub fn new(loader: Arc<dyn SeriesLoader>) -> Self {
        Self { loader }
    }

    /// Build the snapshot from one month of bars and the optional profile
    async fn snapshot(&self, symbol: &str) -> Result<Value> {
        let series = self.loader.load_series(symbol, Period::OneMonth).await?;
        if series.is_empty() {
            return Ok(json!({ "error": format!("Could not retrieve data for {symbol}") }));
        }
        validate_series(&series)?;

        let current_price = series.last().map_or(0.0, |bar| round_to_cents(bar.close));
        let profile = self.loader.load_profile(symbol).await?.unwrap_or_default();

        Ok(json!({
            "symbol": symbol,
            "current_price": current_price,
            "company_name": profile.name.unwrap_or_else(|| symbol.to_string()),
            "market_cap": profile.market_cap.unwrap_or(0.0),
            "pe_ratio": profile.pe_ratio.map_or_else(|| json!("N/A"), |pe| json!(pe)),
            "52_week_high": profile.week_52_high.unwrap_or(0.0),
            "52_week_low": profile.week_52_low.unwrap_or(0.0),
        }))
    }
}

#[async_trait]
impl Tool for StockPriceTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: StockPriceParams = serde_json::from_value(params).map_err(|e| {
            agent_core::Error::InvalidInput(format!("Invalid parameters: {e}"))
        })?;
        let symbol = normalize_symbol(&params.symbol)?;

        match self.snapshot(&symbol).await {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::error!(%symbol, error = %err, "Error fetching stock data");
                Ok(stock_error_record(&err))
            }
        }
    }

    fn name(&self) -> &str {
        "stock_price"
    }

    fn description(&self) -> &str {
        "Get the current stock price and other details for a given stock symbol: \
         company name, market cap, P/E ratio and 52-week range."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol (e.g., 'AAPL', 'GOOGL')"
                }
            },
            "required": ["symbol"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::InMemoryLoader;
    use crate::series::{Bar, CompanyProfile, Series};
    use chrono::NaiveDate;

    fn series(symbol: &str, closes: &[f64]) -> Series {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Bar::from_close(NaiveDate::from_ymd_opt(2024, 4, 1 + i as u32).unwrap(), c, 77)
            })
            .collect();
        Series::new(symbol, bars)
    }

    #[tokio::test]
    async fn test_snapshot_with_profile() {
        let loader = InMemoryLoader::new()
            .with_series(series("NVDA", &[880.0, 901.456]))
            .with_profile(
                "NVDA",
                CompanyProfile {
                    name: Some("NVIDIA Corporation".to_string()),
                    market_cap: Some(2.2e12),
                    pe_ratio: Some(74.1),
                    week_52_high: Some(974.0),
                    week_52_low: Some(373.56),
                },
            );
        let tool = StockPriceTool::new(Arc::new(loader));

        let data = tool.execute(json!({ "symbol": "nvda" })).await.unwrap();
        assert_eq!(data["symbol"], "NVDA");
        assert_eq!(data["current_price"], 901.46);
        assert_eq!(data["company_name"], "NVIDIA Corporation");
        assert_eq!(data["pe_ratio"], 74.1);
        assert_eq!(data["52_week_low"], 373.56);
    }

    #[tokio::test]
    async fn test_snapshot_defaults_without_profile() {
        let tool = StockPriceTool::new(Arc::new(
            InMemoryLoader::new().with_series(series("IBM", &[190.0])),
        ));

        let data = tool.execute(json!({ "symbol": "IBM" })).await.unwrap();
        assert_eq!(data["company_name"], "IBM");
        assert_eq!(data["market_cap"], 0.0);
        assert_eq!(data["pe_ratio"], "N/A");
        assert_eq!(data["52_week_high"], 0.0);
    }

    #[tokio::test]
    async fn test_empty_series_is_error_payload() {
        let tool = StockPriceTool::new(Arc::new(InMemoryLoader::new()));
        let data = tool.execute(json!({ "symbol": "ZZZZ" })).await.unwrap();
        assert_eq!(data["error"], "Could not retrieve data for ZZZZ");
    }

    #[test]
    fn test_tool_metadata() {
        let tool = StockPriceTool::new(Arc::new(InMemoryLoader::new()));
        assert_eq!(tool.name(), "stock_price");
        assert!(tool.input_schema()["properties"]["symbol"].is_object());
    }
}
