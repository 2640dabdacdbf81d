//! Technical indicators and research tools for stock agents
//!
//! The heart of this crate is a pure indicator engine: given a daily bar
//! series it computes trailing simple moving averages, a simple rolling RSI
//! and a bullish/bearish trend signal for the latest bar. Around it sit the
//! pieces an agent host needs to expose that engine as tools:
//!
//! - [`loader::SeriesLoader`] supplies bars (in-memory and JSON-file loaders
//!   are included; network loaders are provided by the host)
//! - [`search::SearchProvider`] backs the news and trend search tools
//! - [`formatter`] turns results and errors into flat JSON records
//! - [`tools`] wraps everything as [`agent_tools::Tool`]s
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use stock_indicators::{Bar, IndicatorWindow, Series, TrendSignal, compute_indicators};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let bars = (0..21)
//!     .map(|i| Bar::from_close(start + chrono::Duration::days(i), 100.0 + i as f64, 1_000))
//!     .collect();
//! let series = Series::new("AAPL", bars);
//!
//! let result = compute_indicators(&series, &IndicatorWindow::default()).unwrap();
//! assert_eq!(result.sma_short, Some(110.5));
//! assert_eq!(result.sma_long, None);
//! assert_eq!(result.trend_signal, TrendSignal::Bearish);
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod indicators;
pub mod loader;
pub mod period;
pub mod search;
pub mod series;
pub mod tools;

// Re-export main types for convenience
pub use config::StockConfig;
pub use error::{IndicatorError, Result, SeriesDefect, StockError};
pub use indicators::{IndicatorResult, IndicatorWindow, TrendSignal, compute_indicators};
pub use loader::{InMemoryLoader, JsonFileLoader, SeriesLoader};
pub use period::Period;
pub use search::SearchProvider;
pub use series::{Bar, CompanyProfile, FinancialStatement, Series};
pub use tools::{
    FinancialNewsTool, FinancialStatementTool, MarketTrendTool, StockPriceTool,
    TechnicalIndicatorTool, build_registry,
};
