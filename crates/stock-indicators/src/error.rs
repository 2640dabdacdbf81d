//! Error types for stock indicator operations

use chrono::NaiveDate;
use thiserror::Error;

/// Why a bar series was rejected before computing indicators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesDefect {
    /// Two bars share the same date
    #[error("duplicate date {0}")]
    DuplicateDate(NaiveDate),

    /// A bar is dated before its predecessor
    #[error("date {current} is earlier than preceding bar {previous}")]
    OutOfOrderDate {
        previous: NaiveDate,
        current: NaiveDate,
    },

    /// Close is zero or negative
    #[error("non-positive close {0}")]
    NonPositiveClose(f64),

    /// Close is NaN or infinite
    #[error("non-finite close")]
    NonFiniteClose,
}

/// Failures of the indicator engine itself
///
/// Insufficient history for one indicator is not an error; it shows up as a
/// `None` field on the result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// The series has no bars at all
    #[error("No historical data for {symbol}")]
    NoData { symbol: String },

    /// The series is structurally invalid
    #[error("Invalid series for {symbol} at bar {index}: {defect}")]
    InvalidSeries {
        symbol: String,
        index: usize,
        defect: SeriesDefect,
    },
}

impl IndicatorError {
    /// Stable machine-readable kind used in error payloads
    pub fn kind(&self) -> &'static str {
        match self {
            IndicatorError::NoData { .. } => "no_data",
            IndicatorError::InvalidSeries { .. } => "invalid_series",
        }
    }
}

/// Stock analysis specific errors
#[derive(Debug, Error)]
pub enum StockError {
    /// Indicator engine rejected the series
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    /// Unknown lookback period string
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Ticker with characters outside `A-Z 0-9 . - ^ =`
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Data not available for the requested symbol
    #[error("Data not available for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    /// Search provider failed
    #[error("Search error: {0}")]
    SearchError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading local data failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl StockError {
    /// Stable machine-readable kind used in error payloads
    pub fn kind(&self) -> &'static str {
        match self {
            StockError::Indicator(err) => err.kind(),
            StockError::InvalidPeriod(_) => "invalid_period",
            StockError::InvalidSymbol(_) => "invalid_symbol",
            StockError::DataUnavailable { .. } | StockError::IoError(_) => "data_unavailable",
            StockError::SearchError(_) => "search_failed",
            StockError::ConfigError(_) => "config",
            StockError::JsonError(_) => "malformed_data",
            StockError::Other(_) => "other",
        }
    }
}

/// Result type alias for stock operations
pub type Result<T> = std::result::Result<T, StockError>;

/// Convert StockError to agent_core::Error
impl From<StockError> for agent_core::Error {
    fn from(err: StockError) -> Self {
        match err {
            StockError::InvalidPeriod(_)
            | StockError::InvalidSymbol(_)
            | StockError::ConfigError(_) => {
                agent_core::Error::InvalidInput(err.to_string())
            }
            other => agent_core::Error::ProcessingFailed(other.to_string()),
        }
    }
}
