//! Series loading seam
//!
//! The indicator engine never fetches data. A [`SeriesLoader`] supplies the
//! bars for a symbol and lookback period; network-backed loaders live
//! outside this crate.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileLoader;
pub use memory::InMemoryLoader;

use crate::error::Result;
use crate::indicators::validate_series;
use crate::period::Period;
use crate::series::{Bar, CompanyProfile, FinancialStatement, Series};
use async_trait::async_trait;

/// Source of daily bar series
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeriesLoader: Send + Sync {
    /// Bars for `symbol` within `period`, oldest first
    ///
    /// An unknown symbol yields an empty series, not an error.
    async fn load_series(&self, symbol: &str, period: Period) -> Result<Series>;

    /// Company reference data, when the source has any
    async fn load_profile(&self, _symbol: &str) -> Result<Option<CompanyProfile>> {
        Ok(None)
    }

    /// Latest annual financial statement, when the source has one
    async fn load_financials(&self, _symbol: &str) -> Result<Option<FinancialStatement>> {
        Ok(None)
    }

    /// Loader name for logs
    fn name(&self) -> &str;
}

/// True for tickers made only of `A-Z`, `0-9` and `.`, `-`, `^`, `=`
///
/// Covers class shares (`BRK.B`), indices (`^GSPC`) and futures (`CL=F`)
/// while keeping path separators out of file-backed lookups.
pub(crate) fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty()
        && symbol
            .chars()
            .all(|c| {
                c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '^' | '=')
            })
}

/// Keep the bars that fall inside `period`, anchored at the latest bar date
///
/// The whole stored series is validated first, so a defect outside the
/// period is still reported instead of being filtered away.
pub(crate) fn within_period(series: &Series, period: Period) -> Result<Vec<Bar>> {
    let Some(latest) = series.last().map(|b| b.date) else {
        return Ok(Vec::new());
    };
    validate_series(series)?;
    let start = period.start_date(latest);
    Ok(series
        .bars
        .iter()
        .filter(|b| b.date > start)
        .cloned()
        .collect())
}
