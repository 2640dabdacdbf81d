//! In-memory series loader

use super::{SeriesLoader, within_period};
use crate::error::Result;
use crate::period::Period;
use crate::series::{CompanyProfile, FinancialStatement, Series};
use async_trait::async_trait;
use std::collections::HashMap;

/// Loader backed by series held in memory, keyed by uppercase symbol
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    series: HashMap<String, Series>,
    profiles: HashMap<String, CompanyProfile>,
    financials: HashMap<String, FinancialStatement>,
}

impl InMemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the series for its symbol
    pub fn with_series(mut self, series: Series) -> Self {
        self.insert_series(series);
        self
    }

    /// Add or replace the profile for a symbol
    pub fn with_profile(mut self, symbol: &str, profile: CompanyProfile) -> Self {
        self.profiles.insert(symbol.to_uppercase(), profile);
        self
    }

    /// Add or replace the financial statement for a symbol
    pub fn with_financials(mut self, symbol: &str, statement: FinancialStatement) -> Self {
        self.financials.insert(symbol.to_uppercase(), statement);
        self
    }

    pub fn insert_series(&mut self, mut series: Series) {
        series.symbol = series.symbol.to_uppercase();
        self.series.insert(series.symbol.clone(), series);
    }
}

#[async_trait]
impl SeriesLoader for InMemoryLoader {
    async fn load_series(&self, symbol: &str, period: Period) -> Result<Series> {
        let key = symbol.to_uppercase();
        let bars = match self.series.get(&key) {
            Some(series) => within_period(series, period)?,
            None => Vec::new(),
        };
        tracing::debug!(symbol = %key, %period, bars = bars.len(), "Loaded series from memory");
        Ok(Series::new(key, bars))
    }

    async fn load_profile(&self, symbol: &str) -> Result<Option<CompanyProfile>> {
        Ok(self.profiles.get(&symbol.to_uppercase()).cloned())
    }

    async fn load_financials(&self, symbol: &str) -> Result<Option<FinancialStatement>> {
        Ok(self.financials.get(&symbol.to_uppercase()).cloned())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Bar;
    use chrono::NaiveDate;

    fn loader() -> InMemoryLoader {
        let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
        InMemoryLoader::new()
            .with_series(Series::new(
                "msft",
                vec![Bar::from_close(d(1), 400.0, 5), Bar::from_close(d(2), 402.5, 6)],
            ))
            .with_profile(
                "MSFT",
                CompanyProfile {
                    name: Some("Microsoft Corporation".to_string()),
                    ..Default::default()
                },
            )
    }

    #[tokio::test]
    async fn test_load_is_case_insensitive() {
        let series = loader().load_series("Msft", Period::OneMonth).await.unwrap();
        assert_eq!(series.symbol, "MSFT");
        assert_eq!(series.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_empty() {
        let series = loader().load_series("NOPE", Period::OneMonth).await.unwrap();
        assert!(series.is_empty());
        assert_eq!(series.symbol, "NOPE");
    }

    #[tokio::test]
    async fn test_profile_lookup() {
        let loader = loader();
        let profile = loader.load_profile("msft").await.unwrap().unwrap();
        assert_eq!(profile.name.as_deref(), Some("Microsoft Corporation"));
        assert!(loader.load_profile("AAPL").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_financials_lookup() {
        let loader = loader().with_financials(
            "msft",
            FinancialStatement {
                period: Some("2024".to_string()),
                revenue: Some(245.1e9),
                ..Default::default()
            },
        );
        let statement = loader.load_financials("MSFT").await.unwrap().unwrap();
        assert_eq!(statement.revenue, Some(245.1e9));
        assert!(loader.load_financials("AAPL").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_out_of_order_bars_fail_even_outside_period() {
        let d = |month, day| NaiveDate::from_ymd_opt(2024, month, day).unwrap();
        let loader = InMemoryLoader::new().with_series(Series::new(
            "bad",
            vec![
                Bar::from_close(d(6, 1), 10.0, 1),
                Bar::from_close(d(1, 1), 11.0, 1),
                Bar::from_close(d(6, 2), 12.0, 1),
            ],
        ));

        let err = loader.load_series("BAD", Period::OneMonth).await.unwrap_err();
        assert_eq!(err.kind(), "invalid_series");
        assert!(err.to_string().contains("BAD"));
    }
}
