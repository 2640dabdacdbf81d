//! Loader reading `<SYMBOL>.json` bar files from a directory

use super::{SeriesLoader, is_valid_symbol, within_period};
use crate::error::{Result, StockError};
use crate::period::Period;
use crate::series::{Bar, CompanyProfile, FinancialStatement, Series};
use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Accepted file layouts: a bare bar array, or bars with reference data
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SymbolFile {
    Bars(Vec<Bar>),
    Document {
        #[serde(default)]
        profile: Option<CompanyProfile>,
        #[serde(default)]
        financials: Option<FinancialStatement>,
        bars: Vec<Bar>,
    },
}

impl SymbolFile {
    fn bars(self) -> Vec<Bar> {
        match self {
            SymbolFile::Bars(bars) | SymbolFile::Document { bars, .. } => bars,
        }
    }

    fn profile(self) -> Option<CompanyProfile> {
        match self {
            SymbolFile::Bars(_) => None,
            SymbolFile::Document { profile, .. } => profile,
        }
    }

    fn financials(self) -> Option<FinancialStatement> {
        match self {
            SymbolFile::Bars(_) => None,
            SymbolFile::Document { financials, .. } => financials,
        }
    }
}

/// Series loader over a directory of JSON files
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    dir: PathBuf,
}

impl JsonFileLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File for `symbol`; symbols that could leave `dir` are rejected
    fn path_for(&self, symbol: &str) -> Result<PathBuf> {
        if !is_valid_symbol(symbol) {
            return Err(StockError::InvalidSymbol(symbol.to_string()));
        }
        Ok(self.dir.join(format!("{symbol}.json")))
    }

    /// Read and parse the file for `symbol`; `None` when there is no file
    async fn read(&self, symbol: &str) -> Result<Option<SymbolFile>> {
        let path = self.path_for(&symbol.to_uppercase())?;
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No bar file for symbol");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl SeriesLoader for JsonFileLoader {
    async fn load_series(&self, symbol: &str, period: Period) -> Result<Series> {
        let key = symbol.to_uppercase();
        let series = match self.read(&key).await? {
            Some(file) => {
                let stored = Series::new(key.clone(), file.bars());
                Series::new(key, within_period(&stored, period)?)
            }
            None => Series::empty(key),
        };
        tracing::debug!(
            symbol = %series.symbol,
            %period,
            bars = series.len(),
            "Loaded series from file"
        );
        Ok(series)
    }

    async fn load_profile(&self, symbol: &str) -> Result<Option<CompanyProfile>> {
        Ok(self.read(symbol).await?.and_then(SymbolFile::profile))
    }

    async fn load_financials(&self, symbol: &str) -> Result<Option<FinancialStatement>> {
        Ok(self.read(symbol).await?.and_then(SymbolFile::financials))
    }

    fn name(&self) -> &str {
        "json-file"
    }
}
