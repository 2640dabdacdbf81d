//! Stock research tools for LLM agents

pub mod financial_news;
pub mod financial_statement;
pub mod market_trend;
pub mod stock_price;
pub mod technical;

pub use financial_news::FinancialNewsTool;
pub use financial_statement::FinancialStatementTool;
pub use market_trend::MarketTrendTool;
pub use stock_price::StockPriceTool;
pub use technical::TechnicalIndicatorTool;

use crate::config::StockConfig;
use crate::loader::{SeriesLoader, is_valid_symbol};
use crate::search::SearchProvider;
use agent_tools::ToolRegistry;
use std::sync::Arc;

/// Registry with the price, financial statement and indicator tools, plus the search tools when
/// a search provider is configured
pub fn build_registry(
    loader: Arc<dyn SeriesLoader>,
    search: Option<Arc<dyn SearchProvider>>,
    config: Arc<StockConfig>,
) -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(StockPriceTool::new(Arc::clone(&loader))));
    registry.register(Arc::new(FinancialStatementTool::new(Arc::clone(&loader))));
    registry.register(Arc::new(TechnicalIndicatorTool::new(loader, Arc::clone(&config))));

    match search {
        Some(provider) => {
            tracing::info!(provider = provider.name(), "Search tools enabled");
            registry.register(Arc::new(FinancialNewsTool::new(
                Arc::clone(&provider),
                Arc::clone(&config),
            )));
            registry.register(Arc::new(MarketTrendTool::new(provider, config)));
        }
        None => tracing::info!("No search provider configured, search tools disabled"),
    }

    registry
}

/// Uppercased, trimmed ticker; rejects blanks and characters outside
/// `A-Z 0-9 . - ^ =`
pub(crate) fn normalize_symbol(raw: &str) -> agent_core::Result<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(agent_core::Error::InvalidInput(
            "symbol must not be empty".to_string(),
        ));
    }
    if !is_valid_symbol(&symbol) {
        return Err(agent_core::Error::InvalidInput(format!(
            "invalid symbol '{symbol}': use letters, digits, '.', '-', '^' or '='"
        )));
    }
    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::InMemoryLoader;
    use crate::search::MockSearchProvider;

    #[test]
    fn test_registry_without_search() {
        let registry = build_registry(
            Arc::new(InMemoryLoader::new()),
            None,
            Arc::new(StockConfig::default()),
        );
        let names: Vec<_> = registry.definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec!["financial_statement", "stock_price", "technical_indicators"]
        );
    }

    #[test]
    fn test_registry_with_search() {
        let mut provider = MockSearchProvider::new();
        provider.expect_name().return_const("mock".to_string());

        let registry = build_registry(
            Arc::new(InMemoryLoader::new()),
            Some(Arc::new(provider)),
            Arc::new(StockConfig::default()),
        );
        let names: Vec<_> = registry.definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "financial_statement",
                "search_financial_news",
                "search_market_trend",
                "stock_price",
                "technical_indicators"
            ]
        );
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol(" tsla ").unwrap(), "TSLA");
        assert_eq!(normalize_symbol("brk.b").unwrap(), "BRK.B");
        assert_eq!(normalize_symbol("^gspc").unwrap(), "^GSPC");
        assert!(normalize_symbol("   ").is_err());
    }

    #[test]
    fn test_normalize_symbol_rejects_paths() {
        for raw in ["../../secret", "AAPL/../MSFT", "C:\\data", "AA PL"] {
            let err = normalize_symbol(raw).unwrap_err();
            assert!(matches!(err, agent_core::Error::InvalidInput(_)), "{raw}");
        }
    }
}
