//! Tool for searching recent financial news about a company

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::normalize_symbol;
use crate::config::StockConfig;
use crate::search::SearchProvider;

/// Tool that searches recent news for a company
pub struct FinancialNewsTool {
    provider: Arc<dyn SearchProvider>,
    config: Arc<StockConfig>,
}

#[derive(Debug, Deserialize)]
struct FinancialNewsParams {
    company_name: String,
    symbol: String,
}

/// Search query for company news
pub fn news_query(company_name: &str, symbol: &str) -> String {
    format!("{company_name} {symbol} financial news stock earnings latest")
}

impl FinancialNewsTool {
    /// Create a new financial news tool
    pub fn new(provider: Arc<dyn SearchProvider>, config: Arc<StockConfig>) -> Self {
        Self { provider, config }
    }
}

#[async_trait]
impl Tool for FinancialNewsTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: FinancialNewsParams = serde_json::from_value(params).map_err(|e| {
            agent_core::Error::InvalidInput(format!("Invalid parameters: {e}"))
        })?;
        let symbol = normalize_symbol(&params.symbol)?;
        let company = params.company_name.trim().to_string();

        let query = news_query(&company, &symbol);
        tracing::debug!(provider = self.provider.name(), %query, "Searching financial news");

        match self.provider.search(&query, self.config.search_max_results).await {
            Ok(results) => Ok(json!({
                "symbol": symbol,
                "company": company,
                "results": results,
            })),
            Err(err) => {
                tracing::warn!(%symbol, error = %err, "News search failed");
                Ok(json!({ "error": err.to_string() }))
            }
        }
    }

    fn name(&self) -> &str {
        "search_financial_news"
    }

    fn description(&self) -> &str {
        "Search for recent financial news about a company. \
         Call this tool only once per query unless additional news is specifically requested."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "company_name": {
                    "type": "string",
                    "description": "Company name (e.g., 'Apple Inc.')"
                },
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol"
                }
            },
            "required": ["company_name", "symbol"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MockSearchProvider;

    #[test]
    fn test_news_query() {
        assert_eq!(
            news_query("Apple", "AAPL"),
            "Apple AAPL financial news stock earnings latest"
        );
    }

    #[tokio::test]
    async fn test_uses_configured_result_cap() {
        let mut provider = MockSearchProvider::new();
        provider.expect_name().return_const("mock".to_string());
        provider
            .expect_search()
            .withf(|query: &str, max: &usize| query.starts_with("Apple AAPL ") && *max == 3)
            .times(1)
            .returning(|_, _| Ok(json!({ "results": [] })));

        let config = StockConfig::builder().search_max_results(3).build().unwrap();
        let tool = FinancialNewsTool::new(Arc::new(provider), Arc::new(config));
        let data = tool
            .execute(json!({ "company_name": "Apple", "symbol": "aapl" }))
            .await
            .unwrap();

        assert_eq!(data["symbol"], "AAPL");
        assert_eq!(data["company"], "Apple");
        assert!(data["results"].is_object());
    }

    #[tokio::test]
    async fn test_missing_company_is_invalid_input() {
        let tool = FinancialNewsTool::new(
            Arc::new(MockSearchProvider::new()),
            Arc::new(StockConfig::default()),
        );
        let err = tool.execute(json!({ "symbol": "AAPL" })).await.unwrap_err();
        assert!(matches!(err, agent_core::Error::InvalidInput(_)));
    }
}
