//! Tool for searching market trends on a topic

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::config::StockConfig;
use crate::search::SearchProvider;

/// Tool that searches for market trends and outlook on a topic
pub struct MarketTrendTool {
    provider: Arc<dyn SearchProvider>,
    config: Arc<StockConfig>,
}

#[derive(Debug, Deserialize)]
struct MarketTrendParams {
    topic: String,
}

/// Search query for a trend topic
pub fn trend_query(topic: &str) -> String {
    format!("{topic} market analysis trends 2024 2025 and future investment outlook forecast")
}

impl MarketTrendTool {
    /// Create a new market trend tool
    pub fn new(provider: Arc<dyn SearchProvider>, config: Arc<StockConfig>) -> Self {
        Self { provider, config }
    }
}

#[async_trait]
impl Tool for MarketTrendTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: MarketTrendParams = serde_json::from_value(params).map_err(|e| {
            agent_core::Error::InvalidInput(format!("Invalid parameters: {e}"))
        })?;

        let search_query = trend_query(params.topic.trim());
        tracing::debug!(provider = self.provider.name(), query = %search_query, "Searching market trends");

        match self
            .provider
            .search(&search_query, self.config.search_max_results)
            .await
        {
            Ok(results) => Ok(json!({
                "topic": params.topic,
                "search_query": search_query,
                "trend_results": results,
            })),
            Err(err) => {
                tracing::warn!(error = %err, "Trend search failed");
                Ok(json!({ "error": format!("Failed to search trends: {err}") }))
            }
        }
    }

    fn name(&self) -> &str {
        "search_market_trend"
    }

    fn description(&self) -> &str {
        "Search for market trends, analysis and investment outlook on a specific topic \
         such as a sector, theme or commodity."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "Market topic (e.g., 'semiconductors', 'electric vehicles')"
                }
            },
            "required": ["topic"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::search::MockSearchProvider;

    #[tokio::test]
    async fn test_builds_query_and_wraps_results() {
        let mut provider = MockSearchProvider::new();
        provider.expect_name().return_const("mock".to_string());
        provider
            .expect_search()
            .withf(|query: &str, max: &usize| {
                query == "AI chips market analysis trends 2024 2025 and future investment outlook forecast"
                    && *max == 5
            })
            .times(1)
            .returning(|_, _| Ok(json!([{ "title": "AI capex keeps rising" }])));

        let tool = MarketTrendTool::new(Arc::new(provider), Arc::new(StockConfig::default()));
        let data = tool.execute(json!({ "topic": "AI chips" })).await.unwrap();

        assert_eq!(data["topic"], "AI chips");
        assert_eq!(data["trend_results"][0]["title"], "AI capex keeps rising");
    }

    #[tokio::test]
    async fn test_search_failure_is_error_payload() {
        let mut provider = MockSearchProvider::new();
        provider.expect_name().return_const("mock".to_string());
        provider
            .expect_search()
            .returning(|_, _| Err(StockError::SearchError("rate limited".to_string())));

        let tool = MarketTrendTool::new(Arc::new(provider), Arc::new(StockConfig::default()));
        let data = tool.execute(json!({ "topic": "banks" })).await.unwrap();

        assert_eq!(data["error"], "Failed to search trends: Search error: rate limited");
    }

    #[tokio::test]
    async fn test_missing_topic_is_invalid_input() {
        let tool = MarketTrendTool::new(
            Arc::new(MockSearchProvider::new()),
            Arc::new(StockConfig::default()),
        );
        let err = tool.execute(json!({})).await.unwrap_err();
        assert!(matches!(err, agent_core::Error::InvalidInput(_)));
    }
}
