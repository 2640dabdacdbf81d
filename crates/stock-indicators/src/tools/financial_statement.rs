//! Tool for headline financial statement figures

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::normalize_symbol;
use crate::error::Result;
use crate::formatter::stock_error_record;
use crate::loader::SeriesLoader;

/// Tool returning revenue, net income, total assets and total debt
pub struct FinancialStatementTool {
    loader: Arc<dyn SeriesLoader>,
}

#[derive(Debug, Deserialize)]
struct FinancialStatementParams {
    symbol: String,
}

/// Figure or `"N/A"` when the statement does not carry it
fn figure(value: Option<f64>) -> Value {
    value.map_or_else(|| json!("N/A"), |v| json!(v))
}

impl FinancialStatementTool {
    pub fn new(loader: Arc<dyn SeriesLoader>) -> Self {
        Self { loader }
    }

    async fn statement(&self, symbol: &str) -> Result<Value> {
        let Some(statement) = self.loader.load_financials(symbol).await? else {
            return Ok(json!({
                "error": format!("Could not retrieve financial statement for {symbol}")
            }));
        };

        Ok(json!({
            "symbol": symbol,
            "period": statement.period.unwrap_or_else(|| "N/A".to_string()),
            "revenue": figure(statement.revenue),
            "net_income": figure(statement.net_income),
            "total_assets": figure(statement.total_assets),
            "total_debt": figure(statement.total_debt),
        }))
    }
}

#[async_trait]
impl Tool for FinancialStatementTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: FinancialStatementParams = serde_json::from_value(params).map_err(|e| {
            agent_core::Error::InvalidInput(format!("Invalid parameters: {e}"))
        })?;
        let symbol = normalize_symbol(&params.symbol)?;

        match self.statement(&symbol).await {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::error!(%symbol, error = %err, "Error fetching financial statement");
                Ok(stock_error_record(&err))
            }
        }
    }

    fn name(&self) -> &str {
        "financial_statement"
    }

    fn description(&self) -> &str {
        "Retrieve key financial statement data for a stock symbol: revenue, net income, \
         total assets and total debt for the latest fiscal year."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol (e.g., 'AAPL', 'MSFT')"
                }
            },
            "required": ["symbol"]
        })
    }
}
