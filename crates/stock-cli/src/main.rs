//! Command-line runner for the stock research tools
//!
//! Runs the same tools an agent would call, against `<SYMBOL>.json` bar
//! files in a local directory, and prints the JSON tool output.
//!
//! ```bash
//! stock-research --data-dir ./data indicators AAPL --period 6mo
//! stock-research price AAPL
//! stock-research financials AAPL
//! stock-research tools
//! ```

use agent_tools::ToolRegistry;
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use stock_indicators::formatter::to_pretty_string;
use stock_indicators::{JsonFileLoader, StockConfig, build_registry};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stock-research")]
#[command(about = "Technical indicators and price snapshots from local bar files", long_about = None)]
struct Args {
    /// Directory holding <SYMBOL>.json bar files
    #[arg(long, global = true, env = "STOCK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Moving averages, RSI and trend signal for a symbol
    Indicators {
        symbol: String,
        /// Lookback period (1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max)
        #[arg(long)]
        period: Option<String>,
        /// Short moving average length
        #[arg(long)]
        short: Option<usize>,
        /// Long moving average length
        #[arg(long)]
        long: Option<usize>,
        /// RSI lookback length
        #[arg(long)]
        rsi: Option<usize>,
    },
    /// Latest price and company details for a symbol
    Price { symbol: String },
    /// Revenue, net income, assets and debt for the latest fiscal year
    Financials { symbol: String },
    /// List tool definitions as JSON
    Tools,
}

impl Command {
    /// Tool name and parameters for a tool-running command
    fn tool_call(&self) -> Option<(&'static str, Value)> {
        match self {
            Command::Indicators {
                symbol,
                period,
                short,
                long,
                rsi,
            } => {
                let mut params = json!({ "symbol": symbol });
                if let Some(period) = period {
                    params["period"] = json!(period);
                }
                if let Some(short) = short {
                    params["short_window"] = json!(short);
                }
                if let Some(long) = long {
                    params["long_window"] = json!(long);
                }
                if let Some(rsi) = rsi {
                    params["rsi_window"] = json!(rsi);
                }
                Some(("technical_indicators", params))
            }
            Command::Price { symbol } => Some(("stock_price", json!({ "symbol": symbol }))),
            Command::Financials { symbol } => {
                Some(("financial_statement", json!({ "symbol": symbol })))
            }
            Command::Tools => None,
        }
    }
}

fn registry_for(args: &Args) -> anyhow::Result<ToolRegistry> {
    let mut builder = StockConfig::builder().with_env();
    if let Some(dir) = &args.data_dir {
        builder = builder.data_dir(dir.clone());
    }
    let config = Arc::new(builder.build().context("invalid stock configuration")?);
    info!(data_dir = %config.data_dir.display(), "Using local bar files");

    let loader = Arc::new(JsonFileLoader::new(config.data_dir.clone()));
    Ok(build_registry(loader, None, config))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent_utils::init_tracing_with(&agent_utils::Config::from_env());

    let args = Args::parse();
    let registry = registry_for(&args)?;

    let output = match args.command.tool_call() {
        Some((tool, params)) => {
            info!(tool, "Running tool");
            registry
                .execute(tool, params)
                .await
                .with_context(|| format!("{tool} failed"))?
        }
        None => Value::Array(registry.definitions().iter().map(|d| d.to_json()).collect()),
    };

    println!("{}", to_pretty_string(&output));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_indicators_args_map_to_tool_params() {
        let args = Args::parse_from([
            "stock-research",
            "indicators",
            "AAPL",
            "--period",
            "6mo",
            "--short",
            "10",
        ]);
        let (tool, params) = args.command.tool_call().unwrap();
        assert_eq!(tool, "technical_indicators");
        assert_eq!(params["symbol"], "AAPL");
        assert_eq!(params["period"], "6mo");
        assert_eq!(params["short_window"], 10);
        assert!(params.get("long_window").is_none());
    }

    #[test]
    fn test_financials_maps_to_statement_tool() {
        let args = Args::parse_from(["stock-research", "financials", "msft"]);
        let (tool, params) = args.command.tool_call().unwrap();
        assert_eq!(tool, "financial_statement");
        assert_eq!(params["symbol"], "msft");
    }

    #[test]
    fn test_tools_command_has_no_call() {
        let args = Args::parse_from(["stock-research", "tools"]);
        assert!(args.command.tool_call().is_none());
    }
}
