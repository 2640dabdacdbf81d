//! Text search capability used by the news and trend tools
//!
//! The provider is injected into the tools that need it. When no provider
//! is configured, those tools are simply not registered.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Web or news search backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run `query` and return the provider's raw results as JSON
    async fn search(&self, query: &str, max_results: usize) -> Result<Value>;

    /// Provider name for logs
    fn name(&self) -> &str;
}
