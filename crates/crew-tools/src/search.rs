//! Web search tool backed by the Tavily search API
//!
//! Exposed to agents under the name `"Search"`. One query in, up to
//! `max_results` ranked results out. No retry, caching, or rate limiting: a
//! failed request is returned as an error to the caller.

use async_trait::async_trait;
use crew_core::{Error, Result, Tool};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use tracing::{debug, instrument};

/// Name agents use to call the search tool
pub const SEARCH_TOOL_NAME: &str = "Search";

const DEFAULT_TAVILY_API_BASE: &str = "https://api.tavily.com";
const DEFAULT_MAX_RESULTS: usize = 5;
const DESCRIPTION: &str = "Useful for searching current information about AI models";

/// Configuration for the search tool
#[derive(Clone)]
pub struct SearchConfig {
    /// Tavily API key
    pub api_key: String,

    /// Base URL of the search API
    pub api_base: String,

    /// Upper bound on results returned per query
    pub max_results: usize,
}

impl SearchConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_TAVILY_API_BASE.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("max_results", &self.max_results)
            .finish()
    }
}

/// One ranked search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: String,
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Web search capability
pub struct SearchTool {
    client: Client,
    config: SearchConfig,
}

impl SearchTool {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one query against the search API
    #[instrument(skip(self), fields(max_results = self.config.max_results))]
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let response = self
            .client
            .post(format!("{}/search", self.config.api_base))
            .bearer_auth(&self.config.api_key)
            .json(&TavilyRequest {
                query,
                max_results: self.config.max_results,
            })
            .send()
            .await
            .map_err(|e| failed(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(failed(format!("API error {status}: {body}")));
        }

        let body: TavilyResponse = response
            .json()
            .await
            .map_err(|e| failed(format!("failed to parse response: {e}")))?;

        let results = take_ranked(body.results, self.config.max_results);
        debug!("Search returned {} result(s)", results.len());
        Ok(results)
    }
}

fn failed(detail: String) -> Error {
    Error::ToolFailed {
        tool: SEARCH_TOOL_NAME.to_string(),
        detail,
    }
}

/// Keep the provider's ranking, capped at `max`
fn take_ranked(mut results: Vec<SearchResult>, max: usize) -> Vec<SearchResult> {
    results.truncate(max);
    results
}

#[async_trait]
impl Tool for SearchTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: SearchParams =
            serde_json::from_value(params).map_err(|e| Error::InvalidToolInput {
                tool: SEARCH_TOOL_NAME.to_string(),
                detail: e.to_string(),
            })?;

        let results = self.search(&params.query).await?;
        Ok(json!(results))
    }

    fn name(&self) -> &str {
        SEARCH_TOOL_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text search query"
                }
            },
            "required": ["query"]
        })
    }
}
