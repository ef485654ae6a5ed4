//! Tool builder and contract for web_fetch

use crate::client::{fetch_with_options, FetchOptions};
use crate::convert::convert;
use crate::error::FetchError;
use crate::guard::guard;
use crate::normalize::normalize;
use crate::types::FetchRequest;
use crate::{TOOL_DESCRIPTION, TOOL_NAME};
use schemars::schema_for;
use std::time::Duration;

/// Builder for configuring the web_fetch tool
#[derive(Debug, Clone, Default)]
pub struct ToolBuilder {
    /// Custom User-Agent
    user_agent: Option<String>,
    /// Custom total timeout
    timeout: Option<Duration>,
}

impl ToolBuilder {
    /// Create a new tool builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set custom total timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the tool
    pub fn build(self) -> Tool {
        Tool {
            user_agent: self.user_agent,
            timeout: self.timeout,
        }
    }
}

/// Configured web_fetch tool
#[derive(Debug, Clone, Default)]
pub struct Tool {
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl Tool {
    /// Create a new tool builder
    pub fn builder() -> ToolBuilder {
        ToolBuilder::new()
    }

    /// Tool name as exposed to callers
    pub fn name(&self) -> &'static str {
        TOOL_NAME
    }

    /// Human-readable tool description
    pub fn description(&self) -> &'static str {
        TOOL_DESCRIPTION
    }

    /// Input schema as JSON
    pub fn input_schema(&self) -> serde_json::Value {
        let schema = schema_for!(FetchRequest);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Run the full pipeline, returning a structured error on failure.
    ///
    /// Stages run strictly forward: normalize, fetch, size guard, convert.
    /// The guard and converter never run on a failed fetch.
    pub async fn run(&self, url: &str, format: &str) -> Result<String, FetchError> {
        if url.trim().is_empty() {
            return Err(FetchError::MissingUrl);
        }

        let url = normalize(url);

        let options = FetchOptions {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
        };
        let content = fetch_with_options(&url, options).await?;

        let content = guard(&content, &url);

        Ok(convert(&content, format))
    }

    /// Execute the tool, folding every failure into an `"Error: "` string.
    ///
    /// This is the outward-facing contract: callers always receive a string
    /// and detect failure only by the prefix. Pass `"markdown"` as the
    /// format for the default behavior.
    pub async fn execute(&self, url: &str, format: &str) -> String {
        match self.run(url, format).await {
            Ok(content) => content,
            Err(e) => format!("Error: {e}"),
        }
    }

    /// Execute a schema-typed request
    pub async fn call(&self, req: &FetchRequest) -> String {
        self.execute(&req.url, req.format.as_str()).await
    }
}
