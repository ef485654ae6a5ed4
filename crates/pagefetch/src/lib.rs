//! PageFetch - fetch a URL and convert the page
//!
//! This crate implements the `web_fetch` tool: one forward pipeline that
//! normalizes a URL, fetches it over HTTPS, guards against oversized pages,
//! and converts the body to markdown, plain text, or raw HTML.
//!
//! The library API is `Result`-based; the tool boundary
//! ([`Tool::execute`]) folds every failure into an `"Error: "`-prefixed
//! string, which is the contract existing callers depend on.

mod client;
mod convert;
mod error;
mod guard;
mod normalize;
mod tool;
mod types;

pub use client::{fetch, fetch_with_options, FetchOptions};
pub use convert::{convert, html_to_markdown, html_to_text, BasicRewrite, MarkdownConverter};
pub use error::FetchError;
pub use guard::guard;
pub use normalize::normalize;
pub use tool::{Tool, ToolBuilder};
pub use types::{FetchRequest, OutputFormat};

#[cfg(feature = "htmd")]
pub use convert::HtmdConverter;

/// Default User-Agent string sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; AgenticLoop/1.0)";

/// Tool name as exposed to the tool-invocation layer
pub const TOOL_NAME: &str = "web_fetch";

/// Tool description for LLM consumption
pub const TOOL_DESCRIPTION: &str =
    "Fetch content from a URL and convert to specified format (markdown, text, or HTML)";
