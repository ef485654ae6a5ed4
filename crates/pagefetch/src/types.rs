//! Core types for PageFetch

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for fetched content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML converted to Markdown
    #[default]
    Markdown,
    /// HTML stripped down to plain text
    Text,
    /// Raw HTML as fetched
    Html,
}

impl OutputFormat {
    /// The lowercase wire name of this format
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" => Ok(OutputFormat::Markdown),
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            _ => Err("Invalid format: must be markdown, text, or html".to_string()),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to fetch a URL and convert its content
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FetchRequest {
    /// URL to fetch content from (HTTP will be auto-upgraded to HTTPS)
    pub url: String,

    /// Output format - markdown by default
    #[serde(default)]
    pub format: OutputFormat,
}

impl FetchRequest {
    /// Create a new request with the given URL and the default format
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default_is_markdown() {
        assert_eq!(OutputFormat::default(), OutputFormat::Markdown);
        assert_eq!(FetchRequest::new("https://example.com").format, OutputFormat::Markdown);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("markdown").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("Html").unwrap(), OutputFormat::Html);
        assert!(OutputFormat::from_str("pdf").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        for format in [OutputFormat::Markdown, OutputFormat::Text, OutputFormat::Html] {
            assert_eq!(OutputFormat::from_str(format.as_str()).unwrap(), format);
        }
    }

    #[test]
    fn test_request_builder() {
        let req = FetchRequest::new("https://example.com").format(OutputFormat::Text);
        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.format, OutputFormat::Text);
    }

    #[test]
    fn test_request_deserialization_defaults_format() {
        let req: FetchRequest = serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(req.format, OutputFormat::Markdown);

        let req: FetchRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "format": "text"}"#).unwrap();
        assert_eq!(req.format, OutputFormat::Text);
    }

    #[test]
    fn test_format_serializes_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Markdown).unwrap();
        assert_eq!(json, "\"markdown\"");
    }
}
