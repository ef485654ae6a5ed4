//! Format conversion for fetched content
//!
//! The text and basic-markdown conversions are single-pass textual rewrites,
//! not a DOM parse: each rule is a regex applied once over the whole
//! document, in a fixed order. Nested or malformed markup may produce
//! imperfect but deterministic output.

use once_cell::sync::Lazy;
use regex::Regex;

/// One textual rewrite: pattern in, replacement out
struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("invalid rewrite pattern"),
            replacement,
        }
    }

    fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement)
            .into_owned()
    }
}

fn apply_rules(rules: &[RewriteRule], input: &str) -> String {
    let mut output = input.to_string();
    for rule in rules {
        output = rule.apply(&output);
    }
    output
}

/// Rules for plain-text extraction. Script and style blocks go first
/// (with their contents), then every remaining tag becomes a space, then
/// whitespace runs collapse.
static TEXT_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::new(r"(?is)<script.*?>.*?</script>", ""),
        RewriteRule::new(r"(?is)<style.*?>.*?</style>", ""),
        RewriteRule::new(r"<[^>]+>", " "),
        RewriteRule::new(r"\s+", " "),
    ]
});

/// Ordered rules for the basic HTML to Markdown rewrite.
///
/// The order is load-bearing: later rules see the output of earlier ones,
/// and the catch-all tag strip must run after every structural rule. Dot
/// matches newline only in the script/style rules; header and anchor
/// patterns tolerate attributes on the opening tag, the inline and
/// list/paragraph patterns do not.
static MARKDOWN_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::new(r"(?is)<script.*?>.*?</script>", ""),
        RewriteRule::new(r"(?is)<style.*?>.*?</style>", ""),
        RewriteRule::new(r"(?i)<h1.*?>(.*?)</h1>", "# ${1}\n\n"),
        RewriteRule::new(r"(?i)<h2.*?>(.*?)</h2>", "## ${1}\n\n"),
        RewriteRule::new(r"(?i)<h3.*?>(.*?)</h3>", "### ${1}\n\n"),
        RewriteRule::new(r"(?i)<strong>(.*?)</strong>", "**${1}**"),
        RewriteRule::new(r"(?i)<b>(.*?)</b>", "**${1}**"),
        RewriteRule::new(r"(?i)<em>(.*?)</em>", "*${1}*"),
        RewriteRule::new(r"(?i)<i>(.*?)</i>", "*${1}*"),
        RewriteRule::new(r#"(?i)<a href="(.*?)".*?>(.*?)</a>"#, "[${2}](${1})"),
        RewriteRule::new(r"(?i)<li>(.*?)</li>", "- ${1}\n"),
        RewriteRule::new(r"(?i)<p>(.*?)</p>", "${1}\n\n"),
        RewriteRule::new(r"(?i)<br\s*/?>", "\n"),
        RewriteRule::new(r"<[^>]+>", ""),
        RewriteRule::new(r"\n{3,}", "\n\n"),
    ]
});

/// Convert fetched content into the requested output format.
///
/// `"html"` passes through unchanged, and so does any unrecognized format
/// value; the schema layer is expected to reject those upstream.
pub fn convert(content: &str, format: &str) -> String {
    match format {
        "html" => content.to_string(),
        "text" => html_to_text(content),
        "markdown" => html_to_markdown(content),
        _ => content.to_string(),
    }
}

/// Convert HTML to plain text
pub fn html_to_text(html: &str) -> String {
    apply_rules(&TEXT_RULES, html).trim().to_string()
}

/// Convert HTML to markdown
///
/// Delegates to the highest-fidelity [`MarkdownConverter`] compiled in,
/// falling back to [`BasicRewrite`] when the delegate fails.
pub fn html_to_markdown(html: &str) -> String {
    #[cfg(feature = "htmd")]
    {
        if let Some(markdown) = HtmdConverter.convert(html) {
            return markdown;
        }
        tracing::warn!("htmd conversion failed, falling back to basic rewrite");
    }

    BasicRewrite
        .convert(html)
        .unwrap_or_else(|| html.to_string())
}

/// Capability interface for HTML to Markdown conversion.
///
/// Two implementations exist, selected by availability: [`HtmdConverter`]
/// when the `htmd` feature is compiled in, and [`BasicRewrite`] always.
pub trait MarkdownConverter {
    /// Engine name, for logging
    fn name(&self) -> &'static str;

    /// Convert the document; `None` means the engine could not handle it
    fn convert(&self, html: &str) -> Option<String>;
}

/// Regex-driven structural rewrite. Always available, never fails.
pub struct BasicRewrite;

impl MarkdownConverter for BasicRewrite {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn convert(&self, html: &str) -> Option<String> {
        Some(apply_rules(&MARKDOWN_RULES, html).trim().to_string())
    }
}

/// Higher-fidelity conversion delegated to the `htmd` crate
#[cfg(feature = "htmd")]
pub struct HtmdConverter;

#[cfg(feature = "htmd")]
impl MarkdownConverter for HtmdConverter {
    fn name(&self) -> &'static str {
        "htmd"
    }

    fn convert(&self, html: &str) -> Option<String> {
        htmd::convert(html).ok()
    }
}
