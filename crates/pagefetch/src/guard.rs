//! Content size guard
//!
//! Protects downstream consumers from excessively large pages by replacing
//! oversized content with a short prefix plus a human-readable note.

use tracing::warn;

/// Content above this many characters gets truncated
const MAX_CONTENT_CHARS: usize = 50_000;

/// Number of characters kept when truncating
const KEPT_CHARS: usize = 5_000;

/// Truncate oversized content, appending a note with the original size and
/// the source URL. Content at or under the threshold passes through
/// unchanged.
///
/// Lengths are measured on the decoded string, not raw bytes.
pub fn guard(content: &str, url: &str) -> String {
    let total = content.chars().count();
    if total <= MAX_CONTENT_CHARS {
        return content.to_string();
    }

    warn!(url, total, "content exceeds size limit, truncating");

    let kept: String = content.chars().take(KEPT_CHARS).collect();
    format!(
        "{kept}\n\n---\n**Note**: Content truncated from {} bytes to 5,000 bytes for brevity.\nURL: {url}\nConsider requesting a more specific page or section if needed.",
        group_thousands(total)
    )
}

/// Format a count with comma thousands separators (60000 -> "60,000")
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
