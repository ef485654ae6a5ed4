//! URL normalization
//!
//! Trims the input, supplies a scheme when missing, and upgrades `http://`
//! to `https://`. This is deliberate string surgery rather than a URL-library
//! rewrite: a malformed scheme-like prefix is passed through unvalidated and
//! left for the fetcher to reject.

/// Normalize a raw URL string so it carries an explicit `https://` scheme.
///
/// Total function: never fails on its own. Host and path syntax are not
/// validated here.
pub fn normalize(raw: &str) -> String {
    let url = raw.trim();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return format!("https://{url}");
    }

    if let Some(rest) = url.strip_prefix("http://") {
        return format!("https://{rest}");
    }

    url.to_string()
}
