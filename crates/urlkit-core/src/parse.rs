//! Structural decomposition of URLs, independent of validation policy.

use serde::Serialize;
use url::Url;

/// Components of a successfully decomposed URL. `is_valid` reflects only that
/// the structural parse succeeded, not the validation policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    pub scheme: String,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
    pub is_valid: bool,
}

/// Decomposes `url` into its components, or `None` when the underlying
/// parser cannot make sense of the string. The port is absent when it equals
/// the scheme's default; empty path/query/fragment map to `None`.
pub fn parse_url(url: &str) -> Option<ParsedUrl> {
    let parsed = Url::parse(url).ok()?;
    Some(ParsedUrl {
        scheme: parsed.scheme().to_string(),
        host: parsed.host_str().unwrap_or("").to_string(),
        port: parsed.port(),
        path: non_empty(parsed.path()),
        query: parsed.query().and_then(non_empty),
        fragment: parsed.fragment().and_then(non_empty),
        is_valid: true,
    })
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
