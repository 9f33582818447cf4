//! URL normalization to a canonical comparison form.
//!
//! Re-sanitizes the input, then delegates re-parsing to the standards-based
//! `url` parser. Parsing already lowercases scheme and host and strips the
//! default port (80 for http, 443 for https, 21 for ftp; ftps has no wired
//! default and keeps an explicit port). On top of that, bare `?`/`#` markers
//! are cleared and the path is collapsed.

use thiserror::Error;
use url::Url;

use crate::sanitize::sanitize_url;

/// The sanitized form still has no parseable absolute-URL structure.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("could not parse sanitized URL {sanitized:?}: {source}")]
    Unparsable {
        sanitized: String,
        #[source]
        source: url::ParseError,
    },
}

/// Normalizes `url` into its canonical string form.
///
/// The canonical form is the single representative for all
/// sanitize-equivalent spellings of a URL, suitable for comparison and
/// deduplication. Runs of `/` in the path collapse to one, and a trailing
/// separator is dropped unless the path is exactly the root.
pub fn normalize_url(url: &str) -> Result<String, NormalizeError> {
    if url.is_empty() {
        return Ok(String::new());
    }

    let sanitized = sanitize_url(url);
    let mut parsed = Url::parse(&sanitized).map_err(|source| NormalizeError::Unparsable {
        sanitized: sanitized.clone(),
        source,
    })?;

    if parsed.query() == Some("") {
        parsed.set_query(None);
    }
    if parsed.fragment() == Some("") {
        parsed.set_fragment(None);
    }

    let collapsed = collapse_path(parsed.path());
    if collapsed != parsed.path() {
        parsed.set_path(&collapsed);
    }

    Ok(parsed.to_string())
}

/// Collapses separator runs and strips a single trailing separator, keeping a
/// bare root path intact.
fn collapse_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}
