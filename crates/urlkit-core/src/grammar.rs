//! Compiled URL grammar patterns and policy constants.
//!
//! Everything here is immutable and compiled at most once per process. The
//! regex engine has no backtracking, so match cost stays linear even on
//! adversarial input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Practical upper bound on URL length, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Schemes accepted by the validation policy (checked case-insensitively).
pub const ACCEPTED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// Scheme prepended by the sanitizer when the input has none.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Full structural pattern for validation: `scheme://host[:port][/path]`,
/// with no `#` or whitespace allowed in the path.
pub static STRICT_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.-]*)://([^:/\s]+)(:\d+)?(/[^#\s]*)?$")
        .expect("strict URL pattern compiles")
});

/// Looser structural pattern used by the sanitizer: same shape, but the path
/// capture swallows everything (including query and fragment text).
pub static LOOSE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.-]*)://([^:/\s]+)(:\d+)?(/.*)?$")
        .expect("loose URL pattern compiles")
});

/// Detects a leading `scheme://` prefix.
pub static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").expect("scheme prefix pattern compiles")
});

/// Scheme grammar: a letter followed by letters, digits, `+`, `-`, or `.`.
pub static SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*$").expect("scheme pattern compiles"));

/// Dotted-quad shape; octet range is checked numerically by the validator.
pub static IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").expect("IPv4 pattern compiles"));

/// Domain name: alphanumeric/hyphen labels with no edge hyphens, ending in a
/// top label of at least two letters.
pub static DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)*[a-zA-Z]{2,}$")
        .expect("domain pattern compiles")
});
