//! Grammar validation of absolute URLs.
//!
//! Matches the input against the structural pattern
//! `scheme://host[:port][/path]` and checks each captured component
//! independently, accumulating every triggered issue instead of stopping at
//! the first. Validity is strictly `errors.is_empty()`, derived once at
//! construction.

mod component;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::grammar;

/// A single validation failure. Non-fatal: issues are accumulated into a
/// [`ValidationResult`], never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("URL is required")]
    EmptyInput,
    /// Exclusive: when the structural match fails, no other checks run.
    #[error("Invalid URL format. URL must follow the pattern: scheme://host[:port][/path]")]
    FormatMismatch,
    #[error("Invalid scheme: {scheme}. Scheme must start with a letter and contain only letters, digits, +, -, or .")]
    InvalidScheme { scheme: String },
    /// A policy failure, not a grammar one: the scheme is syntactically legal
    /// but outside the accepted set.
    #[error("Uncommon scheme: {scheme}. Common schemes are: http, https, ftp, ftps")]
    UncommonScheme { scheme: String },
    #[error("Invalid host: {host}. Host must be a valid domain name or IP address")]
    InvalidHost { host: String },
    #[error("Invalid port: {port}. Port must be a number between 1 and 65535")]
    InvalidPort { port: String },
    #[error("Invalid path: {path}. Path contains invalid characters")]
    InvalidPath { path: String },
    #[error("URL is too long. Maximum length is 2048 characters")]
    TooLong,
    /// The sanitized form could not be re-parsed during normalization.
    #[error("Unparsable URL: {reason}")]
    Unparsable { reason: String },
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The four components captured by the structural pattern. Present only on a
/// fully valid URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Outcome of [`validate_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<UrlParts>,
}

impl ValidationResult {
    /// Sole constructor: `valid` is derived from `errors` here and nowhere
    /// else. `parts` must be absent when any issue is present.
    pub(crate) fn from_issues(errors: Vec<ValidationIssue>, parts: Option<UrlParts>) -> Self {
        debug_assert!(parts.is_none() || errors.is_empty());
        Self {
            valid: errors.is_empty(),
            errors,
            parts,
        }
    }

    /// All issue messages, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// The leading issue message, for single-line feedback.
    pub fn first_message(&self) -> Option<String> {
        self.errors.first().map(ToString::to_string)
    }
}

/// Validates `url` against the URL grammar and the accepted-scheme policy.
///
/// Oversized input (over [`grammar::MAX_URL_LENGTH`] characters) is rejected
/// before any structural matching so hostile input never reaches the regex
/// engine.
pub fn validate_url(url: &str) -> ValidationResult {
    if url.is_empty() {
        return ValidationResult::from_issues(vec![ValidationIssue::EmptyInput], None);
    }
    if url.chars().count() > grammar::MAX_URL_LENGTH {
        return ValidationResult::from_issues(vec![ValidationIssue::TooLong], None);
    }

    let Some(caps) = grammar::STRICT_URL.captures(url) else {
        return ValidationResult::from_issues(vec![ValidationIssue::FormatMismatch], None);
    };

    let scheme = &caps[1];
    let host = &caps[2];
    let port = caps.get(3).map(|m| &m.as_str()[1..]);
    let path = caps.get(4).map(|m| m.as_str());

    let mut errors = Vec::new();
    if !component::valid_scheme(scheme) {
        errors.push(ValidationIssue::InvalidScheme {
            scheme: scheme.to_string(),
        });
    }
    if !grammar::ACCEPTED_SCHEMES.contains(&scheme.to_lowercase().as_str()) {
        errors.push(ValidationIssue::UncommonScheme {
            scheme: scheme.to_string(),
        });
    }
    if !component::valid_host(host) {
        errors.push(ValidationIssue::InvalidHost {
            host: host.to_string(),
        });
    }
    if let Some(port) = port {
        if !component::valid_port(port) {
            errors.push(ValidationIssue::InvalidPort {
                port: port.to_string(),
            });
        }
    }
    if let Some(path) = path {
        if !component::valid_path(path) {
            errors.push(ValidationIssue::InvalidPath {
                path: path.to_string(),
            });
        }
    }

    let parts = if errors.is_empty() {
        Some(UrlParts {
            scheme: scheme.to_string(),
            host: host.to_string(),
            port: port.and_then(|p| p.parse().ok()),
            path: path.map(str::to_string),
        })
    } else {
        None
    };
    ValidationResult::from_issues(errors, parts)
}
