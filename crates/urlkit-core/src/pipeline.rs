//! Pipeline facade: sanitize, normalize, validate in one call.
//!
//! This is the entry point callers use before submitting a URL anywhere:
//! one pass produces the sanitized and canonical forms, the full validation
//! verdict, and a flag telling the caller whether the input will be cleaned.

use serde::Serialize;

use crate::normalize::normalize_url;
use crate::sanitize::sanitize_url;
use crate::validate::{validate_url, ValidationIssue, ValidationResult};

/// Aggregate outcome of [`process_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingResult {
    pub original: String,
    pub sanitized: String,
    pub normalized: String,
    pub validation: ValidationResult,
    pub needs_sanitization: bool,
}

/// True when sanitization would change `url` in any way.
pub fn needs_sanitization(url: &str) -> bool {
    sanitize_url(url) != url
}

/// Runs the full pipeline over `url`.
///
/// Validation always applies to the canonical form. When even the sanitized
/// form cannot be re-parsed, `normalized` falls back to the sanitized string
/// and the validation result carries the single `Unparsable` issue.
pub fn process_url(url: &str) -> ProcessingResult {
    let original = url.to_string();
    let sanitized = sanitize_url(url);
    let (normalized, validation) = match normalize_url(&sanitized) {
        Ok(normalized) => {
            let validation = validate_url(&normalized);
            (normalized, validation)
        }
        Err(err) => {
            tracing::debug!("normalization failed: {err}");
            let validation = ValidationResult::from_issues(
                vec![ValidationIssue::Unparsable {
                    reason: err.to_string(),
                }],
                None,
            );
            (sanitized.clone(), validation)
        }
    };
    let needs_sanitization = sanitized != original;

    ProcessingResult {
        original,
        sanitized,
        normalized,
        validation,
        needs_sanitization,
    }
}
