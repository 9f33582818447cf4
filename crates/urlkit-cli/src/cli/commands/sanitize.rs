//! `urlkit sanitize <url>` – print the sanitized form.

use urlkit_core::pipeline::needs_sanitization;
use urlkit_core::sanitize::sanitize_url;

pub fn run_sanitize(url: &str) {
    let sanitized = sanitize_url(url);
    if needs_sanitization(url) {
        tracing::debug!("input required cleanup: {url:?} -> {sanitized:?}");
    }
    println!("{sanitized}");
}
