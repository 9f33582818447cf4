//! `urlkit check <url>` – validate against the URL grammar.

use anyhow::Result;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::validate::validate_url;

pub fn run_check(cfg: &UrlkitConfig, url: &str) -> Result<()> {
    let result = validate_url(url);
    if result.valid {
        println!("OK: {url}");
        return Ok(());
    }

    if cfg.first_error_only {
        if let Some(message) = result.first_message() {
            eprintln!("{message}");
        }
    } else {
        for message in result.messages() {
            eprintln!("{message}");
        }
    }
    anyhow::bail!("URL failed validation: {url}")
}
