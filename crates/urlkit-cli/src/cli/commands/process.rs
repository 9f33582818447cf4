//! `urlkit process <url>` – run the full pipeline and report.

use anyhow::Result;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::pipeline::process_url;

pub fn run_process(cfg: &UrlkitConfig, url: &str, json: bool) -> Result<()> {
    let report = process_url(url);

    if json || cfg.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("original:   {}", report.original);
    println!("sanitized:  {}", report.sanitized);
    println!("normalized: {}", report.normalized);
    println!("valid:      {}", report.validation.valid);
    let messages = if cfg.first_error_only {
        report.validation.first_message().into_iter().collect()
    } else {
        report.validation.messages()
    };
    for message in messages {
        println!("  - {message}");
    }
    if report.needs_sanitization {
        println!("note: input will be cleaned before submission");
    }
    Ok(())
}
