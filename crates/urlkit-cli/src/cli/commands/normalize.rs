//! `urlkit normalize <url>` – print the canonical form.

use anyhow::Result;
use urlkit_core::normalize::normalize_url;

pub fn run_normalize(url: &str) -> Result<()> {
    println!("{}", normalize_url(url)?);
    Ok(())
}
