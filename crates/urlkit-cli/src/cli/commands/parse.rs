//! `urlkit parse <url>` – print the structural decomposition.

use anyhow::Result;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::parse::parse_url;

pub fn run_parse(cfg: &UrlkitConfig, url: &str, json: bool) -> Result<()> {
    let Some(parsed) = parse_url(url) else {
        anyhow::bail!("URL could not be decomposed: {url}");
    };

    if json || cfg.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    println!("scheme:   {}", parsed.scheme);
    println!("host:     {}", parsed.host);
    if let Some(port) = parsed.port {
        println!("port:     {port}");
    }
    if let Some(path) = &parsed.path {
        println!("path:     {path}");
    }
    if let Some(query) = &parsed.query {
        println!("query:    {query}");
    }
    if let Some(fragment) = &parsed.fragment {
        println!("fragment: {fragment}");
    }
    Ok(())
}
