//! `urlkit dedupe` – canonicalize stdin URLs and drop duplicates.

use anyhow::Result;
use std::collections::HashSet;
use std::io::{BufRead, Write};
use urlkit_core::normalize::normalize_url;

/// Reads URLs line by line, writes each canonical form the first time it is
/// seen. Unparsable lines are logged and skipped rather than aborting the
/// stream.
pub fn run_dedupe(input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut seen = HashSet::new();
    let mut skipped = 0usize;

    for line in input.lines() {
        let line = line?;
        let candidate = line.trim();
        if candidate.is_empty() {
            continue;
        }
        match normalize_url(candidate) {
            Ok(canonical) => {
                if seen.insert(canonical.clone()) {
                    writeln!(output, "{canonical}")?;
                }
            }
            Err(err) => {
                tracing::warn!("skipping unparsable URL: {err}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        eprintln!("skipped {skipped} unparsable line(s)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dedupe(input: &str) -> String {
        let mut out = Vec::new();
        run_dedupe(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn equivalent_spellings_collapse_to_one_line() {
        let out = dedupe("HTTPS://EXAMPLE.COM/docs\nhttps://example.com:443/docs\nexample.com/docs/\n");
        assert_eq!(out, "https://example.com/docs\n");
    }

    #[test]
    fn distinct_urls_all_survive() {
        let out = dedupe("example.com/a\nexample.com/b\n");
        assert_eq!(out, "https://example.com/a\nhttps://example.com/b\n");
    }

    #[test]
    fn blank_and_unparsable_lines_are_skipped() {
        // blank lines drop out before normalization; the non-numeric port
        // makes the middle line unparsable and it is skipped with a warning
        let out = dedupe("\n   \nhttps://a:b\nexample.com\n");
        assert_eq!(out, "https://example.com/\n");
    }
}
