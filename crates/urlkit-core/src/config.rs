//! CLI behavior knobs loaded from `~/.config/urlkit/config.toml`.
//!
//! Grammar patterns and safe-character sets are compile-time constants and
//! deliberately not configurable; this file only shapes how results are
//! presented.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlkitConfig {
    /// Emit JSON instead of plain text by default.
    #[serde(default)]
    pub json: bool,
    /// Print only the leading validation error, the way an inline input hint
    /// would, while the full list stays available via JSON output.
    #[serde(default)]
    pub first_error_only: bool,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlkitConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlkitConfig::default();
        assert!(!cfg.json);
        assert!(!cfg.first_error_only);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlkitConfig {
            json: true,
            first_error_only: true,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlkitConfig = toml::from_str(&toml).unwrap();
        assert!(parsed.json);
        assert!(parsed.first_error_only);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: UrlkitConfig = toml::from_str("json = true").unwrap();
        assert!(cfg.json);
        assert!(!cfg.first_error_only);

        let cfg: UrlkitConfig = toml::from_str("").unwrap();
        assert!(!cfg.json);
    }
}
