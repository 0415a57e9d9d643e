use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints a merged URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The merged URL as a single line.
    #[default]
    Text,
    /// Every part of the merged URL as a JSON object.
    Json,
}

/// Global configuration loaded from `~/.config/urldefault/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDefaultConfig {
    /// Defaults URL used when neither an explicit one nor a profile is given.
    #[serde(default)]
    pub defaults: Option<String>,
    /// Named defaults URLs, selected with `--profile`.
    #[serde(default)]
    pub profiles: BTreeMap<String, String>,
    #[serde(default)]
    pub output: OutputFormat,
}

impl UrlDefaultConfig {
    /// Resolves the defaults URL for an optional profile name.
    ///
    /// A named profile must exist; without a name the top-level `defaults`
    /// is used (which may itself be unset).
    pub fn defaults_for(&self, profile: Option<&str>) -> Result<Option<&str>> {
        match profile {
            Some(name) => self
                .profiles
                .get(name)
                .map(|url| Some(url.as_str()))
                .ok_or_else(|| anyhow::anyhow!("unknown profile: {name}")),
            None => Ok(self.defaults.as_deref()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urldefault")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlDefaultConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlDefaultConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<UrlDefaultConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlDefaultConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
