//! Gallery configuration module.
//!
//! Handles loading and validating `gallery.toml`. Every directory
//! relationship and URL template the loader needs is a named setting here, so
//! nothing depends on the process working directory.
//!
//! ## Config File Location
//!
//! Place `gallery.toml` in the site root (the directory that owns `public/`):
//!
//! ```text
//! repo/
//! ├── snake-game.yaml           # Example definitions (examples_root = "..")
//! ├── todo-app.yml
//! └── front-end/                # Site root
//!     ├── gallery.toml          # Optional
//!     └── public/
//!         └── posters/
//!             └── snake-game.png
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! examples_root = ".."          # Relative paths resolve against the site root
//! public_dir = "public"
//! posters_dir = "posters"
//! cdn_base_url = "https://cdn.openai.com/devhub/gpt5prompts"
//! iframe_base_url = "/"
//! exclude_dirs = ["node_modules", "target"]
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys are
//! rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Loader configuration loaded from `gallery.toml`.
///
/// All fields have defaults matching the conventional layout: example YAML
/// files one level above the site root, posters under `public/posters`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Directory searched for example YAML files. Relative to the site root.
    pub examples_root: String,
    /// Static asset directory inside the site root.
    pub public_dir: String,
    /// Poster directory inside `public_dir`; also the URL path segment.
    pub posters_dir: String,
    /// Remote poster base, without trailing slash.
    pub cdn_base_url: String,
    /// Prefix prepended to the example id to form its iframe URL.
    pub iframe_base_url: String,
    /// Directory names skipped while searching for YAML files.
    pub exclude_dirs: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            examples_root: "..".to_string(),
            public_dir: "public".to_string(),
            posters_dir: "posters".to_string(),
            cdn_base_url: "https://cdn.openai.com/devhub/gpt5prompts".to_string(),
            iframe_base_url: "/".to_string(),
            exclude_dirs: vec!["node_modules".to_string(), "target".to_string()],
        }
    }
}

impl GalleryConfig {
    /// Validate config values are usable as path segments and URL bases.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("public_dir", &self.public_dir),
            ("posters_dir", &self.posters_dir),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if Path::new(value).is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a relative path, got {value}"
                )));
            }
        }
        if !(self.cdn_base_url.starts_with("https://") || self.cdn_base_url.starts_with("http://"))
        {
            return Err(ConfigError::Validation(format!(
                "cdn_base_url must be an http(s) URL, got {:?}",
                self.cdn_base_url
            )));
        }
        if self.cdn_base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "cdn_base_url must not end with '/'".into(),
            ));
        }
        Ok(())
    }

    /// Absolute-or-relative directory that holds the example YAML files.
    pub fn examples_dir(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.examples_root)
    }

    /// Directory probed for local `<id>.png` posters.
    pub fn posters_path(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.public_dir).join(&self.posters_dir)
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `gallery.toml` in the site root.
///
/// A missing file yields the defaults. Keys left out of the file keep their
/// default values; unknown keys are rejected. The result is validated.
pub fn load_config(site_root: &Path) -> Result<GalleryConfig, ConfigError> {
    let config_path = site_root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(GalleryConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: GalleryConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Example Gallery Configuration
# =============================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory searched recursively for *.yaml / *.yml example files.
# Relative paths resolve against the site root (the directory holding this file).
examples_root = ".."

# Static asset directory inside the site root.
public_dir = "public"

# Local posters live at <public_dir>/<posters_dir>/<id>.png and are served
# as /<posters_dir>/<id>.png.
posters_dir = "posters"

# Remote poster used when no local file exists: <cdn_base_url>/<id>.png
cdn_base_url = "https://cdn.openai.com/devhub/gpt5prompts"

# Each example's iframe URL is <iframe_base_url><id>.
iframe_base_url = "/"

# Directory names never descended into while searching for YAML files.
exclude_dirs = ["node_modules", "target"]
"##
}
