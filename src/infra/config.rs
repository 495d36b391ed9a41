//! Optional `squeeze.toml` configuration.
//!
//! Every field has a built-in default and every CLI flag overrides its
//! config-file counterpart, so the file is never required. No environment
//! variables are consulted; a run is fully determined by the CLI, the
//! config file, and the source tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "squeeze.toml";

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory quoted includes are resolved against.
    pub src_dir: PathBuf,

    /// Root header file name inside `src_dir`.
    pub root: String,

    /// Include-guard token for the generated header.
    pub guard: String,

    /// Banner fields stamped at the top of the output.
    pub banner: BannerConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub title: String,
    pub author: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("src"),
            root: "lib.h".to_string(),
            guard: "LIB_H_".to_string(),
            banner: BannerConfig::default(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            title: "amalgamated single-header library".to_string(),
            author: "generated with squeeze".to_string(),
        }
    }
}

/// Load `squeeze.toml` from the working directory, or defaults if absent.
pub fn load_config() -> Result<Config> {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {CONFIG_FILE}"))?;
    let parsed: Config =
        toml::from_str(&text).with_context(|| format!("Failed to parse {CONFIG_FILE}"))?;

    Ok(parsed)
}
