//! Configuration file discovery
//!
//! Looks for a `.fieldsmith.{toml,yaml,yml,json}` file in a directory. The
//! first match in that order wins.

use std::path::{Path, PathBuf};
use tracing::trace;

/// Base name of discovered configuration files.
pub const CONFIG_FILE_STEM: &str = ".fieldsmith";

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (.toml extension)
    Toml,
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// A configuration file and its detected format
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
}

/// Find the configuration file in `dir`, if any.
pub fn discover(dir: &Path) -> Option<ConfigFile> {
    ["toml", "yaml", "yml", "json"].into_iter().find_map(|ext| {
        let path = dir.join(format!("{CONFIG_FILE_STEM}.{ext}"));
        trace!("Checking config file: {}", path.display());
        let format = ConfigFormat::from_extension(ext)?;
        path.is_file().then_some(ConfigFile { path, format })
    })
}
