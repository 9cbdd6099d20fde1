//! Configuration provider using Figment

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

use crate::discovery::{self, ConfigFile, ConfigFormat};
use crate::error::{ConfigError, ConfigResult};
use crate::types::EditorConfig;

/// Prefix of environment variables read as configuration.
pub const ENV_PREFIX: &str = "FIELDSMITH_";

/// Loads [`EditorConfig`] from layered sources.
///
/// Sources are merged in precedence order (later sources override earlier ones):
/// 1. Default values
/// 2. The explicit config file if one was given, otherwise a `.fieldsmith.*`
///    file discovered in the search directory
/// 3. Environment variables with the `FIELDSMITH_` prefix
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    search_dir: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
}

impl ConfigProvider {
    /// Create a provider searching the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `dir` instead of the current directory
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = Some(dir.into());
        self
    }

    /// Load exactly this file instead of discovering one
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Load and validate the editor configuration
    pub fn load(&self) -> ConfigResult<EditorConfig> {
        let config: EditorConfig = self.build_figment()?.extract()?;
        config.validate()?;
        debug!(
            indent_width = config.indent_width,
            root_name = %config.root_name,
            show_ids = config.show_ids,
            "Loaded editor configuration"
        );
        Ok(config)
    }

    fn build_figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(EditorConfig::default()));

        if let Some(file) = self.config_file()? {
            trace!(
                "Loading config file: {} ({:?})",
                file.path.display(),
                file.format
            );
            figment = figment.merge(file_provider(&file));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    fn config_file(&self) -> ConfigResult<Option<ConfigFile>> {
        if let Some(path) = &self.explicit_file {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound { path: path.clone() });
            }
            let format = ConfigFormat::from_path(path)
                .ok_or_else(|| ConfigError::UnsupportedFormat { path: path.clone() })?;
            return Ok(Some(ConfigFile {
                path: path.clone(),
                format,
            }));
        }

        let dir = match &self.search_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };
        Ok(discovery::discover(&dir))
    }
}

fn file_provider(file: &ConfigFile) -> Figment {
    let path: &Path = &file.path;
    match file.format {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    }
}
