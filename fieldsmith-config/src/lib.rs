//! Configuration for the fieldsmith schema editor, loaded with Figment
//!
//! Settings come from, in increasing precedence: built-in defaults, a
//! `.fieldsmith.{toml,yaml,yml,json}` file in the working directory (or an
//! explicit file), and `FIELDSMITH_`-prefixed environment variables.
//!
//! ```no_run
//! use fieldsmith_config::ConfigProvider;
//!
//! let config = ConfigProvider::new().load()?;
//! println!("indenting by {}", config.indent_width);
//! # Ok::<(), fieldsmith_config::ConfigError>(())
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat};
pub use error::{ConfigError, ConfigResult};
pub use provider::ConfigProvider;
pub use types::EditorConfig;

/// Load the editor configuration from the current directory and environment.
pub fn load_configuration() -> ConfigResult<EditorConfig> {
    ConfigProvider::new().load()
}
