//! Editor configuration values

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Largest accepted indentation per nesting level.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Settings for an interactive editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spaces of indentation per nesting level in the tree table.
    pub indent_width: usize,
    /// Name given to the root field of a new schema.
    pub root_name: String,
    /// Show field ids in the tree table.
    pub show_ids: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            root_name: "schema".to_string(),
            show_ids: false,
        }
    }
}

impl EditorConfig {
    /// Reject values the editor cannot lay out.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::validation(format!(
                "indent_width must be at most {MAX_INDENT_WIDTH}, got {}",
                self.indent_width
            )));
        }
        Ok(())
    }
}
