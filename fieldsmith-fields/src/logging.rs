//! Formatting helpers for log output.

use serde::Serialize;
use std::fmt::Debug;

/// Wrapper for pretty-printing flat values in logs as YAML
///
/// ```ignore
/// use fieldsmith_fields::Pretty;
/// use tracing::debug;
///
/// debug!("starting session with config:{}", Pretty(&config));
/// ```
///
/// Outputs YAML with a leading newline. Debug is used as a fallback if YAML
/// serialization fails. Serialization recurses, so keep whole field trees
/// out of it.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}
