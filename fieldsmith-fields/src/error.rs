//! Error types for the field tree

use thiserror::Error;

use crate::path::FieldPath;
use crate::types::FieldType;

/// Result type for field tree operations
pub type Result<T> = std::result::Result<T, FieldTreeError>;

/// Errors that can occur while addressing or editing a field tree.
///
/// None of these are transient. A well-behaved host derives every path from
/// the tree it just rendered, so any occurrence points at a stale or buggy
/// caller and should be refused rather than retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldTreeError {
    /// A step indexed past the end of a children list or into a leaf field
    #[error("no field at path {path}")]
    PathNotFound { path: FieldPath },

    /// The path resolves but the operation is not allowed there
    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: FieldPath, reason: String },

    /// Children were requested on a leaf field
    #[error("field at path {path} is not a container")]
    NotAContainer { path: FieldPath },

    /// A field breaks the container/children pairing
    #[error("field at path {path} has type {field_type} but {}", shape_detail(.field_type))]
    ShapeViolation {
        path: FieldPath,
        field_type: FieldType,
    },

    /// Text could not be parsed as a path
    #[error("invalid path syntax: '{input}'")]
    InvalidPathSyntax { input: String },

    /// Text did not name one of the field types
    #[error("unknown field type: '{name}'")]
    UnknownFieldType { name: String },
}

impl FieldTreeError {
    /// Create an invalid path error
    pub fn invalid_path(path: FieldPath, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path,
            reason: reason.into(),
        }
    }
}

fn shape_detail(field_type: &FieldType) -> &'static str {
    if field_type.is_container() {
        "no children list"
    } else {
        "a children list"
    }
}
