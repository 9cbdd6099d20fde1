//! Positional paths into a field tree.
//!
//! A path is the list of child indices walked from the root; the empty path
//! is the root itself. Paths are only valid against the tree they were
//! computed from, since inserting or deleting a sibling shifts every later
//! index. Hosts recompute them from the current tree on every render and
//! never store them as identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldTreeError;

/// Ordered child indices locating a field relative to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<usize>);

impl FieldPath {
    /// The empty path, denoting the root field.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A new path extending this one by `index`.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// The path of the containing field, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.split_last().map(|(parent, _)| parent)
    }

    /// Split into the parent path and the final index.
    pub fn split_last(&self) -> Option<(Self, usize)> {
        self.0
            .split_last()
            .map(|(last, rest)| (Self(rest.to_vec()), *last))
    }

    /// The final index, or `None` for the root.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Nesting depth of the addressed field; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for FieldPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for FieldPath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(".");
        }
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = FieldTreeError;

    /// Parse `0.2.1` style paths. `.`, `root` and the empty string all mean the root.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "." || trimmed.eq_ignore_ascii_case("root") {
            return Ok(Self::root());
        }
        trimmed
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                part.parse::<usize>().ok()
            })
            .collect::<Option<Vec<_>>>()
            .map(Self)
            .ok_or_else(|| FieldTreeError::InvalidPathSyntax {
                input: s.to_string(),
            })
    }
}
