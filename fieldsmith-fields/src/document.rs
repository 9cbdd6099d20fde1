//! SchemaDocument: the host-side holder of the current field tree.
//!
//! Edits are applied one at a time: each one reads the current root,
//! computes a new root, and swaps it in only if the edit succeeded. A
//! refused edit leaves the document exactly as it was.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::path::FieldPath;
use crate::tree;
use crate::types::Field;

/// One user edit, addressed against the tree it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum FieldEdit {
    /// Replace the field at `path` wholesale.
    Update { path: FieldPath, field: Field },
    Delete { path: FieldPath },
    /// Append a default child to the container at `path`.
    AddChild { path: FieldPath },
}

impl FieldEdit {
    pub fn path(&self) -> &FieldPath {
        match self {
            FieldEdit::Update { path, .. }
            | FieldEdit::Delete { path }
            | FieldEdit::AddChild { path } => path,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            FieldEdit::Update { .. } => "update",
            FieldEdit::Delete { .. } => "delete",
            FieldEdit::AddChild { .. } => "add-child",
        }
    }
}

/// Owner of the current root field.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    root: Arc<Field>,
    revision: u64,
}

impl SchemaDocument {
    pub fn new(root: Field) -> Self {
        Self {
            root: Arc::new(root),
            revision: 0,
        }
    }

    /// The current root. Cloning the `Arc` gives a snapshot that later edits
    /// never change.
    pub fn root(&self) -> &Arc<Field> {
        &self.root
    }

    /// Number of edits applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, path: &FieldPath) -> Result<Arc<Field>> {
        tree::get(&self.root, path)
    }

    /// Apply one edit to the current root and store the result.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<()> {
        let verb = edit.verb();
        let path = edit.path().clone();
        let outcome = match edit {
            FieldEdit::Update { path, field } => tree::update(&self.root, &path, field),
            FieldEdit::Delete { path } => tree::delete(&self.root, &path),
            FieldEdit::AddChild { path } => tree::add_child(&self.root, &path),
        };

        match outcome {
            Ok(new_root) => {
                self.root = new_root;
                self.revision += 1;
                debug!(verb, %path, revision = self.revision, "applied field edit");
                Ok(())
            }
            Err(e) => {
                warn!(verb, %path, revision = self.revision, %e, "refused field edit");
                Err(e)
            }
        }
    }
}

impl Default for SchemaDocument {
    /// A document holding a fresh empty container root.
    fn default() -> Self {
        Self::new(Field::container())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldTreeError;
    use crate::types::FieldType;

    #[test_log::test]
    fn test_apply_swaps_root_and_bumps_revision() {
        let mut doc = SchemaDocument::default();
        let before = Arc::clone(doc.root());

        doc.apply(FieldEdit::AddChild {
            path: FieldPath::root(),
        })
        .unwrap();

        assert_eq!(doc.revision(), 1);
        assert_eq!(doc.root().children().len(), 1);
        assert!(before.children().is_empty());
    }

    #[test_log::test]
    fn test_refused_edit_leaves_document_untouched() {
        let mut doc = SchemaDocument::default();
        doc.apply(FieldEdit::AddChild {
            path: FieldPath::root(),
        })
        .unwrap();
        let snapshot = Arc::clone(doc.root());

        let err = doc
            .apply(FieldEdit::Delete {
                path: FieldPath::from(vec![4]),
            })
            .unwrap_err();

        assert!(matches!(err, FieldTreeError::PathNotFound { .. }));
        assert_eq!(doc.revision(), 1);
        assert!(Arc::ptr_eq(doc.root(), &snapshot));
    }

    #[test_log::test]
    fn test_stale_path_after_delete_is_refused() {
        let mut doc = SchemaDocument::default();
        for _ in 0..2 {
            doc.apply(FieldEdit::AddChild {
                path: FieldPath::root(),
            })
            .unwrap();
        }
        let stale = FieldPath::from(vec![1]);
        let field = doc.get(&stale).unwrap().with_type(FieldType::Boolean);

        doc.apply(FieldEdit::Delete {
            path: FieldPath::from(vec![0]),
        })
        .unwrap();

        assert!(doc
            .apply(FieldEdit::Update { path: stale, field })
            .is_err());
        assert_eq!(doc.root().children().len(), 1);
    }

    #[test]
    fn test_edit_json_shape() {
        let edit = FieldEdit::AddChild {
            path: FieldPath::from(vec![0, 2]),
        };
        let json = serde_json::to_value(&edit).unwrap();
        assert_eq!(json["op"], "add-child");
        assert_eq!(json["path"], serde_json::json!([0, 2]));
    }
}
