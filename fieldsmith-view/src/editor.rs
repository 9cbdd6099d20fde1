//! SchemaEditor: binds the presenter's callbacks to a `SchemaDocument`.
//!
//! Every callback becomes exactly one edit against the current root. The new
//! root is stored before the callback returns, so the next intent always
//! starts from the tree the user is looking at.

use std::sync::Arc;

use fieldsmith_fields::{Field, FieldEdit, FieldPath, FieldTreeError, SchemaDocument};

use crate::callbacks::FieldCallbacks;
use crate::render::{self, RenderNode};
use crate::row::FieldRow;

/// Host state for an interactive editing session.
#[derive(Debug, Default)]
pub struct SchemaEditor {
    document: SchemaDocument,
    last_error: Option<FieldTreeError>,
}

impl SchemaEditor {
    pub fn new(root: Field) -> Self {
        Self::from_document(SchemaDocument::new(root))
    }

    pub fn from_document(document: SchemaDocument) -> Self {
        Self {
            document,
            last_error: None,
        }
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    pub fn root(&self) -> &Arc<Field> {
        self.document.root()
    }

    /// Render the current tree.
    pub fn rows(&self) -> Vec<RenderNode> {
        render::render(self.document.root())
    }

    /// The row currently rendered at `path`.
    pub fn row(&self, path: &FieldPath) -> Option<FieldRow> {
        render::row_at(self.document.root(), path)
    }

    /// Why the most recent callback was refused, if it was.
    pub fn last_error(&self) -> Option<&FieldTreeError> {
        self.last_error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<FieldTreeError> {
        self.last_error.take()
    }

    fn dispatch(&mut self, edit: FieldEdit) {
        self.last_error = self.document.apply(edit).err();
    }
}

impl FieldCallbacks for SchemaEditor {
    fn on_update(&mut self, path: FieldPath, field: Field) {
        self.dispatch(FieldEdit::Update { path, field });
    }

    fn on_delete(&mut self, path: FieldPath) {
        self.dispatch(FieldEdit::Delete { path });
    }

    fn on_add_child(&mut self, path: FieldPath) {
        self.dispatch(FieldEdit::AddChild { path });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsmith_fields::FieldType;

    #[test_log::test]
    fn test_add_rename_retype_through_rows() {
        let mut editor = SchemaEditor::default();

        let root_row = editor.row(&FieldPath::root()).unwrap();
        assert!(root_row.add_item(&mut editor));

        let child = editor.row(&FieldPath::from(vec![0])).unwrap();
        child.change_name("age", &mut editor);
        let child = editor.row(&FieldPath::from(vec![0])).unwrap();
        child.change_type(FieldType::Number, &mut editor);

        assert!(editor.last_error().is_none());
        assert_eq!(editor.document().revision(), 3);
        let age = editor.row(&FieldPath::from(vec![0])).unwrap();
        assert_eq!(age.field().name, "age");
        assert_eq!(age.field().field_type, FieldType::Number);
        assert!(age.field().children.is_none());
    }

    #[test_log::test]
    fn test_refused_callback_is_recorded() {
        let mut editor = SchemaEditor::default();
        let root_row = editor.row(&FieldPath::root()).unwrap();

        root_row.delete(&mut editor);

        assert!(matches!(
            editor.last_error(),
            Some(FieldTreeError::InvalidPath { .. })
        ));
        assert_eq!(editor.document().revision(), 0);

        // a later successful edit clears it
        root_row.add_item(&mut editor);
        assert!(editor.last_error().is_none());
    }

    #[test]
    fn test_direct_callback_on_leaf_is_refused() {
        let mut editor = SchemaEditor::default();
        editor.on_add_child(FieldPath::root());
        editor.on_add_child(FieldPath::from(vec![0]));

        assert_eq!(
            editor.take_error(),
            Some(FieldTreeError::NotAContainer {
                path: FieldPath::from(vec![0])
            })
        );
        assert!(editor.last_error().is_none());
    }
}
