//! FieldRow: one rendered field plus the intents a user can raise on it.
//!
//! A row is a snapshot: it holds the field as it was when the tree was
//! rendered, the path it was rendered at, and its nesting level. Intents
//! never touch the snapshot. Each one builds a replacement value and hands
//! it to exactly one callback.

use std::sync::Arc;

use fieldsmith_fields::{Field, FieldId, FieldPath, FieldType};

use crate::callbacks::FieldCallbacks;

/// One field as rendered at a given path.
#[derive(Debug, Clone)]
pub struct FieldRow {
    field: Arc<Field>,
    path: FieldPath,
    nesting_level: usize,
}

impl FieldRow {
    pub fn new(field: Arc<Field>, path: FieldPath, nesting_level: usize) -> Self {
        Self {
            field,
            path,
            nesting_level,
        }
    }

    /// The row for the root field, at nesting level 0.
    pub fn root(root: &Arc<Field>) -> Self {
        Self::new(Arc::clone(root), FieldPath::root(), 0)
    }

    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    pub fn id(&self) -> FieldId {
        self.field.id
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn nesting_level(&self) -> usize {
        self.nesting_level
    }

    pub fn is_container(&self) -> bool {
        self.field.is_container()
    }

    /// Rows for this field's children, at `path + [index]` one level deeper.
    /// Leaves have none.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = FieldRow> + '_ {
        let shown: &[Arc<Field>] = if self.is_container() {
            self.field.children()
        } else {
            &[]
        };
        shown.iter().enumerate().map(move |(index, child)| {
            FieldRow::new(
                Arc::clone(child),
                self.path.child(index),
                self.nesting_level + 1,
            )
        })
    }

    /// The name input changed.
    pub fn change_name<C>(&self, name: impl Into<String>, callbacks: &mut C)
    where
        C: FieldCallbacks + ?Sized,
    {
        let mut updated = Field::clone(&self.field);
        updated.name = name.into();
        callbacks.on_update(self.path.clone(), updated);
    }

    /// The type selector changed.
    ///
    /// The replacement keeps the children list in step with the new type:
    /// dropped when leaving `nested`, started empty when entering it.
    pub fn change_type<C>(&self, field_type: FieldType, callbacks: &mut C)
    where
        C: FieldCallbacks + ?Sized,
    {
        callbacks.on_update(self.path.clone(), self.field.with_type(field_type));
    }

    /// The required toggle changed.
    pub fn change_required<C>(&self, required: bool, callbacks: &mut C)
    where
        C: FieldCallbacks + ?Sized,
    {
        let mut updated = Field::clone(&self.field);
        updated.required = required;
        callbacks.on_update(self.path.clone(), updated);
    }

    /// The delete button was pressed.
    pub fn delete<C>(&self, callbacks: &mut C)
    where
        C: FieldCallbacks + ?Sized,
    {
        callbacks.on_delete(self.path.clone());
    }

    /// The "add item" button was pressed.
    ///
    /// Only containers render that button, so on a leaf nothing is invoked
    /// and `false` is returned.
    pub fn add_item<C>(&self, callbacks: &mut C) -> bool
    where
        C: FieldCallbacks + ?Sized,
    {
        if !self.is_container() {
            return false;
        }
        callbacks.on_add_child(self.path.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Update(FieldPath, Field),
        Delete(FieldPath),
        AddChild(FieldPath),
    }

    /// Callbacks that only record what they were asked to do.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl FieldCallbacks for Recorder {
        fn on_update(&mut self, path: FieldPath, field: Field) {
            self.calls.push(Call::Update(path, field));
        }

        fn on_delete(&mut self, path: FieldPath) {
            self.calls.push(Call::Delete(path));
        }

        fn on_add_child(&mut self, path: FieldPath) {
            self.calls.push(Call::AddChild(path));
        }
    }

    fn nested_row() -> FieldRow {
        let field = Field::container()
            .with_name("address")
            .with_child(Field::new().with_name("street"))
            .with_child(Field::new().with_name("zip").with_type(FieldType::Number));
        FieldRow::new(Arc::new(field), FieldPath::from(vec![2]), 1)
    }

    #[test]
    fn test_change_name_keeps_id_and_children() {
        let row = nested_row();
        let mut recorder = Recorder::default();

        row.change_name("home", &mut recorder);

        let [Call::Update(path, field)] = recorder.calls.as_slice() else {
            panic!("expected one update, got {:?}", recorder.calls);
        };
        assert_eq!(path, &FieldPath::from(vec![2]));
        assert_eq!(field.name, "home");
        assert_eq!(field.id, row.id());
        assert!(Arc::ptr_eq(&field.children()[0], &row.field().children()[0]));
        assert_eq!(row.field().name, "address");
    }

    #[test]
    fn test_change_type_to_leaf_clears_children() {
        let row = nested_row();
        let mut recorder = Recorder::default();

        row.change_type(FieldType::ObjectId, &mut recorder);

        let [Call::Update(_, field)] = recorder.calls.as_slice() else {
            panic!("expected one update");
        };
        assert_eq!(field.field_type, FieldType::ObjectId);
        assert!(field.children.is_none());
    }

    #[test]
    fn test_change_type_to_nested_starts_empty() {
        let row = FieldRow::new(Arc::new(Field::new()), FieldPath::from(vec![0]), 1);
        let mut recorder = Recorder::default();

        row.change_type(FieldType::Nested, &mut recorder);

        let [Call::Update(_, field)] = recorder.calls.as_slice() else {
            panic!("expected one update");
        };
        assert_eq!(field.children, Some(vec![]));
    }

    #[test]
    fn test_change_required() {
        let row = nested_row();
        let mut recorder = Recorder::default();

        row.change_required(true, &mut recorder);

        let [Call::Update(_, field)] = recorder.calls.as_slice() else {
            panic!("expected one update");
        };
        assert!(field.required);
        assert!(!row.field().required);
    }

    #[test]
    fn test_delete_and_add_item() {
        let row = nested_row();
        let mut recorder = Recorder::default();

        row.delete(&mut recorder);
        assert!(row.add_item(&mut recorder));

        assert_eq!(
            recorder.calls,
            vec![
                Call::Delete(FieldPath::from(vec![2])),
                Call::AddChild(FieldPath::from(vec![2])),
            ]
        );
    }

    #[test]
    fn test_add_item_on_leaf_does_nothing() {
        let row = FieldRow::new(Arc::new(Field::new()), FieldPath::from(vec![0]), 1);
        let mut recorder = Recorder::default();

        assert!(!row.add_item(&mut recorder));
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_children_rows_extend_path() {
        let row = nested_row();
        let children: Vec<_> = row.children().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].path(), &FieldPath::from(vec![2, 1]));
        assert_eq!(children[1].nesting_level(), 2);
        assert_eq!(children[1].field().name, "zip");
    }
}
