//! End-to-end editing sessions driven through rendered rows.

use fieldsmith_fields::{check_shape, FieldPath, FieldTreeError, FieldType};
use fieldsmith_view::{FieldRow, RenderNode, SchemaEditor};

fn row(editor: &SchemaEditor, indices: &[usize]) -> FieldRow {
    editor
        .row(&FieldPath::from(indices))
        .unwrap_or_else(|| panic!("no row at {indices:?}"))
}

fn names(editor: &SchemaEditor) -> Vec<String> {
    editor
        .rows()
        .into_iter()
        .filter_map(|node| match node {
            RenderNode::Field(view) if !view.path.is_root() => Some(view.name),
            _ => None,
        })
        .collect()
}

/// Find the add-item node bound to `path` in the current render and press it.
fn press_add_item(editor: &mut SchemaEditor, path: &FieldPath) {
    let bound = editor.rows().into_iter().any(|node| {
        matches!(&node, RenderNode::AddItem { path: p, .. } if p == path)
    });
    assert!(bound, "no add-item button for {path}");
    let container = editor.row(path).expect("container row");
    container.add_item(editor);
}

#[test_log::test]
fn test_build_nested_schema() {
    let mut editor = SchemaEditor::default();

    press_add_item(&mut editor, &FieldPath::root());
    press_add_item(&mut editor, &FieldPath::root());
    row(&editor, &[0]).change_name("name", &mut editor);
    row(&editor, &[0]).change_required(true, &mut editor);
    row(&editor, &[1]).change_name("address", &mut editor);
    row(&editor, &[1]).change_type(FieldType::Nested, &mut editor);

    press_add_item(&mut editor, &FieldPath::from(vec![1]));
    press_add_item(&mut editor, &FieldPath::from(vec![1]));
    row(&editor, &[1, 0]).change_name("street", &mut editor);
    row(&editor, &[1, 1]).change_name("zip", &mut editor);
    row(&editor, &[1, 1]).change_type(FieldType::Number, &mut editor);

    assert!(editor.last_error().is_none());
    assert_eq!(names(&editor), vec!["name", "address", "street", "zip"]);
    assert!(check_shape(editor.root()).is_ok());
    assert!(row(&editor, &[0]).field().required);

    // retyping the container to a leaf discards its children
    row(&editor, &[1]).change_type(FieldType::String, &mut editor);
    assert_eq!(names(&editor), vec!["name", "address"]);
    assert!(editor.row(&FieldPath::from(vec![1, 0])).is_none());
    assert!(check_shape(editor.root()).is_ok());
}

#[test_log::test]
fn test_delete_shifts_rendered_paths() {
    let mut editor = SchemaEditor::default();
    for label in ["A", "B", "C"] {
        press_add_item(&mut editor, &FieldPath::root());
        let last = editor.root().children().len() - 1;
        row(&editor, &[last]).change_name(label, &mut editor);
    }

    let stale_c = row(&editor, &[2]);
    row(&editor, &[1]).delete(&mut editor);

    assert_eq!(names(&editor), vec!["A", "C"]);
    assert_eq!(row(&editor, &[1]).id(), stale_c.id());

    // an intent from a row rendered before the delete is refused
    stale_c.change_name("late", &mut editor);
    assert!(matches!(
        editor.last_error(),
        Some(FieldTreeError::PathNotFound { .. })
    ));
    assert_eq!(names(&editor), vec!["A", "C"]);
}

#[test_log::test]
fn test_snapshot_unchanged_by_later_edits() {
    let mut editor = SchemaEditor::default();
    press_add_item(&mut editor, &FieldPath::root());
    let snapshot = editor.root().clone();
    let before = format!("{snapshot:?}");

    row(&editor, &[0]).change_type(FieldType::Nested, &mut editor);
    press_add_item(&mut editor, &FieldPath::from(vec![0]));
    row(&editor, &[0, 0]).delete(&mut editor);

    assert_eq!(format!("{snapshot:?}"), before);
    assert_eq!(editor.document().revision(), 4);
}

#[test_log::test]
fn test_deleting_root_is_refused() {
    let mut editor = SchemaEditor::default();
    row(&editor, &[]).delete(&mut editor);
    assert!(matches!(
        editor.last_error(),
        Some(FieldTreeError::InvalidPath { .. })
    ));
}
