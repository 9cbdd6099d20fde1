//! Render walk: turns a field tree into the flat sequence of things a screen shows.

use std::sync::Arc;

use fieldsmith_fields::{get, Field, FieldId, FieldPath, FieldType};
use tracing::trace;

use crate::row::FieldRow;

/// What one rendered field row displays.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRowView {
    pub id: FieldId,
    pub path: FieldPath,
    pub nesting_level: usize,
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
}

impl From<&FieldRow> for FieldRowView {
    fn from(row: &FieldRow) -> Self {
        let field = row.field();
        Self {
            id: field.id,
            path: row.path().clone(),
            nesting_level: row.nesting_level(),
            name: field.name.clone(),
            field_type: field.field_type,
            required: field.required,
        }
    }
}

/// One element of a rendered tree, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Field(FieldRowView),
    /// The "add item" button closing a container's children, bound to the
    /// container's own path.
    AddItem {
        path: FieldPath,
        nesting_level: usize,
    },
}

impl RenderNode {
    pub fn nesting_level(&self) -> usize {
        match self {
            RenderNode::Field(view) => view.nesting_level,
            RenderNode::AddItem { nesting_level, .. } => *nesting_level,
        }
    }
}

enum Visit {
    Field(FieldRow),
    AddItem(FieldPath, usize),
}

/// Render the whole tree, pre-order, starting with the root at level 0.
///
/// A container is followed by its children at `path + [index]`, one level
/// deeper, and then by its add-item button at that same deeper level.
/// Leaves render no children and no button.
pub fn render(root: &Arc<Field>) -> Vec<RenderNode> {
    let mut nodes = Vec::new();
    let mut pending = vec![Visit::Field(FieldRow::root(root))];

    while let Some(visit) = pending.pop() {
        match visit {
            Visit::Field(row) => {
                nodes.push(RenderNode::Field(FieldRowView::from(&row)));
                if row.is_container() {
                    pending.push(Visit::AddItem(
                        row.path().clone(),
                        row.nesting_level() + 1,
                    ));
                    pending.extend(row.children().rev().map(Visit::Field));
                }
            }
            Visit::AddItem(path, nesting_level) => {
                nodes.push(RenderNode::AddItem {
                    path,
                    nesting_level,
                });
            }
        }
    }

    trace!(nodes = nodes.len(), "rendered field tree");
    nodes
}

/// The row rendered at `path`, if that path exists in the current tree.
pub fn row_at(root: &Arc<Field>, path: &FieldPath) -> Option<FieldRow> {
    let field = get(root, path).ok()?;
    Some(FieldRow::new(field, path.clone(), path.depth()))
}
