//! Path-addressed operations over a field tree.
//!
//! Every operation takes the current root and returns a new root; the input
//! tree is never modified. Only the fields on the path from the root to the
//! edit point are rebuilt, one new node per level. Every other subtree is
//! shared with the input tree through its `Arc`.
//!
//! Descent and rebuild use an explicit ancestor list rather than recursion,
//! so nesting depth is bounded by memory, not by the call stack.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{FieldTreeError, Result};
use crate::path::FieldPath;
use crate::types::Field;

/// Return the field at `path`. The empty path returns `root` itself.
pub fn get(root: &Arc<Field>, path: &FieldPath) -> Result<Arc<Field>> {
    let mut current = root;
    for &index in path.indices() {
        current = child_at(current, index).ok_or_else(|| not_found(path))?;
    }
    Ok(Arc::clone(current))
}

/// Replace the field at `path` with `field`, exactly as given.
///
/// No coercion is applied: a caller changing the type is responsible for
/// supplying a matching children list (see [`Field::with_type`]).
pub fn update(root: &Arc<Field>, path: &FieldPath, field: Field) -> Result<Arc<Field>> {
    let chain = resolve_chain(root, path)?;
    trace!(
        %path,
        id = %field.id,
        name = %field.name,
        field_type = %field.field_type,
        children = field.children().len(),
        "replacing field"
    );
    let ancestors = &chain[..path.depth()];
    let new_root = rebuild(ancestors, path, Arc::new(field));
    debug!(%path, "updated field");
    Ok(new_root)
}

/// Remove the field at `path` from its parent, shifting later siblings down
/// by one index. The root cannot be deleted.
pub fn delete(root: &Arc<Field>, path: &FieldPath) -> Result<Arc<Field>> {
    let Some((parent_path, index)) = path.split_last() else {
        return Err(FieldTreeError::invalid_path(
            path.clone(),
            "the root field cannot be deleted",
        ));
    };
    let chain = resolve_chain(root, path)?;
    let Some((parent, ancestors)) = chain[..path.depth()].split_last() else {
        return Err(not_found(path));
    };

    let mut new_parent = Field::clone(parent);
    if let Some(children) = new_parent.children.as_mut() {
        children.remove(index);
    }
    let new_root = rebuild(ancestors, &parent_path, Arc::new(new_parent));
    debug!(%path, "deleted field");
    Ok(new_root)
}

/// Append a fresh default field to the children of the container at `path`.
pub fn add_child(root: &Arc<Field>, path: &FieldPath) -> Result<Arc<Field>> {
    let chain = resolve_chain(root, path)?;
    let Some((target, ancestors)) = chain.split_last() else {
        return Err(not_found(path));
    };
    if !target.is_container() {
        return Err(FieldTreeError::NotAContainer { path: path.clone() });
    }

    let child = Field::new();
    let child_id = child.id;
    let mut new_target = Field::clone(target);
    let children = new_target.children.get_or_insert_with(Vec::new);
    children.push(Arc::new(child));
    let index = children.len() - 1;

    let new_root = rebuild(ancestors, path, Arc::new(new_target));
    debug!(%path, index, id = %child_id, "added child field");
    Ok(new_root)
}

/// Check that every field in the tree pairs its type with its children list:
/// containers have one (possibly empty), leaves have none.
///
/// Fails on the first offending field in pre-order.
pub fn check_shape(root: &Arc<Field>) -> Result<()> {
    let mut pending = vec![(FieldPath::root(), root)];
    while let Some((path, field)) = pending.pop() {
        if !field.has_valid_shape() {
            return Err(FieldTreeError::ShapeViolation {
                path,
                field_type: field.field_type,
            });
        }
        // Reverse push keeps the walk in sibling order.
        for (index, child) in field.children().iter().enumerate().rev() {
            pending.push((path.child(index), child));
        }
    }
    Ok(())
}

fn child_at(field: &Arc<Field>, index: usize) -> Option<&Arc<Field>> {
    field.children.as_ref().and_then(|children| children.get(index))
}

fn not_found(path: &FieldPath) -> FieldTreeError {
    FieldTreeError::PathNotFound { path: path.clone() }
}

/// Every field visited while following `path`: the root first, the addressed
/// field last. The result always holds `path.depth() + 1` entries.
fn resolve_chain<'a>(root: &'a Arc<Field>, path: &FieldPath) -> Result<Vec<&'a Arc<Field>>> {
    let mut chain = Vec::with_capacity(path.depth() + 1);
    let mut current = root;
    chain.push(current);
    for &index in path.indices() {
        current = child_at(current, index).ok_or_else(|| not_found(path))?;
        chain.push(current);
    }
    Ok(chain)
}

/// Splice `replacement` in at `path`, copying each ancestor bottom-up.
///
/// `ancestors[k]` must be the field reached by the first `k` indices of
/// `path`, so the two line up one to one.
fn rebuild(ancestors: &[&Arc<Field>], path: &FieldPath, replacement: Arc<Field>) -> Arc<Field> {
    let mut node = replacement;
    for (ancestor, &index) in ancestors.iter().zip(path.indices()).rev() {
        let mut parent = Field::clone(ancestor);
        if let Some(slot) = parent
            .children
            .as_mut()
            .and_then(|children| children.get_mut(index))
        {
            *slot = node;
        }
        node = Arc::new(parent);
    }
    node
}
