//! The three edit callbacks a host hands to the presenter.

use fieldsmith_fields::{Field, FieldPath};

/// Receiver for user intents raised by field rows.
///
/// Each method corresponds to one model operation. A host implements it by
/// applying that operation to its current root and storing the result before
/// the next intent is handled; [`crate::SchemaEditor`] is the stock
/// implementation.
pub trait FieldCallbacks {
    /// Replace the field at `path` with `field`.
    fn on_update(&mut self, path: FieldPath, field: Field);

    /// Remove the field at `path`.
    fn on_delete(&mut self, path: FieldPath);

    /// Append a default child to the container at `path`.
    fn on_add_child(&mut self, path: FieldPath);
}
