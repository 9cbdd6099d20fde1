//! Path-addressed field tree for interactive schema editing
//!
//! `fieldsmith-fields` models a schema as a tree of named, typed fields. Any
//! field of the container type (`nested`) owns an ordered list of child
//! fields, to any depth.
//!
//! # Architecture
//!
//! - **Addressed by path**: fields are located by the child indices walked
//!   from the root, never by reference or id. There are no parent pointers.
//! - **Persistent**: `get`, `update`, `delete` and `add_child` take the
//!   current root and return a new one. Untouched subtrees are shared.
//! - **Explicit failures**: stale or malformed paths come back as
//!   [`FieldTreeError`] values instead of panics or silent no-ops.
//! - **Host state**: [`SchemaDocument`] holds the current root and swaps in
//!   each successful edit before the next one is accepted.

pub mod document;
pub mod error;
pub mod logging;
pub mod path;
pub mod tree;
pub mod types;

pub use document::{FieldEdit, SchemaDocument};
pub use error::{FieldTreeError, Result};
pub use logging::Pretty;
pub use path::FieldPath;
pub use tree::{add_child, check_shape, delete, get, update};
pub use types::{Field, FieldId, FieldType};
