//! Field row presenter for fieldsmith schema trees
//!
//! The presenter is stateless. [`render`] walks the current tree and yields
//! one [`RenderNode`] per visible row; [`FieldRow`] turns a user intent on a
//! row (rename, retype, toggle required, delete, add item) into a single call
//! on the host's [`FieldCallbacks`]. It never changes a field in place.
//!
//! The type-change policy lives here: retyping away from `nested` drops the
//! children list, retyping into it starts an empty one.
//!
//! [`SchemaEditor`] is a ready-made host that applies each callback to a
//! `SchemaDocument`, and [`render_table`] draws rendered rows for a terminal.

pub mod callbacks;
pub mod editor;
pub mod render;
pub mod row;
pub mod table;

pub use callbacks::FieldCallbacks;
pub use editor::SchemaEditor;
pub use render::{render, row_at, FieldRowView, RenderNode};
pub use row::FieldRow;
pub use table::{render_table, TableStyle};
