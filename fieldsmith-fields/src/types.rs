//! Core field types for the schema tree.
//!
//! A `Field` is one node of the tree. Container fields (`FieldType::Nested`)
//! own an ordered list of child fields; every other type is a leaf and has no
//! children list at all. Children sit behind `Arc` so edits can reuse
//! untouched subtrees between tree versions.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::FieldTreeError;

/// The type of a field. Exactly one variant, `Nested`, is a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// Holds child fields.
    Nested,
    #[default]
    String,
    Number,
    ObjectId,
    Float,
    Boolean,
}

impl FieldType {
    /// Every field type, in the order the type selector offers them.
    pub const ALL: [FieldType; 6] = [
        FieldType::Nested,
        FieldType::String,
        FieldType::Number,
        FieldType::ObjectId,
        FieldType::Float,
        FieldType::Boolean,
    ];

    pub fn is_container(self) -> bool {
        matches!(self, FieldType::Nested)
    }

    /// The selector label for this type.
    pub fn label(self) -> &'static str {
        match self {
            FieldType::Nested => "nested",
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::ObjectId => "objectId",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldType {
    type Err = FieldTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FieldTreeError::UnknownFieldType {
                name: s.to_string(),
            })
    }
}

/// Stable identifier assigned once when a field is created.
///
/// Only used as a rendering key; fields are addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Ulid);

impl FieldId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Ulid> for FieldId {
    fn from(id: Ulid) -> Self {
        Self(id)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// `Some` exactly when `field_type` is the container type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Arc<Field>>>,
}

impl Field {
    /// A fresh default field: empty name, string type, optional, no children.
    pub fn new() -> Self {
        Self {
            id: FieldId::new(),
            name: String::new(),
            field_type: FieldType::default(),
            required: false,
            children: None,
        }
    }

    /// A fresh empty container field.
    pub fn container() -> Self {
        let mut field = Self::new();
        field.field_type = FieldType::Nested;
        field.children = Some(Vec::new());
        field
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Append a child. Ignored on leaves, which have no children list.
    pub fn with_child(mut self, child: Field) -> Self {
        if let Some(children) = self.children.as_mut() {
            children.push(Arc::new(child));
        }
        self
    }

    /// A copy of this field retyped to `field_type`, keeping the children
    /// list consistent with the new type.
    ///
    /// Leaving the container type drops the children list. Entering it from a
    /// leaf starts an empty list. Staying a container keeps the existing
    /// children untouched.
    pub fn with_type(&self, field_type: FieldType) -> Field {
        let mut updated = self.clone();
        updated.field_type = field_type;
        if !field_type.is_container() {
            updated.children = None;
        } else if updated.children.is_none() {
            updated.children = Some(Vec::new());
        }
        updated
    }

    pub fn is_container(&self) -> bool {
        self.field_type.is_container()
    }

    /// The children list, empty for leaves.
    pub fn children(&self) -> &[Arc<Field>] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether this single node pairs its type and children list correctly.
    pub fn has_valid_shape(&self) -> bool {
        self.field_type.is_container() == self.children.is_some()
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Field {
    /// Tear down owned subtrees with an explicit stack so that dropping a
    /// very deep tree cannot overflow the call stack. Subtrees still shared
    /// with another tree version are left to their other owners.
    fn drop(&mut self) {
        let Some(mut pending) = self.children.take() else {
            return;
        };
        while let Some(child) = pending.pop() {
            if let Ok(mut field) = Arc::try_unwrap(child) {
                if let Some(grandchildren) = field.children.take() {
                    pending.extend(grandchildren);
                }
            }
        }
    }
}
