//! Terminal table rendering of a field tree.
//!
//! Uses comfy-table, sized to the terminal, with one line per render node.
//! Nesting shows as indentation of the name column.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::render::{FieldRowView, RenderNode};

/// Placeholder shown for a field whose name is still empty.
pub const NAME_PLACEHOLDER: &str = "Field name";

/// Label of the add-item button.
pub const ADD_ITEM_LABEL: &str = "+ Add Item";

/// Layout options for [`render_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Spaces of indentation per nesting level.
    pub indent_width: usize,
    /// Add a column with each field's id.
    pub show_ids: bool,
    /// Fixed table width; `None` follows the terminal.
    pub width: Option<u16>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_ids: false,
            width: None,
        }
    }
}

/// Create a table pre-configured for terminal-width-aware output.
///
/// Uses crossterm to detect the actual terminal width, falling back to
/// 120 columns when not connected to a TTY.
pub fn new_table(width: Option<u16>) -> Table {
    let width = width.unwrap_or_else(|| crossterm::terminal::size().map(|(w, _)| w).unwrap_or(120));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(width);
    table
}

/// Indent `label` for a node at `nesting_level`.
pub fn indent_label(label: &str, nesting_level: usize, indent_width: usize) -> String {
    format!("{}{}", " ".repeat(nesting_level * indent_width), label)
}

/// Build a table with columns `Path | Name | Type | Required` (plus `Id`
/// when requested) from rendered nodes.
pub fn render_table(nodes: &[RenderNode], style: &TableStyle) -> Table {
    let mut table = new_table(style.width);

    let mut header = vec!["Path", "Name", "Type", "Required"];
    if style.show_ids {
        header.push("Id");
    }
    table.set_header(header);

    for node in nodes {
        match node {
            RenderNode::Field(view) => table.add_row(field_cells(view, style)),
            RenderNode::AddItem { nesting_level, .. } => table.add_row(vec![
                Cell::new(""),
                Cell::new(indent_label(ADD_ITEM_LABEL, *nesting_level, style.indent_width))
                    .fg(Color::Blue),
            ]),
        };
    }
    table
}

fn field_cells(view: &FieldRowView, style: &TableStyle) -> Vec<Cell> {
    let name_cell = if view.name.is_empty() {
        Cell::new(indent_label(NAME_PLACEHOLDER, view.nesting_level, style.indent_width))
            .fg(Color::DarkGrey)
    } else {
        Cell::new(indent_label(&view.name, view.nesting_level, style.indent_width))
    };

    let mut cells = vec![
        Cell::new(view.path.to_string()),
        name_cell,
        Cell::new(view.field_type.label()),
        Cell::new(if view.required { "yes" } else { "no" }),
    ];
    if style.show_ids {
        cells.push(Cell::new(view.id.to_string()));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use fieldsmith_fields::{Field, FieldType};
    use std::sync::Arc;

    fn fixed_style() -> TableStyle {
        TableStyle {
            width: Some(100),
            ..TableStyle::default()
        }
    }

    #[test]
    fn test_indent_label() {
        assert_eq!(indent_label("age", 0, 2), "age");
        assert_eq!(indent_label("age", 2, 3), "      age");
    }

    #[test]
    fn test_render_table_rows() {
        let root = Arc::new(
            Field::container()
                .with_name("person")
                .with_child(
                    Field::new()
                        .with_name("age")
                        .with_type(FieldType::Number)
                        .with_required(true),
                )
                .with_child(Field::new()),
        );

        let output = render_table(&render(&root), &fixed_style()).to_string();

        assert!(output.contains("Path"));
        assert!(output.contains("person"));
        assert!(output.contains("age"));
        assert!(output.contains("number"));
        assert!(output.contains("yes"));
        assert!(output.contains(NAME_PLACEHOLDER));
        assert!(output.contains(ADD_ITEM_LABEL));
        assert!(!output.contains("Id"));
    }

    #[test]
    fn test_render_table_with_ids() {
        let field = Field::new().with_name("solo");
        let id = field.id.to_string();
        let root = Arc::new(field);
        let style = TableStyle {
            show_ids: true,
            width: Some(200),
            ..TableStyle::default()
        };

        let output = render_table(&render(&root), &style).to_string();

        assert!(output.contains("Id"));
        assert!(output.contains(&id));
    }
}
