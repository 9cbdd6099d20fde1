//! Interactive editing session.
//!
//! Each command line names a path in the tree as currently rendered. The
//! session looks up the row at that path and raises the matching intent on
//! it, so every edit goes through the row presenter and the editor's
//! callbacks exactly as a graphical host would route a click or keystroke.

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use fieldsmith_config::EditorConfig;
use fieldsmith_fields::{check_shape, Field, FieldPath};
use fieldsmith_view::{render_table, FieldRow, SchemaEditor, TableStyle};
use tracing::debug;

use crate::cli::{SessionCommand, SessionLine};

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and read the next line.
    Continue(String),
    Quit,
}

pub struct Session {
    editor: SchemaEditor,
    style: TableStyle,
}

impl Session {
    /// Start a session over an empty nested root named by the configuration.
    pub fn new(config: &EditorConfig) -> Self {
        let root = Field::container().with_name(config.root_name.clone());
        Self {
            editor: SchemaEditor::new(root),
            style: TableStyle {
                indent_width: config.indent_width,
                show_ids: config.show_ids,
                width: None,
            },
        }
    }

    /// Use a fixed table width instead of following the terminal.
    pub fn with_table_width(mut self, width: u16) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn editor(&self) -> &SchemaEditor {
        &self.editor
    }

    /// The current tree as a table.
    pub fn render(&self) -> String {
        render_table(&self.editor.rows(), &self.style).to_string()
    }

    /// Parse and run one input line. Errors are reported in the output text
    /// and never end the session.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Outcome::Continue(String::new());
        }
        match SessionLine::try_parse_from(words) {
            Ok(parsed) => match self.execute(parsed.command) {
                Ok(outcome) => outcome,
                Err(e) => Outcome::Continue(format!("Error: {e}")),
            },
            Err(e) => Outcome::Continue(e.render().to_string()),
        }
    }

    pub fn execute(&mut self, command: SessionCommand) -> Result<Outcome> {
        debug!(?command, "session command");
        match command {
            SessionCommand::Show => Ok(Outcome::Continue(self.render())),
            SessionCommand::Add { path } => {
                let row = self.row(&path)?;
                if !row.add_item(&mut self.editor) {
                    bail!(
                        "field at path {path} is of type {}; only nested fields take children",
                        row.field().field_type
                    );
                }
                self.finish_edit()
            }
            SessionCommand::Name { path, name } => {
                let row = self.row(&path)?;
                row.change_name(name.join(" "), &mut self.editor);
                self.finish_edit()
            }
            SessionCommand::Type { path, field_type } => {
                let row = self.row(&path)?;
                row.change_type(field_type, &mut self.editor);
                self.finish_edit()
            }
            SessionCommand::Required { path, required } => {
                let row = self.row(&path)?;
                row.change_required(required, &mut self.editor);
                self.finish_edit()
            }
            SessionCommand::Delete { path } => {
                let row = self.row(&path)?;
                row.delete(&mut self.editor);
                self.finish_edit()
            }
            SessionCommand::Check => {
                check_shape(self.editor.root())?;
                Ok(Outcome::Continue("Schema shape is valid".to_string()))
            }
            SessionCommand::Quit => Ok(Outcome::Quit),
        }
    }

    fn row(&self, path: &FieldPath) -> Result<FieldRow> {
        self.editor
            .row(path)
            .ok_or_else(|| anyhow!("no field at path {path}"))
    }

    /// Surface a refused edit, or reprint the tree after a successful one.
    fn finish_edit(&mut self) -> Result<Outcome> {
        if let Some(e) = self.editor.take_error() {
            return Err(e.into());
        }
        Ok(Outcome::Continue(self.render()))
    }
}
