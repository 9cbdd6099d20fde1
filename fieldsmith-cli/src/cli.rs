//! CLI definitions: process arguments and the per-line session commands.
//!
//! This module only depends on `clap` and the field types it parses.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use fieldsmith_fields::{FieldPath, FieldType};

/// Fieldsmith - interactive editor for nested schema field trees.
///
/// Starts a session over an empty nested root field. Type `help` at the
/// prompt for the editing commands.
#[derive(Parser, Debug)]
#[command(name = "fieldsmith")]
#[command(version)]
#[command(about = "Interactive editor for nested schema field trees")]
#[command(
    long_about = "Fieldsmith builds a schema as a tree of named, typed fields. Fields of \
    type `nested` hold child fields to any depth.\n\n\
    Fields are addressed by path: child indices joined with dots (`0.2.1`), `.` for the root.\n\n\
    Environment variables:\n  \
    FIELDSMITH_INDENT_WIDTH  Spaces per nesting level in the tree table\n  \
    FIELDSMITH_ROOT_NAME     Name of the root field\n  \
    FIELDSMITH_SHOW_IDS      Show field ids in the tree table"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Read settings from this file instead of ./.fieldsmith.{toml,yaml,yml,json}
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// One line typed at the session prompt.
#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    /// Print the schema tree
    Show,

    /// Append a new field to the nested field at PATH
    Add {
        /// Path of a nested field (`.` for the root)
        path: FieldPath,
    },

    /// Rename the field at PATH
    Name {
        path: FieldPath,
        /// New name; words are joined with single spaces
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Change the type of the field at PATH
    Type {
        path: FieldPath,
        /// nested, string, number, objectId, float or boolean
        field_type: FieldType,
    },

    /// Mark the field at PATH as required or optional
    Required {
        path: FieldPath,
        /// true/false, yes/no, on/off
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        required: bool,
    },

    /// Delete the field at PATH and everything under it
    Delete { path: FieldPath },

    /// Verify that every nested field has a children list and no other field does
    Check,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
