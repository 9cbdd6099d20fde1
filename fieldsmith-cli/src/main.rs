//! Fieldsmith CLI - interactive terminal editor for nested schema field trees.
//!
//! Session commands:
//! - `show`: Print the schema tree
//! - `add <path>`: Append a field to the nested field at path
//! - `name <path> <text...>`: Rename a field
//! - `type <path> <type>`: Change a field's type
//! - `required <path> <bool>`: Mark a field required or optional
//! - `delete <path>`: Delete a field and its children
//! - `check`: Verify the tree's shape
//! - `quit` / `exit`: End the session
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fieldsmith::{Cli, Outcome, Session};
use fieldsmith_config::ConfigProvider;
use fieldsmith_fields::Pretty;

const PROMPT: &str = "fieldsmith> ";

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("fieldsmith=debug,fieldsmith_fields=debug,fieldsmith_view=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut provider = ConfigProvider::new();
    if let Some(path) = &cli.config {
        provider = provider.with_file(path);
    }
    let config = provider.load().context("loading configuration")?;
    debug!("starting session with config:{}", Pretty(&config));

    let mut session = Session::new(&config);
    let interactive = std::io::stdin().is_terminal();
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "{}", session.render())?;
    if interactive {
        writeln!(stdout, "Type `help` for commands.")?;
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        match session.handle_line(&line.context("reading input")?) {
            Outcome::Continue(text) if text.is_empty() => {}
            Outcome::Continue(text) => writeln!(stdout, "{text}")?,
            Outcome::Quit => break,
        }
    }
    Ok(())
}
