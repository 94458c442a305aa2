//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub mod generate_config;
pub mod join;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a message into numbered parts
    Split(split::SplitArgs),

    /// Reassemble received parts into the original message
    Join(join::JoinArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Join(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List oversize-word policies and numbering strategies
    Policies,
}

impl ListCommands {
    /// Render the listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Formats => "\
Available output formats:
  text      One part per line (default)
  json      JSON array of parts with sizes
  markdown  Numbered list with byte counts
"
            .to_string(),
            ListCommands::Policies => "\
Oversize-word policies (--oversize):
  emit      Send the word alone in an oversized part (default)
  reject    Fail with an error
  split     Break the word across parts

Numbering strategies (--numbering):
  placeholder  Pack against [k/XX], then fill in the total (default)
  exact        Repack with real marker widths; parts never run over
"
            .to_string(),
        }
    }
}

/// Open the output file, or stdout when none is given
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
