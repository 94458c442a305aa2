//! Join command implementation

use super::open_output;
use crate::error::CliError;
use crate::input::InputSource;
use anyhow::{Context, Result};
use clap::Args;
use msgpage_core::Reassembler;
use serde::Deserialize;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the join command
#[derive(Debug, Args)]
pub struct JoinArgs {
    /// File holding the received parts (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// How the parts are laid out in the input
    #[arg(short, long, value_enum, default_value = "lines")]
    pub format: JoinFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Layouts accepted by the join command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum JoinFormat {
    /// One part per line; blank lines are skipped
    Lines,
    /// JSON array of strings or of chunk objects from `split -f json`
    Json,
}

/// A JSON entry: a bare string or an object with a `text` field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChunkEntry {
    Text(String),
    Chunk { text: String },
}

impl ChunkEntry {
    fn into_text(self) -> String {
        match self {
            ChunkEntry::Text(text) | ChunkEntry::Chunk { text } => text,
        }
    }
}

impl JoinArgs {
    /// Execute the join command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let source = InputSource::from_args(None, self.input.as_ref());
        let content = source.read()?;
        let parts = parse_parts(&content, self.format)?;
        log::info!("Reassembling {} parts from {}", parts.len(), source.display_name());

        let mut reassembler = Reassembler::new();
        for part in &parts {
            reassembler.add(part).map_err(CliError::from)?;
        }

        let missing = reassembler.missing();
        if !missing.is_empty() {
            log::warn!("Still waiting for parts {:?}", missing);
        }
        let message = reassembler.finish().map_err(CliError::from)?;

        let mut writer = open_output(self.output.as_deref())?;
        writeln!(writer, "{message}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Split the raw input into individual part texts
pub fn parse_parts(content: &str, format: JoinFormat) -> Result<Vec<String>> {
    match format {
        JoinFormat::Lines => Ok(content
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()),
        JoinFormat::Json => {
            let entries: Vec<ChunkEntry> =
                serde_json::from_str(content).context("Failed to parse parts as JSON")?;
            Ok(entries.into_iter().map(ChunkEntry::into_text).collect())
        }
    }
}
