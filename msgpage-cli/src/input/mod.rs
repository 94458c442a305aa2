//! Input handling module

pub mod file_reader;

pub use file_reader::FileReader;

use anyhow::Result;
use std::path::PathBuf;

/// Where the message text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Inline(String),
    /// A UTF-8 text file
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Pick the source from the optional `--text` and `--input` arguments
    pub fn from_args(text: Option<&str>, input: Option<&PathBuf>) -> Self {
        match (text, input) {
            (Some(text), _) => InputSource::Inline(text.to_string()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Stdin,
        }
    }

    /// Read the full text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Stdin => FileReader::read_stdin(),
        }
    }

    /// Get the display name for the source
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Inline(_) => "command line".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }
}
