//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use msgpage_core::Chunk;
use std::io::Write;

/// Plain text formatter - outputs one chunk per line, byte-for-byte
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        writeln!(self.writer, "{}", chunk.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
