//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use msgpage_core::Chunk;
use std::io::Write;

/// Markdown formatter - outputs chunks as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
    oversized: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
            oversized: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        self.chunk_count += 1;
        let note = if chunk.oversized {
            self.oversized += 1;
            ", oversized"
        } else {
            ""
        };
        writeln!(
            self.writer,
            "{}. {} _({} bytes{})_",
            chunk.part, chunk.text, chunk.byte_len, note
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total parts: {}*", self.chunk_count)?;
        if self.oversized > 0 {
            writeln!(self.writer, "*Oversized parts: {}*", self.oversized)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
