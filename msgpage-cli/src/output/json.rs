//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use msgpage_core::Chunk;
use std::io::Write;

/// JSON formatter - outputs chunks as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    chunks: Vec<Chunk>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            chunks: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        self.chunks.push(chunk.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_chunk(&Chunk::new(1, 1, "hi there".to_string(), 160))
            .unwrap();
        formatter.finish().unwrap();

        let written = String::from_utf8(formatter.writer).unwrap();
        let parsed: Vec<Chunk> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, "hi there");
        assert_eq!(parsed[0].byte_len, 8);
        assert!(!parsed[0].oversized);
    }

    #[test]
    fn test_empty_message_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();

        let written = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(written.trim(), "[]");
    }
}
