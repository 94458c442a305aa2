//! Data Transfer Objects for detailed pagination output

use crate::config::{Numbering, OversizePolicy};

/// A finalized chunk with its position and size
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// One-based position of the chunk
    pub part: usize,
    /// Number of chunks in the message
    pub total: usize,
    /// Exact text to transmit, marker included
    pub text: String,
    /// Byte length of `text` in UTF-8
    pub byte_len: usize,
    /// Whether `byte_len` exceeds the capacity
    pub oversized: bool,
}

impl Chunk {
    /// Create a chunk, deriving its size fields from `text`
    pub fn new(part: usize, total: usize, text: String, max_length: usize) -> Self {
        let byte_len = text.len();
        Self {
            part,
            total,
            text,
            byte_len,
            oversized: byte_len > max_length,
        }
    }
}

/// Statistics about one pagination run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Byte length of the raw input
    pub input_bytes: usize,
    /// Character count of the raw input
    pub input_chars: usize,
    /// Number of words after splitting
    pub word_count: usize,
    /// Number of chunks produced
    pub chunk_count: usize,
    /// Capacity the chunks were packed against
    pub max_length: usize,
    /// Marker accounting used
    pub numbering: Numbering,
    /// Oversize-word policy used
    pub oversize: OversizePolicy,
}

/// Complete output with chunks and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Chunks in transmission order
    pub chunks: Vec<Chunk>,
    /// Run statistics
    pub metadata: Metadata,
}

impl Output {
    /// Consume the output, keeping only the chunk texts
    pub fn into_texts(self) -> Vec<String> {
        self.chunks.into_iter().map(|c| c.text).collect()
    }

    /// Number of chunks over capacity
    pub fn oversized_count(&self) -> usize {
        self.chunks.iter().filter(|c| c.oversized).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> Output {
        let chunks = vec![
            Chunk::new(1, 2, "[1/2] see".to_string(), 10),
            Chunk::new(2, 2, "[2/2] you tomorrow".to_string(), 10),
        ];
        Output {
            metadata: Metadata {
                input_bytes: 16,
                input_chars: 16,
                word_count: 3,
                chunk_count: chunks.len(),
                max_length: 10,
                numbering: Numbering::Placeholder,
                oversize: OversizePolicy::Emit,
            },
            chunks,
        }
    }

    #[test]
    fn test_chunk_size_fields() {
        let chunk = Chunk::new(1, 1, "héllo".to_string(), 5);
        assert_eq!(chunk.byte_len, 6);
        assert!(chunk.oversized);
    }

    #[test]
    fn test_output_accessors() {
        let output = output();
        assert_eq!(output.oversized_count(), 1);
        assert_eq!(output.into_texts(), vec!["[1/2] see", "[2/2] you tomorrow"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(output()).unwrap();
        assert_eq!(value["chunks"][0]["text"], "[1/2] see");
        assert_eq!(value["chunks"][1]["byte_len"], 18);
        assert_eq!(value["chunks"][1]["oversized"], true);
        assert_eq!(value["metadata"]["numbering"], "placeholder");
        assert_eq!(value["metadata"]["oversize"], "emit");
    }
}
