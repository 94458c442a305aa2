//! Message paginator
//!
//! Splits a message into chunks no longer than a byte capacity without
//! breaking words. A message that fits is returned as one unmarked chunk;
//! otherwise every chunk is prefixed with a `[k/N]` marker.

use crate::{
    config::{Numbering, OversizePolicy, PaginatorConfig, DEFAULT_MAX_LENGTH},
    dto::{Chunk, Metadata, Output},
    error::Result,
    marker::{digit_count, placeholder, resolve_placeholder, Marker},
    packer::{initial_exact_width, width_settles, MarkerWidth, PackedChunk, Packer},
    words::{joined_len, split_words},
};

/// Split `message` into chunks of at most `max_length` bytes
///
/// Whitespace between words is collapsed to single spaces. A word too long
/// for any chunk is emitted alone in an oversized chunk. A capacity smaller
/// than a marker places every word in its own oversized chunk.
///
/// ```
/// use msgpage_core::paginate;
///
/// assert_eq!(paginate("hello   world", 160), vec!["hello world"]);
/// assert_eq!(
///     paginate("one two three four five", 16),
///     vec!["[1/3] one two", "[2/3] three", "[3/3] four five"]
/// );
/// assert!(paginate("", 160).is_empty());
/// ```
pub fn paginate(message: &str, max_length: usize) -> Vec<String> {
    Paginator::new(PaginatorConfig::new(max_length))
        .paginate(message)
        .expect("emit policy never rejects a word")
}

/// Split `message` into chunks sized for one SMS segment (160 bytes)
pub fn paginate_sms(message: &str) -> Vec<String> {
    paginate(message, DEFAULT_MAX_LENGTH)
}

/// Configurable paginator
///
/// Holds no state besides its configuration and may be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginatorConfig,
}

impl Paginator {
    /// Create a paginator with the given configuration
    pub fn new(config: PaginatorConfig) -> Self {
        Self { config }
    }

    /// Create a paginator for single SMS segments
    pub fn sms() -> Self {
        Self::new(PaginatorConfig::sms())
    }

    /// Get the current configuration
    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Split a message and return the chunk texts
    pub fn paginate(&self, message: &str) -> Result<Vec<String>> {
        Ok(self.paginate_detailed(message)?.into_texts())
    }

    /// Split a message and return chunks with metadata
    pub fn paginate_detailed(&self, message: &str) -> Result<Output> {
        let max = self.config.max_length;
        let words = split_words(message);

        let chunks = if words.is_empty() {
            Vec::new()
        } else if joined_len(&words) <= max {
            vec![Chunk::new(1, 1, words.join(" "), max)]
        } else {
            match self.config.numbering {
                Numbering::Placeholder => self.pack_placeholder(&words)?,
                Numbering::Exact => self.pack_exact(&words)?,
            }
        };

        log::debug!(
            "paginated {} bytes ({} words) into {} chunks of at most {} bytes",
            message.len(),
            words.len(),
            chunks.len(),
            max
        );

        let metadata = Metadata {
            input_bytes: message.len(),
            input_chars: message.chars().count(),
            word_count: words.len(),
            chunk_count: chunks.len(),
            max_length: max,
            numbering: self.config.numbering,
            oversize: self.config.oversize,
        };

        Ok(Output { chunks, metadata })
    }

    fn packer(&self) -> Packer {
        Packer::new(self.config.max_length, self.config.oversize)
    }

    /// Pack against `[k/XX]`, then substitute the real total
    fn pack_placeholder(&self, words: &[&str]) -> Result<Vec<Chunk>> {
        let packed = self.packer().pack(words, MarkerWidth::Placeholder)?;
        let staged: Vec<String> = packed
            .iter()
            .enumerate()
            .map(|(i, chunk)| format!("{} {}", placeholder(i + 1), chunk.body))
            .collect();

        let total = staged.len();
        Ok(staged
            .iter()
            .enumerate()
            .map(|(i, text)| {
                Chunk::new(
                    i + 1,
                    total,
                    resolve_placeholder(text, total),
                    self.config.max_length,
                )
            })
            .collect())
    }

    /// Repack with real marker widths until the total's digit count settles
    fn pack_exact(&self, words: &[&str]) -> Result<Vec<Chunk>> {
        let packer = self.packer();
        let mut width = initial_exact_width();

        let packed = loop {
            let packed = packer.pack(words, width)?;
            if width_settles(width, packed.len()) {
                break packed;
            }

            log::debug!(
                "{} chunks need wider markers than assumed ({:?}), repacking",
                packed.len(),
                width
            );
            width = MarkerWidth::TotalDigits(digit_count(packed.len()));
        };

        Ok(self.finalize(packed))
    }

    fn finalize(&self, packed: Vec<PackedChunk>) -> Vec<Chunk> {
        let total = packed.len();
        packed
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| {
                let text = format!("{} {}", Marker::new(i + 1, total), chunk.body);
                Chunk::new(i + 1, total, text, self.config.max_length)
            })
            .collect()
    }
}

impl From<PaginatorConfig> for Paginator {
    fn from(config: PaginatorConfig) -> Self {
        Self::new(config)
    }
}

/// Convenience: paginate with an explicit oversize policy
pub fn paginate_with_policy(
    message: &str,
    max_length: usize,
    oversize: OversizePolicy,
) -> Result<Vec<String>> {
    let config = PaginatorConfig {
        oversize,
        ..PaginatorConfig::new(max_length)
    };
    Paginator::new(config).paginate(message)
}
