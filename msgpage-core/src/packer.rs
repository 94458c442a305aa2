//! Greedy chunk packing
//!
//! Words are appended to the current chunk while the chunk, its marker and
//! the separating space fit in the capacity. A word that does not fit seals
//! the current chunk and opens the next one. There is no look-ahead.

use crate::{
    config::OversizePolicy,
    error::{PaginateError, Result},
    marker::{digit_count, marker_len, PLACEHOLDER_TOTAL},
};

/// How wide the marker of each chunk is assumed to be while packing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MarkerWidth {
    /// `[k/XX]`
    Placeholder,
    /// `[k/N]` where `N` has the given number of digits
    TotalDigits(usize),
}

impl MarkerWidth {
    fn for_index(self, index: usize) -> usize {
        match self {
            MarkerWidth::Placeholder => marker_len(index, PLACEHOLDER_TOTAL.len()),
            MarkerWidth::TotalDigits(digits) => marker_len(index, digits),
        }
    }
}

/// A sealed chunk without its marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PackedChunk {
    /// Words joined by single spaces
    pub body: String,
    /// Charged length, marker included, exceeds the capacity
    pub oversized: bool,
}

/// Chunk under construction
#[derive(Debug)]
struct OpenChunk {
    body: String,
    /// Charged byte length: marker plus `" " + word` for every word
    len: usize,
    oversized: bool,
}

impl OpenChunk {
    fn new(marker_width: usize) -> Self {
        Self {
            body: String::new(),
            len: marker_width,
            oversized: false,
        }
    }

    fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    fn fits(&self, piece: &str, max_length: usize) -> bool {
        self.len + 1 + piece.len() <= max_length
    }

    /// Bytes still available for a piece after its separating space
    fn room(&self, max_length: usize) -> usize {
        max_length.saturating_sub(self.len + 1)
    }

    fn push(&mut self, piece: &str, max_length: usize) {
        if !self.body.is_empty() {
            self.body.push(' ');
        }
        self.body.push_str(piece);
        self.len += 1 + piece.len();
        if self.len > max_length {
            self.oversized = true;
        }
    }

    fn seal(self) -> PackedChunk {
        PackedChunk {
            body: self.body,
            oversized: self.oversized,
        }
    }
}

/// Greedy packer over a word sequence
#[derive(Debug, Clone, Copy)]
pub(crate) struct Packer {
    max_length: usize,
    oversize: OversizePolicy,
}

impl Packer {
    pub(crate) fn new(max_length: usize, oversize: OversizePolicy) -> Self {
        Self {
            max_length,
            oversize,
        }
    }

    /// Pack `words` into chunks, charging `width` for each marker
    pub(crate) fn pack(&self, words: &[&str], width: MarkerWidth) -> Result<Vec<PackedChunk>> {
        let max = self.max_length;
        let mut chunks = Vec::new();
        let mut current = OpenChunk::new(width.for_index(1));

        for (index, &word) in words.iter().enumerate() {
            if current.fits(word, max) {
                current.push(word, max);
                continue;
            }

            // A chunk holding only its marker is never sealed
            if !current.is_empty() {
                chunks.push(current.seal());
                current = OpenChunk::new(width.for_index(chunks.len() + 1));
            }

            if current.fits(word, max) {
                current.push(word, max);
                continue;
            }

            match self.oversize {
                OversizePolicy::Emit => {
                    log::debug!(
                        "word {} ({} bytes) exceeds chunk capacity {}, emitting oversized chunk",
                        index,
                        word.len(),
                        max
                    );
                    current.push(word, max);
                }
                OversizePolicy::Reject => {
                    return Err(PaginateError::WordTooLong {
                        index,
                        byte_len: word.len(),
                        capacity: current.room(max),
                    });
                }
                OversizePolicy::Split => {
                    current = self.split_word(word, current, &mut chunks, width);
                }
            }
        }

        if !current.is_empty() {
            chunks.push(current.seal());
        }

        Ok(chunks)
    }

    /// Spread an oversized word over as many fresh chunks as needed
    ///
    /// Returns the chunk holding the final piece, still open so that
    /// following words may join it.
    fn split_word(
        &self,
        word: &str,
        mut current: OpenChunk,
        chunks: &mut Vec<PackedChunk>,
        width: MarkerWidth,
    ) -> OpenChunk {
        let max = self.max_length;
        let mut rest = word;

        log::debug!(
            "splitting {}-byte word across chunks of capacity {}",
            word.len(),
            max
        );

        loop {
            if current.fits(rest, max) {
                current.push(rest, max);
                return current;
            }

            let mut cut = floor_char_boundary(rest, current.room(max));
            if cut == 0 {
                // Not even one character fits; take one anyway to make progress
                cut = rest.chars().next().map_or(rest.len(), char::len_utf8);
            }

            current.push(&rest[..cut], max);
            rest = &rest[cut..];
            if rest.is_empty() {
                return current;
            }

            chunks.push(current.seal());
            current = OpenChunk::new(width.for_index(chunks.len() + 1));
        }
    }
}

/// Largest char boundary in `s` that is not after `index`
fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }

    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }

    index
}

/// Width assumption to start exact numbering from
pub(crate) fn initial_exact_width() -> MarkerWidth {
    MarkerWidth::TotalDigits(1)
}

/// Whether a packing made under `width` is consistent with `total` chunks
pub(crate) fn width_settles(width: MarkerWidth, total: usize) -> bool {
    match width {
        MarkerWidth::Placeholder => true,
        MarkerWidth::TotalDigits(digits) => digit_count(total) <= digits,
    }
}
