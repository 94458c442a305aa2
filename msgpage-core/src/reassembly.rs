//! Chunk reassembly
//!
//! The receiving side of pagination: chunks may arrive in any order, and
//! their `[k/N]` markers are used to put the words back in sequence.
//!
//! ```
//! use msgpage_core::{paginate, reassemble};
//!
//! let mut chunks = paginate("the quick brown fox jumps over the lazy dog", 20);
//! chunks.reverse();
//! assert_eq!(
//!     reassemble(&chunks).unwrap(),
//!     "the quick brown fox jumps over the lazy dog"
//! );
//! ```
//!
//! A single-chunk message is sent without a marker, so one whose first word
//! already reads like `[k/N]` cannot be told apart from a marked part and is
//! reassembled as part `k` of `N`.

use std::collections::BTreeMap;

use crate::error::ReassemblyError;
use crate::marker::parse_marker;

/// Result type for reassembly operations
pub type Result<T> = std::result::Result<T, ReassemblyError>;

/// Collects chunks of one message until every part has arrived
///
/// Any chunk starting with `[k/N] ` is taken as part `k` of `N`, including an
/// unmarked short message that happens to begin that way.
#[derive(Debug, Default)]
pub struct Reassembler {
    /// Total announced by the first marked chunk
    total: Option<usize>,
    /// Bodies keyed by one-based part index
    parts: BTreeMap<usize, String>,
    /// A lone chunk without marker is a complete message on its own
    unmarked: Option<String>,
    /// Number of chunks offered so far, duplicates included
    received: usize,
}

impl Reassembler {
    /// Create an empty reassembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chunk
    ///
    /// Returns `Ok(true)` once the message is complete. Exact duplicates are
    /// ignored.
    pub fn add(&mut self, chunk: &str) -> Result<bool> {
        let position = self.received;
        self.received += 1;

        let Some((marker, body)) = parse_marker(chunk) else {
            if position == 0 {
                self.unmarked = Some(chunk.to_string());
                return Ok(true);
            }
            return Err(ReassemblyError::Unmarked { position });
        };

        if self.unmarked.is_some() {
            return Err(ReassemblyError::Unmarked { position: 0 });
        }

        let total = *self.total.get_or_insert(marker.total);
        if marker.total != total {
            return Err(ReassemblyError::TotalMismatch {
                expected: total,
                found: marker.total,
            });
        }

        if marker.index == 0 || marker.index > total {
            return Err(ReassemblyError::IndexOutOfRange {
                index: marker.index,
                total,
            });
        }

        match self.parts.get(&marker.index) {
            Some(existing) if existing != body => {
                return Err(ReassemblyError::Conflict {
                    index: marker.index,
                });
            }
            Some(_) => {
                log::debug!("ignoring duplicate of part {}", marker.index);
            }
            None => {
                self.parts.insert(marker.index, body.to_string());
            }
        }

        Ok(self.is_complete())
    }

    /// Check if all parts have been received
    pub fn is_complete(&self) -> bool {
        self.unmarked.is_some() || self.total.is_some_and(|total| self.parts.len() == total)
    }

    /// One-based indices of parts not yet received
    pub fn missing(&self) -> Vec<usize> {
        match self.total {
            Some(total) => (1..=total)
                .filter(|index| !self.parts.contains_key(index))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Rebuild the message, joining part bodies with single spaces
    pub fn finish(self) -> Result<String> {
        if let Some(text) = self.unmarked {
            return Ok(text);
        }

        if self.total.is_none() {
            return Err(ReassemblyError::Empty);
        }

        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ReassemblyError::Missing { missing });
        }

        let bodies: Vec<&str> = self
            .parts
            .values()
            .map(String::as_str)
            .filter(|body| !body.is_empty())
            .collect();

        Ok(bodies.join(" "))
    }
}

/// Reassemble a full set of chunks given in any order
///
/// Shares the marker ambiguity described on [`Reassembler`].
pub fn reassemble<S: AsRef<str>>(chunks: &[S]) -> Result<String> {
    let mut reassembler = Reassembler::new();
    for chunk in chunks {
        reassembler.add(chunk.as_ref())?;
    }
    reassembler.finish()
}
