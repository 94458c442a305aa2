//! Byte-budgeted message pagination
//!
//! Splits a text message into chunks that each fit a byte-limited channel
//! such as an SMS segment, without breaking words. When more than one chunk
//! is needed every chunk is prefixed with a `[k/N]` marker so the recipient
//! can put an out-of-order delivery back together.
//!
//! Capacities are measured in UTF-8 bytes, not characters.
//!
//! # Example
//!
//! ```rust
//! use msgpage_core::{paginate, Numbering, Paginator, PaginatorConfig};
//!
//! // Short messages come back whole, with whitespace normalized
//! assert_eq!(paginate("see you\n\nat 8", 160), vec!["see you at 8"]);
//!
//! // Longer ones are numbered
//! let config = PaginatorConfig::builder()
//!     .max_length(16)
//!     .numbering(Numbering::Exact)
//!     .build()
//!     .unwrap();
//! let chunks = Paginator::new(config).paginate("one two three four five").unwrap();
//! assert_eq!(chunks[0], "[1/3] one two");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod marker;
mod packer;
pub mod paginator;
pub mod reassembly;
pub mod words;

// Re-export key types
pub use config::{
    Numbering, OversizePolicy, PaginatorConfig, PaginatorConfigBuilder, DEFAULT_MAX_LENGTH,
};
pub use dto::{Chunk, Metadata, Output};
pub use error::{PaginateError, ReassemblyError, Result};
pub use marker::{parse_marker, strip_marker, Marker};
pub use paginator::{paginate, paginate_sms, paginate_with_policy, Paginator};
pub use reassembly::{reassemble, Reassembler};
