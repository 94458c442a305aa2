//! Configuration types for the paginator

use crate::error::{PaginateError, Result};

/// Capacity of a single GSM SMS segment, in bytes
pub const DEFAULT_MAX_LENGTH: usize = 160;

/// What to do with a word that cannot fit in a chunk on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OversizePolicy {
    /// Place the word alone in a chunk and emit that chunk oversized
    #[default]
    Emit,
    /// Fail with [`PaginateError::WordTooLong`]
    Reject,
    /// Break the word on character boundaries across several chunks
    Split,
}

impl OversizePolicy {
    /// Get the policy name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OversizePolicy::Emit => "emit",
            OversizePolicy::Reject => "reject",
            OversizePolicy::Split => "split",
        }
    }
}

/// How part markers are charged against the capacity during packing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Numbering {
    /// Pack against a `[k/XX]` stand-in, then substitute the real total.
    ///
    /// A chunk may overrun the capacity by the difference between `XX` and
    /// the digits of the real total.
    #[default]
    Placeholder,
    /// Repack with the real marker width until the total's digit count is
    /// stable. Chunks never overrun except for an oversized single word.
    Exact,
}

impl Numbering {
    /// Get the numbering name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Numbering::Placeholder => "placeholder",
            Numbering::Exact => "exact",
        }
    }
}

/// Paginator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginatorConfig {
    /// Maximum byte length of a finalized chunk, marker included
    pub max_length: usize,
    /// Handling of words that cannot fit alone
    pub oversize: OversizePolicy,
    /// Marker accounting strategy
    pub numbering: Numbering,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            oversize: OversizePolicy::default(),
            numbering: Numbering::default(),
        }
    }
}

impl PaginatorConfig {
    /// Create a configuration for the given capacity
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            ..Default::default()
        }
    }

    /// Single SMS segment preset
    pub fn sms() -> Self {
        Self::default()
    }

    /// Single SMS segment with `reserve` bytes held back for channel overhead
    pub fn sms_with_headroom(reserve: usize) -> Result<Self> {
        Self::builder()
            .max_length(DEFAULT_MAX_LENGTH.saturating_sub(reserve))
            .build()
    }

    /// Create a builder
    pub fn builder() -> PaginatorConfigBuilder {
        PaginatorConfigBuilder::default()
    }
}

/// Builder for [`PaginatorConfig`]
#[derive(Debug, Default)]
pub struct PaginatorConfigBuilder {
    config: PaginatorConfig,
}

impl PaginatorConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk capacity in bytes
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    /// Set the oversize-word policy
    pub fn oversize(mut self, policy: OversizePolicy) -> Self {
        self.config.oversize = policy;
        self
    }

    /// Set the numbering strategy
    pub fn numbering(mut self, numbering: Numbering) -> Self {
        self.config.numbering = numbering;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PaginatorConfig> {
        if self.config.max_length == 0 {
            return Err(PaginateError::Config(
                "max_length must be positive".to_string(),
            ));
        }

        Ok(self.config)
    }
}
