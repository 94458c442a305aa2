//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use msgpage_core::{Numbering, OversizePolicy, PaginatorConfig, DEFAULT_MAX_LENGTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bytes held back from each chunk for channel overhead
pub const DEFAULT_RESERVE_BYTES: usize = 12;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Pagination configuration
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Pagination-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Raw channel capacity in bytes
    pub max_length: usize,

    /// Bytes reserved for channel overhead, subtracted from `max_length`
    pub reserve_bytes: usize,

    /// Handling of words that cannot fit in a chunk
    pub oversize: OversizePolicy,

    /// Marker accounting strategy
    pub numbering: Numbering,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            reserve_bytes: DEFAULT_RESERVE_BYTES,
            oversize: OversizePolicy::default(),
            numbering: Numbering::default(),
        }
    }
}

impl PaginationConfig {
    /// Capacity handed to the paginator once the reserve is taken off
    pub fn effective_max_length(&self) -> usize {
        self.max_length.saturating_sub(self.reserve_bytes)
    }

    /// Build the core paginator configuration
    pub fn to_paginator_config(&self) -> Result<PaginatorConfig, CliError> {
        PaginatorConfig::builder()
            .max_length(self.effective_max_length())
            .oversize(self.oversize)
            .numbering(self.numbering)
            .build()
            .map_err(|_| {
                CliError::ConfigError(format!(
                    "reserve of {} bytes leaves no room in a {}-byte chunk",
                    self.reserve_bytes, self.max_length
                ))
            })
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the given file, or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}
