//! Split command implementation

use super::open_output;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{create_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use msgpage_core::{Numbering, OversizePolicy, Paginator};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Message text given directly
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Channel capacity in bytes
    #[arg(short, long, value_name = "BYTES")]
    pub max_length: Option<usize>,

    /// Bytes reserved for channel overhead
    #[arg(short, long, value_name = "BYTES")]
    pub reserve: Option<usize>,

    /// Handling of words too long for a chunk
    #[arg(long, value_enum)]
    pub oversize: Option<OversizeArg>,

    /// Part marker accounting
    #[arg(long, value_enum)]
    pub numbering: Option<NumberingArg>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Oversize-word policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OversizeArg {
    /// Emit the word alone in an oversized chunk
    Emit,
    /// Fail with an error
    Reject,
    /// Break the word across chunks
    Split,
}

impl From<OversizeArg> for OversizePolicy {
    fn from(arg: OversizeArg) -> Self {
        match arg {
            OversizeArg::Emit => OversizePolicy::Emit,
            OversizeArg::Reject => OversizePolicy::Reject,
            OversizeArg::Split => OversizePolicy::Split,
        }
    }
}

/// Numbering strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum NumberingArg {
    /// Pack against a [k/XX] stand-in, then fill in the total
    Placeholder,
    /// Repack with real marker widths so no part runs over
    Exact,
}

impl From<NumberingArg> for Numbering {
    fn from(arg: NumberingArg) -> Self {
        match arg {
            NumberingArg::Placeholder => Numbering::Placeholder,
            NumberingArg::Exact => Numbering::Exact,
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;
        let paginator = Paginator::new(config.pagination.to_paginator_config()?);

        let source = InputSource::from_args(self.text.as_deref(), self.input.as_ref());
        let message = source.read()?;
        log::info!(
            "Paginating {} bytes from {} into chunks of {} bytes",
            message.len(),
            source.display_name(),
            paginator.config().max_length
        );

        let output = paginator
            .paginate_detailed(&message)
            .map_err(CliError::from)?;

        let oversized = output.oversized_count();
        if oversized > 0 {
            log::warn!(
                "{} of {} parts exceed {} bytes",
                oversized,
                output.chunks.len(),
                output.metadata.max_length
            );
        }

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(
            config.output.default_format,
            writer,
            config.output.pretty_json,
        );
        for chunk in &output.chunks {
            formatter.format_chunk(chunk)?;
        }
        formatter.finish()?;

        let metadata = &output.metadata;
        log::info!(
            "Wrote {} parts ({} words, {} input bytes, {} numbering, {} policy)",
            metadata.chunk_count,
            metadata.word_count,
            metadata.input_bytes,
            metadata.numbering.as_str(),
            metadata.oversize.as_str()
        );
        Ok(())
    }

    /// Load the configuration file and apply command-line overrides
    pub fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;

        if let Some(max_length) = self.max_length {
            config.pagination.max_length = max_length;
        }
        if let Some(reserve) = self.reserve {
            config.pagination.reserve_bytes = reserve;
        }
        if let Some(oversize) = self.oversize {
            config.pagination.oversize = oversize.into();
        }
        if let Some(numbering) = self.numbering {
            config.pagination.numbering = numbering.into();
        }
        if let Some(format) = self.format {
            config.output.default_format = format;
        }

        Ok(config)
    }
}
