//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::from_file(&self.config).and_then(|config| {
            let paginator = config.pagination.to_paginator_config()?;
            Ok((config, paginator))
        });

        match checked {
            Ok((config, paginator)) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Part capacity: {} bytes ({} minus {} reserved)",
                    paginator.max_length,
                    config.pagination.max_length,
                    config.pagination.reserve_bytes
                );
                println!("  Oversize policy: {}", paginator.oversize.as_str());
                println!("  Numbering: {}", paginator.numbering.as_str());
                println!("  Output format: {}", config.output.default_format.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
