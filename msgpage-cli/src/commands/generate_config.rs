//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use msgpage_core::DEFAULT_MAX_LENGTH;
use std::path::PathBuf;

use crate::config::DEFAULT_RESERVE_BYTES;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the capacity and policies to match your channel");
        println!("2. Validate your configuration:");
        println!("   msgpage validate -c {}", self.output.display());
        println!("3. Use it when splitting:");
        println!(
            "   msgpage split -i message.txt -c {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Template configuration content
pub fn generate_template() -> String {
    format!(
        r#"# msgpage configuration

[pagination]
# Raw capacity of one message on the channel, in UTF-8 bytes
max_length = {DEFAULT_MAX_LENGTH}

# Bytes held back for channel overhead; parts are at most
# max_length - reserve_bytes bytes long
reserve_bytes = {DEFAULT_RESERVE_BYTES}

# Words longer than a part: "emit", "reject" or "split"
oversize = "emit"

# Marker accounting: "placeholder" or "exact"
numbering = "placeholder"

[output]
# "text", "json" or "markdown"
default_format = "text"
pretty_json = true
"#
    )
}
