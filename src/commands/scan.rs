//! QR code reading command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use payloadqr::qr::read_qr_from_file;

use super::CommandExecutor;

/// Read a QR code image and print the payload it carries.
#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Path to image containing a QR code
    pub input: PathBuf,

    /// Write the payload to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for ScanCommand {
    fn execute(&self) -> Result<()> {
        let payload = read_qr_from_file(&self.input)
            .with_context(|| format!("Failed to read QR code from {}", self.input.display()))?;

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, &payload)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!("Payload written to: {}", output_path.display());
            println!("  Size: {} bytes", payload.len());
        } else {
            println!("{}", payload);
        }

        Ok(())
    }
}
