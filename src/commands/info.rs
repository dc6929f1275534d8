//! QR code capacity info command.

use anyhow::{Context, Result};
use clap::Args;

use payloadqr::qr::{parse_ec_level, qr_capacity_info};

use super::CommandExecutor;

/// Show how large a QR code a payload needs.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Payload text to analyze
    pub payload: String,

    /// Error correction level: L, M, Q, or H
    #[arg(long, default_value = "M")]
    pub ec_level: String,
}

impl CommandExecutor for InfoCommand {
    fn execute(&self) -> Result<()> {
        let ec_level = parse_ec_level(&self.ec_level).with_context(|| {
            format!("Unknown error correction level: {}. Use: L, M, Q, or H", self.ec_level)
        })?;

        let info = qr_capacity_info(&self.payload, ec_level);

        println!("QR Code Capacity Analysis");
        println!("========================");
        println!("  Payload size: {} bytes", info.data_bytes);
        println!("  Error correction: {:?}", ec_level);

        if info.fits_in_qr {
            println!("  QR version needed: {} (of 40)", info.qr_version);
            println!("  Status: FITS in standard QR code");

            if info.qr_version <= 10 {
                println!("  Note: Small QR code, easy to scan");
            } else if info.qr_version <= 25 {
                println!("  Note: Medium QR code, should scan well");
            } else {
                println!("  Note: Large QR code, may need good camera");
            }
        } else {
            println!("  Status: TOO LARGE for standard QR code");
            println!("  Consider: A lower error correction level or a shorter payload");
        }

        Ok(())
    }
}
