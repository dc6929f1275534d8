//! Shared output handling for payload commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use payloadqr::qr::{
    generate_qr, generate_qr_to_file, parse_ec_level, qr_capacity_info, QrConfig, QrFormat,
};
use payloadqr::{PayloadRequest, Settings};

/// Rendering options common to every payload command.
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Output file path (default: <type>_qr.<ext> in the configured output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: png, svg, or ascii
    #[arg(short, long)]
    pub format: Option<String>,

    /// Minimum image size in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Error correction level: L, M, Q, or H
    #[arg(long)]
    pub ec_level: Option<String>,

    /// Only print the encoded payload, don't render a QR code
    #[arg(long)]
    pub print: bool,

    /// Also draw the QR code in the terminal
    #[arg(long)]
    pub ascii: bool,

    /// Settings file (default: ~/.payloadqr/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RenderArgs {
    /// Encodes the request and renders it according to settings and flags.
    pub fn emit(&self, request: &PayloadRequest) -> Result<()> {
        let payload = request.encode().context("Invalid input")?;

        if self.print {
            println!("{}", payload);
            return Ok(());
        }

        let settings = match &self.config {
            Some(path) => Settings::load_from(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::load_or_default().context("Failed to load settings")?,
        };
        let config = self.qr_config(&settings)?;

        let output = match &self.output {
            Some(path) => path.clone(),
            None => settings.output_dir().join(format!(
                "{}.{}",
                request.kind().file_stem(),
                config.format.extension()
            )),
        };

        generate_qr_to_file(&payload, &output, &config)
            .with_context(|| format!("Failed to generate QR code at {}", output.display()))?;
        info!(kind = %request.kind(), path = %output.display(), "QR code written");

        let info = qr_capacity_info(&payload, config.ec_level);

        println!("QR code generated: {}", output.display());
        println!("  Payload: {} bytes", info.data_bytes);
        println!("  QR version: {}", info.qr_version);
        println!("  Format: {}", config.format.extension());

        if self.ascii {
            let terminal = QrConfig {
                format: QrFormat::Ascii,
                ..config
            };
            let ascii = generate_qr(&payload, &terminal).context("Failed to draw QR code")?;
            if let Some(art) = ascii.as_string() {
                println!();
                println!("{}", art);
            }
        }

        Ok(())
    }

    /// Applies command-line overrides on top of the settings file.
    fn qr_config(&self, settings: &Settings) -> Result<QrConfig> {
        let mut config = settings.qr_config().context("Invalid settings")?;

        if let Some(format) = &self.format {
            config.format = format.parse::<QrFormat>().map_err(anyhow::Error::msg)?;
        }
        if let Some(size) = self.size {
            anyhow::ensure!(size > 0, "Size must be greater than zero");
            config.size = size;
        }
        if let Some(level) = &self.ec_level {
            config.ec_level = parse_ec_level(level)
                .with_context(|| format!("Unknown error correction level: {}. Use: L, M, Q, or H", level))?;
        }

        Ok(config)
    }
}
