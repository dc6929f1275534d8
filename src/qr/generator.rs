//! QR code rendering for encoded payloads.

use image::{DynamicImage, Rgb};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode, Version};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during QR code operations.
#[derive(Error, Debug)]
pub enum QrError {
    #[error("QR code generation failed: {0}")]
    QrGenerationError(String),

    #[error("Image save error: {0}")]
    ImageSaveError(String),

    #[error("QR code read error: {0}")]
    QrReadError(String),

    #[error("No QR code found in image")]
    NoQrCodeFound,

    #[error("Invalid color: {0} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Output format for QR codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    /// PNG image (default)
    #[default]
    Png,
    /// SVG vector image
    Svg,
    /// ASCII art (for terminal display)
    Ascii,
}

impl QrFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            QrFormat::Png => "png",
            QrFormat::Svg => "svg",
            QrFormat::Ascii => "txt",
        }
    }
}

impl FromStr for QrFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(QrFormat::Png),
            "svg" => Ok(QrFormat::Svg),
            "ascii" | "txt" => Ok(QrFormat::Ascii),
            _ => Err(format!("Unknown format: {}. Use: png, svg, or ascii", s)),
        }
    }
}

/// Parses an error correction level name (`L`, `M`, `Q`, `H`).
pub fn parse_ec_level(level: &str) -> Option<EcLevel> {
    match level.trim().to_uppercase().as_str() {
        "L" => Some(EcLevel::L),
        "M" => Some(EcLevel::M),
        "Q" => Some(EcLevel::Q),
        "H" => Some(EcLevel::H),
        _ => None,
    }
}

/// Configuration for QR code generation.
#[derive(Debug, Clone)]
pub struct QrConfig {
    /// Error correction level (default: Medium)
    pub ec_level: EcLevel,
    /// Minimum width and height in pixels for image output (default: 256)
    pub size: u32,
    /// Whether to draw the quiet zone border (default: true)
    pub quiet_zone: bool,
    /// Foreground color as `#rrggbb`
    pub dark_color: String,
    /// Background color as `#rrggbb`
    pub light_color: String,
    /// Output format
    pub format: QrFormat,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::M,
            size: 256,
            quiet_zone: true,
            dark_color: "#000000".to_string(),
            light_color: "#ffffff".to_string(),
            format: QrFormat::Png,
        }
    }
}

/// Parses a `#rrggbb` color.
pub fn parse_color(color: &str) -> Result<Rgb<u8>, QrError> {
    let invalid = || QrError::InvalidColor(color.to_string());

    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Renders a payload string as a QR code.
///
/// The payload is encoded verbatim; the encoder picks the densest mode for
/// the content.
pub fn generate_qr(payload: &str, config: &QrConfig) -> Result<QrOutput, QrError> {
    let qr = QrCode::with_error_correction_level(payload.as_bytes(), config.ec_level)
        .map_err(|e| QrError::QrGenerationError(e.to_string()))?;

    debug!(
        bytes = payload.len(),
        version = ?qr.version(),
        format = ?config.format,
        "rendering QR code"
    );

    match config.format {
        QrFormat::Png => {
            let image = qr
                .render::<Rgb<u8>>()
                .min_dimensions(config.size, config.size)
                .quiet_zone(config.quiet_zone)
                .dark_color(parse_color(&config.dark_color)?)
                .light_color(parse_color(&config.light_color)?)
                .build();

            Ok(QrOutput::Image(DynamicImage::ImageRgb8(image)))
        }
        QrFormat::Svg => {
            // Validate before handing the strings to the SVG renderer
            parse_color(&config.dark_color)?;
            parse_color(&config.light_color)?;

            let svg_string = qr
                .render()
                .min_dimensions(config.size, config.size)
                .quiet_zone(config.quiet_zone)
                .dark_color(svg::Color(&config.dark_color))
                .light_color(svg::Color(&config.light_color))
                .build();

            Ok(QrOutput::Svg(svg_string))
        }
        QrFormat::Ascii => {
            let ascii = qr
                .render::<char>()
                .quiet_zone(config.quiet_zone)
                .module_dimensions(2, 1)
                .build();

            Ok(QrOutput::Ascii(ascii))
        }
    }
}

/// Output from QR code generation.
pub enum QrOutput {
    /// PNG/image output
    Image(DynamicImage),
    /// SVG string output
    Svg(String),
    /// ASCII art output
    Ascii(String),
}

impl QrOutput {
    /// Returns true if this is an image output.
    pub fn is_image(&self) -> bool {
        matches!(self, QrOutput::Image(_))
    }

    /// Returns the image if this is an image output.
    pub fn into_image(self) -> Option<DynamicImage> {
        match self {
            QrOutput::Image(img) => Some(img),
            _ => None,
        }
    }

    /// Returns the string content (for SVG or ASCII).
    pub fn as_string(&self) -> Option<&str> {
        match self {
            QrOutput::Svg(s) | QrOutput::Ascii(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders a payload and saves it to a file.
pub fn generate_qr_to_file<P: AsRef<Path>>(
    payload: &str,
    path: P,
    config: &QrConfig,
) -> Result<(), QrError> {
    let output = generate_qr(payload, config)?;
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    match output {
        QrOutput::Image(img) => {
            img.save_with_format(path, image::ImageFormat::Png)
                .map_err(|e| QrError::ImageSaveError(e.to_string()))?;
        }
        QrOutput::Svg(svg) => {
            std::fs::write(path, svg)?;
        }
        QrOutput::Ascii(ascii) => {
            std::fs::write(path, ascii)?;
        }
    }

    debug!(path = %path.display(), "saved QR code");
    Ok(())
}

/// Information about QR code capacity for a payload.
#[derive(Debug, Clone)]
pub struct QrCapacityInfo {
    /// Payload size in bytes
    pub data_bytes: usize,
    /// Minimum QR version needed (1-40, 0 if too large)
    pub qr_version: u8,
    /// Whether the payload fits in a standard QR code
    pub fits_in_qr: bool,
}

/// Returns the smallest QR version able to hold `payload` at `ec_level`.
pub fn qr_capacity_info(payload: &str, ec_level: EcLevel) -> QrCapacityInfo {
    let qr_version = match QrCode::with_error_correction_level(payload.as_bytes(), ec_level) {
        Ok(qr) => match qr.version() {
            Version::Normal(v) | Version::Micro(v) => v as u8,
        },
        Err(_) => 0,
    };

    QrCapacityInfo {
        data_bytes: payload.len(),
        qr_version,
        fits_in_qr: qr_version > 0,
    }
}
