//! QR code rendering and reading for encoded payloads.
//!
//! This is the barcode side of the pipeline: it takes one finalized payload
//! string and turns it into a PNG, SVG or terminal rendering. It knows
//! nothing about payload formats.

mod generator;
mod reader;

pub use generator::{
    generate_qr, generate_qr_to_file, parse_color, parse_ec_level, qr_capacity_info,
    QrCapacityInfo, QrConfig, QrError, QrFormat, QrOutput,
};
pub use qrcode::EcLevel;
pub use reader::{read_qr, read_qr_from_file};
