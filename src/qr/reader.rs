//! QR code reading.
//!
//! Decodes rendered codes back into their payload text, mainly to check that
//! what we render is actually scannable.

use image::DynamicImage;
use rqrr::PreparedImage;
use std::path::Path;

use super::QrError;

/// Reads the first QR code in an image and returns its payload text.
pub fn read_qr(image: &DynamicImage) -> Result<String, QrError> {
    let gray = image.to_luma8();
    let mut prepared = PreparedImage::prepare(gray);
    let grids = prepared.detect_grids();

    let grid = grids.first().ok_or(QrError::NoQrCodeFound)?;

    let (_, content) = grid
        .decode()
        .map_err(|e| QrError::QrReadError(format!("Failed to decode QR: {:?}", e)))?;

    Ok(content)
}

/// Reads a QR code from an image file and returns its payload text.
pub fn read_qr_from_file<P: AsRef<Path>>(path: P) -> Result<String, QrError> {
    let image = image::open(path).map_err(|e| QrError::QrReadError(e.to_string()))?;

    read_qr(&image)
}
