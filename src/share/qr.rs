//! QR code for a share link, for showing on screen or printing on a flyer.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;

use super::ShareError;

/// Smallest rendered edge in pixels
const QR_MIN_DIMENSION: u32 = 256;

/// Encode `url` as a PNG QR code.
pub fn qr_code_png(url: &str) -> Result<Vec<u8>, ShareError> {
    let code = QrCode::new(url.as_bytes())?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_MIN_DIMENSION, QR_MIN_DIMENSION)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// Encode `url` as a PNG QR code wrapped in a `data:` URI.
pub fn qr_code_data_uri(url: &str) -> Result<String, ShareError> {
    let png = qr_code_png(url)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}
