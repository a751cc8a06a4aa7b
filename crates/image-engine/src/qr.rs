//! QR code bitmap generation.

use image::GrayImage;
use qrcode::{Color, EcLevel, QrCode};
use tracing::debug;

use crate::error::EngineError;
use crate::{BLACK, WHITE};

/// Error-correction level for every symbol.
///
/// Level H tolerates the label painted over the centre of the symbol.
pub const EC_LEVEL: EcLevel = EcLevel::H;

/// Largest side length, in pixels, of a generated bitmap.
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// Generate a QR bitmap for `data`.
///
/// Each module is `box_size` pixels square and the symbol is surrounded by
/// a white quiet zone `border` modules wide.
pub fn generate_qr(data: &str, box_size: u32, border: u32) -> Result<GrayImage, EngineError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EC_LEVEL)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let scale = box_size.max(1);
    let img_size = border
        .checked_mul(2)
        .and_then(|quiet| quiet.checked_add(module_count))
        .and_then(|side| side.checked_mul(scale))
        .filter(|side| *side <= MAX_IMAGE_SIDE)
        .ok_or(EngineError::ImageTooLarge {
            modules: module_count,
            box_size: scale,
            border,
        })?;
    debug!(module_count, scale, border, img_size, "Rendering QR symbol");

    let mut img = GrayImage::from_pixel(img_size, img_size, WHITE);

    for (i, color) in modules.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32) % module_count + border;
        let y = (i as u32) / module_count + border;
        for dx in 0..scale {
            for dy in 0..scale {
                img.put_pixel(x * scale + dx, y * scale + dy, BLACK);
            }
        }
    }

    Ok(img)
}
