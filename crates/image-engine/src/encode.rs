//! PNG serialization and data URIs.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{GrayImage, ImageFormat};

use crate::error::EngineError;

/// Prefix of every URI produced by [`to_png_data_uri`].
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode a bitmap as PNG bytes.
pub fn encode_png(img: &GrayImage) -> Result<Vec<u8>, EngineError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode a bitmap as a `data:image/png;base64,...` URI for direct embedding.
pub fn to_png_data_uri(img: &GrayImage) -> Result<String, EngineError> {
    let bytes = encode_png(img)?;
    Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::generate_qr;

    #[test]
    fn data_uri_decodes_back_to_same_dimensions() {
        let qr = generate_qr("http://h/d/1", 3, 4).unwrap();
        let uri = to_png_data_uri(&qr).unwrap();
        assert!(uri.starts_with(PNG_DATA_URI_PREFIX));

        let encoded = uri.trim_start_matches(PNG_DATA_URI_PREFIX);
        let bytes = STANDARD.decode(encoded).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), qr.dimensions());
        assert_eq!(decoded.to_luma8(), qr);
    }
}
