/// Errors raised by the image engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("QR encode error: {0}")]
    QrEncode(#[from] qrcode::types::QrError),

    #[error("QR image too large: {modules} modules, box size {box_size}, border {border}")]
    ImageTooLarge { modules: u32, box_size: u32, border: u32 },

    #[error("PNG encode error: {0}")]
    Png(#[from] image::ImageError),

    #[error("Invalid font data: {0}")]
    Font(String),
}
