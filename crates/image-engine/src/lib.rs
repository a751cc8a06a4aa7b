//! Raster primitives for QR code panels.
//!
//! Provides QR bitmap generation, font loading with a built-in fallback,
//! text measurement and font-size fitting, image concatenation, centre
//! label painting and PNG data-URI serialization.

pub mod compose;
pub mod encode;
pub mod error;
pub mod font;
pub mod qr;
pub mod text;

// Re-exports for convenience
pub use compose::{concat_horizontal, concat_vertical, paint_center_label};
pub use encode::{encode_png, to_png_data_uri};
pub use error::EngineError;
pub use font::{FontLoader, builtin_font};
pub use qr::generate_qr;
pub use text::{fit_font_size, split_fixed, text_box};

/// Background fill for generated canvases.
pub const WHITE: image::Luma<u8> = image::Luma([255]);

/// Ink colour for QR modules and text.
pub const BLACK: image::Luma<u8> = image::Luma([0]);
