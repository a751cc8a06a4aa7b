//! Default setting values.

use qr_payload::DEFAULT_MAX_LENGTH;

/// Kinds with a QR panel unless `pages` says otherwise.
pub const DEFAULT_PAGES: &[&str] = &["device", "rack", "cable"];

pub const DEFAULT_DATA_FIELDS: &[&str] = &["url"];
pub const DEFAULT_TEXT_FIELDS: &[&str] = &["name", "serial"];
pub const DEFAULT_TEXT_BELOW_FIELDS: &[&str] = &["name"];

pub const DEFAULT_FONT: &str = image_engine::font::BUILTIN_FONT_NAME;
pub const DEFAULT_FONT_DIR: &str = "fonts";

/// Pixels per QR module.
pub const DEFAULT_QR_BOX_SIZE: u32 = 4;

/// Quiet zone width in modules.
pub const DEFAULT_QR_BORDER: u32 = 4;

pub const QR_BOX_SIZE_MIN: u32 = 1;
pub const QR_BOX_SIZE_MAX: u32 = 50;
pub const QR_BORDER_MAX: u32 = 20;

pub const DEFAULT_MAX_PAYLOAD_LENGTH: usize = DEFAULT_MAX_LENGTH;

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
