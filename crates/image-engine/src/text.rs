//! Text measurement, font-size fitting and line drawing.

use ab_glyph::{Font, GlyphId, PxScale, ScaleFont};
use image::GrayImage;
use imageproc::drawing::draw_text_mut;

use crate::{BLACK, WHITE};

/// Largest font size tried when fitting a label.
pub const MAX_FONT_SIZE: u32 = 56;

/// Smallest font size; used when nothing larger fits.
pub const MIN_FONT_SIZE: u32 = 1;

/// Measure the pixel width of a single line at the given font and scale.
pub fn measure_text_width<F: Font>(font: &F, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Compute the line height for the given font and scale.
pub fn line_height<F: Font>(font: &F, scale: PxScale) -> u32 {
    let scaled = font.as_scaled(scale);
    (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
}

/// Bounding box `(width, height)` of possibly multi-line text.
///
/// Lines are separated by `\n` or `\r\n`; empty text measures `(0, 0)`.
pub fn text_box<F: Font>(font: &F, scale: PxScale, text: &str) -> (u32, u32) {
    let mut width = 0;
    let mut lines = 0;
    for line in text.lines() {
        width = width.max(measure_text_width(font, scale, line));
        lines += 1;
    }
    (width, lines * line_height(font, scale))
}

/// Find the largest font size whose text box is strictly inside
/// `max_width` x `max_height`.
///
/// Sizes are tried from [`MAX_FONT_SIZE`] downwards one at a time; if none
/// fits, [`MIN_FONT_SIZE`] is returned.
pub fn fit_font_size<F: Font>(font: &F, text: &str, max_width: u32, max_height: u32) -> u32 {
    (MIN_FONT_SIZE..=MAX_FONT_SIZE)
        .rev()
        .find(|&size| {
            let (w, h) = text_box(font, PxScale::from(size as f32), text);
            w < max_width && h < max_height
        })
        .unwrap_or(MIN_FONT_SIZE)
}

/// Split every line of `text` into chunks of `width` characters.
///
/// Not word-aware. Empty lines produce no chunks.
pub fn split_fixed(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = Vec::new();
    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        chunks.extend(chars.chunks(width).map(|c| c.iter().collect::<String>()));
    }
    chunks
}

/// Draw multi-line text in black with its top-left corner at `(x, y)`.
pub fn draw_lines<F: Font>(img: &mut GrayImage, font: &F, scale: PxScale, x: i32, y: i32, text: &str) {
    let lh = line_height(font, scale) as i32;
    for (i, line) in text.lines().enumerate() {
        draw_text_mut(img, BLACK, x, y + i as i32 * lh, scale, font, line);
    }
}

/// Create a blank white canvas.
pub fn blank_canvas(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, WHITE)
}
