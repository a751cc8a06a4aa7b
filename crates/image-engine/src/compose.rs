//! Image composition: concatenation and the centre label.

use ab_glyph::{Font, PxScale};
use image::GrayImage;
use image::imageops;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::debug;

use crate::WHITE;
use crate::text::{blank_canvas, draw_lines, text_box};

/// Font size of the label painted over the QR centre.
pub const CENTER_LABEL_FONT_SIZE: f32 = 20.0;

/// Upper bound (exclusive) on the label area as a percentage of the
/// bitmap area. Kept below the nominal 30% that level H recovers.
pub const MAX_CENTER_LABEL_PERCENT: f64 = 28.0;

/// Place `right` to the right of `left`.
///
/// The output takes the height of `left`; taller parts of `right` are cut.
pub fn concat_horizontal(left: &GrayImage, right: &GrayImage) -> GrayImage {
    let mut result = blank_canvas(left.width() + right.width(), left.height());
    imageops::replace(&mut result, left, 0, 0);
    imageops::replace(&mut result, right, i64::from(left.width()), 0);
    result
}

/// Place `bottom` below `top`.
///
/// The output takes the width of `top`; wider parts of `bottom` are cut.
pub fn concat_vertical(top: &GrayImage, bottom: &GrayImage) -> GrayImage {
    let mut result = blank_canvas(top.width(), top.height() + bottom.height());
    imageops::replace(&mut result, top, 0, 0);
    imageops::replace(&mut result, bottom, 0, i64::from(top.height()));
    result
}

/// Share of `img` covered by a `width` x `height` box, in percent.
pub fn area_percent(img: &GrayImage, width: u32, height: u32) -> f64 {
    let img_area = f64::from(img.width()) * f64::from(img.height());
    if img_area == 0.0 {
        return f64::INFINITY;
    }
    f64::from(width) * f64::from(height) * 100.0 / img_area
}

/// Paint `text` on a white box centred on `img`.
///
/// Nothing is drawn, and `false` returned, when the text box would cover
/// [`MAX_CENTER_LABEL_PERCENT`] or more of the image.
pub fn paint_center_label<F: Font>(img: &mut GrayImage, font: &F, text: &str) -> bool {
    let scale = PxScale::from(CENTER_LABEL_FONT_SIZE);
    let (text_width, text_height) = text_box(font, scale, text);
    if text_width == 0 || text_height == 0 {
        return false;
    }

    let percent = area_percent(img, text_width, text_height);
    if percent >= MAX_CENTER_LABEL_PERCENT {
        debug!(percent, text_width, text_height, "Centre label too large, skipping");
        return false;
    }

    let x = (img.width() as i32 - text_width as i32) / 2;
    let y = (img.height() as i32 - text_height as i32) / 2;
    draw_filled_rect_mut(img, Rect::at(x, y).of_size(text_width, text_height), WHITE);
    draw_lines(img, font, scale, x, y, text);
    debug!(percent, x, y, "Painted centre label");
    true
}

#[cfg(test)]
mod tests {
    use image::Luma;

    use super::*;
    use crate::BLACK;
    use crate::font::builtin_font;

    fn solid(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([value]))
    }

    #[test]
    fn concat_horizontal_sums_widths() {
        let result = concat_horizontal(&solid(100, 50, 0), &solid(200, 50, 255));
        assert_eq!(result.dimensions(), (300, 50));
        assert_eq!(result.get_pixel(99, 10), &BLACK);
        assert_eq!(result.get_pixel(100, 10), &WHITE);
    }

    #[test]
    fn concat_horizontal_keeps_left_height() {
        let result = concat_horizontal(&solid(10, 20, 0), &solid(10, 40, 0));
        assert_eq!(result.dimensions(), (20, 20));
    }

    #[test]
    fn concat_vertical_sums_heights() {
        let result = concat_vertical(&solid(100, 50, 0), &solid(100, 30, 255));
        assert_eq!(result.dimensions(), (100, 80));
        assert_eq!(result.get_pixel(5, 49), &BLACK);
        assert_eq!(result.get_pixel(5, 50), &WHITE);
    }

    #[test]
    fn center_label_drawn_on_large_image() {
        let font = builtin_font();
        let mut img = solid(200, 200, 0);
        assert!(paint_center_label(&mut img, &font, "R1"));
        // the backing box turned some centre pixels white
        assert!(img.pixels().any(|p| p[0] == 255));
        assert_eq!(img.get_pixel(0, 0), &BLACK);
    }

    #[test]
    fn center_label_skipped_when_too_large() {
        let font = builtin_font();
        let original = solid(40, 40, 0);
        let mut img = original.clone();
        assert!(!paint_center_label(&mut img, &font, "a long rack name"));
        assert_eq!(img, original);
    }

    /// A label whose measured box has an area divisible by 7, so an image of
    /// exactly 100/28 times that area can be built.
    fn label_with_exact_threshold<F: Font>(font: &F) -> (String, u32, u32) {
        let scale = PxScale::from(CENTER_LABEL_FONT_SIZE);
        ('A'..='Z')
            .flat_map(|a| ('a'..='z').map(move |b| format!("{a}{b}")))
            .map(|text| {
                let (w, h) = text_box(font, scale, &text);
                (text, w, h)
            })
            .find(|(_, w, h)| (w * h) % 7 == 0)
            .expect("some two-letter label measures a multiple of 7")
    }

    #[test]
    fn center_label_threshold_is_exclusive() {
        let font = builtin_font();
        let (text, w, h) = label_with_exact_threshold(&font);
        // the text box covers w * h = 28% of (25 * w * h / 7)
        let (width, height) = if w % 7 == 0 { (25 * w / 7, h) } else { (w, 25 * h / 7) };
        let exact = solid(width, height, 0);
        assert!((area_percent(&exact, w, h) - MAX_CENTER_LABEL_PERCENT).abs() < f64::EPSILON);

        let mut img = exact.clone();
        assert!(!paint_center_label(&mut img, &font, &text));
        assert_eq!(img, exact);

        // one more column puts the box just under the threshold
        let mut under = solid(width + 1, height, 0);
        assert!(area_percent(&under, w, h) < MAX_CENTER_LABEL_PERCENT);
        assert!(paint_center_label(&mut under, &font, &text));
        assert!(under.pixels().any(|p| p[0] == 255));

        // one less column puts it just over
        let mut over = solid(width - 1, height, 0);
        assert!(!paint_center_label(&mut over, &font, &text));
    }

    #[test]
    fn area_percent_of_empty_image_is_infinite() {
        assert!(area_percent(&solid(0, 0, 0), 1, 1).is_infinite());
        assert!((area_percent(&solid(10, 10, 0), 5, 5) - 25.0).abs() < f64::EPSILON);
    }
}
