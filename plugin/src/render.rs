//! QR panel compositing.
//!
//! Turns a host object plus [`QrOptions`] into the final bitmap: payload,
//! QR symbol, optional centre label, optional side or bottom label.

use ab_glyph::{Font, PxScale};
use image::GrayImage;
use image_engine::text::{blank_canvas, draw_lines, fit_font_size, split_fixed, text_box};
use image_engine::{
    EngineError, concat_horizontal, concat_vertical, generate_qr, paint_center_label,
    to_png_data_uri,
};
use qr_payload::{FIELD_SEPARATOR, FieldRef, FieldSource, PayloadBuilder, resolve};
use tracing::{debug, warn};

use crate::config::QrOptions;

/// Budget for label text; labels are bounded by the canvas, not the symbol.
pub const LABEL_MAX_LENGTH: usize = 8000;

/// Characters per line in the bottom label.
pub const BELOW_LINE_CHARS: usize = 12;

/// Pixel height reserved per bottom-label line.
pub const BELOW_LINE_HEIGHT: u32 = 12;

/// Where the text label goes relative to the QR symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLayout {
    /// Canvas twice the symbol width, to the right, text centred.
    Beside,
    /// Fixed-width lines under the symbol, text left-aligned.
    Below,
}

impl LabelLayout {
    /// Layout selected by the options; `text_below` takes precedence.
    pub fn from_options(options: &QrOptions) -> Option<Self> {
        if options.text_below {
            Some(LabelLayout::Below)
        } else if options.with_text {
            Some(LabelLayout::Beside)
        } else {
            None
        }
    }
}

/// Paint the `data_in_image` field over the centre of the symbol.
///
/// Returns whether anything was drawn. The bitmap is untouched when the
/// field is unset, unresolvable, falsy, or its text is too large.
pub fn ensure_data_in_image<S, F>(img: &mut GrayImage, options: &QrOptions, object: &S, font: &F) -> bool
where
    S: FieldSource + ?Sized,
    F: Font,
{
    let Some(name) = options.data_in_image.as_deref().filter(|n| !n.is_empty()) else {
        return false;
    };
    let text = match resolve(object, &FieldRef::parse(name)) {
        Ok(Some(text)) => text,
        Ok(None) => return false,
        Err(e) => {
            debug!(field = name, error = %e, "Centre label field unresolvable");
            return false;
        }
    };
    paint_center_label(img, font, &text)
}

/// Attach the text label in the given layout.
///
/// An empty label leaves the bitmap as it is.
pub fn ensure_text_in_image<S, F>(
    img: GrayImage,
    options: &QrOptions,
    object: &S,
    font: &F,
    layout: LabelLayout,
) -> GrayImage
where
    S: FieldSource + ?Sized,
    F: Font,
{
    let label = PayloadBuilder::new().with_max_length(LABEL_MAX_LENGTH);
    match layout {
        LabelLayout::Beside => {
            let text = label.build(&options.text_fields, object);
            if text.is_empty() {
                return img;
            }
            let (width, height) = (img.width() * 2, img.height());
            let mut canvas = blank_canvas(width, height);

            let size = fit_font_size(font, &text, width, height);
            let scale = PxScale::from(size as f32);
            let (text_width, text_height) = text_box(font, scale, &text);
            let x = (width.saturating_sub(text_width) / 2) as i32;
            let y = (height.saturating_sub(text_height) / 2) as i32;
            draw_lines(&mut canvas, font, scale, x, y, &text);
            debug!(size, text_width, text_height, "Attached side label");

            concat_horizontal(&img, &canvas)
        }
        LabelLayout::Below => {
            let text = label.build(&options.text_below_fields, object);
            let lines = split_fixed(&text, BELOW_LINE_CHARS);
            if lines.is_empty() {
                return img;
            }
            let text = lines.join(FIELD_SEPARATOR);
            let (width, height) = (img.width(), lines.len() as u32 * BELOW_LINE_HEIGHT);
            let mut canvas = blank_canvas(width, height);

            let size = fit_font_size(font, &text, width, height);
            draw_lines(&mut canvas, font, PxScale::from(size as f32), 0, 0, &text);
            debug!(size, lines = lines.len(), "Attached bottom label");

            concat_vertical(&img, &canvas)
        }
    }
}

/// Decorate a QR bitmap: centre label first, then the text label.
pub fn compose<S, F>(mut qr: GrayImage, options: &QrOptions, object: &S, font: &F) -> GrayImage
where
    S: FieldSource + ?Sized,
    F: Font,
{
    ensure_data_in_image(&mut qr, options, object, font);
    match LabelLayout::from_options(options) {
        Some(layout) => ensure_text_in_image(qr, options, object, font, layout),
        None => qr,
    }
}

/// Build the payload, encode the symbol and compose the panel.
///
/// An empty payload encodes the page URL. If the payload does not fit in a
/// symbol, the page URL alone is encoded instead.
pub fn render_panel<S, F>(
    options: &QrOptions,
    object: &S,
    url: Option<&str>,
    font: &F,
) -> Result<GrayImage, EngineError>
where
    S: FieldSource + ?Sized,
    F: Font,
{
    let payload = PayloadBuilder::new()
        .with_url(url)
        .with_max_length(options.max_payload_length)
        .build(&options.data_fields, object);
    let data = match (payload.is_empty(), url) {
        (true, Some(url)) => url,
        _ => payload.as_str(),
    };
    debug!(chars = data.chars().count(), "Encoding QR payload");

    let qr = match generate_qr(data, options.box_size(), options.border()) {
        Ok(qr) => qr,
        Err(e) => match url {
            Some(url) if url != data => {
                warn!(error = %e, "QR payload rejected, encoding page URL only");
                generate_qr(url, options.box_size(), options.border())?
            }
            _ => return Err(e),
        },
    };

    Ok(compose(qr, options, object, font))
}

/// [`render_panel`] serialized as a PNG data URI.
pub fn render_data_uri<S, F>(
    options: &QrOptions,
    object: &S,
    url: Option<&str>,
    font: &F,
) -> Result<String, EngineError>
where
    S: FieldSource + ?Sized,
    F: Font,
{
    let panel = render_panel(options, object, url, font)?;
    to_png_data_uri(&panel)
}
