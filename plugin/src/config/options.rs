//! Per-render QR options and their per-kind overrides.

use serde::{Deserialize, Deserializer};

use super::defaults::{
    DEFAULT_DATA_FIELDS, DEFAULT_FONT, DEFAULT_MAX_PAYLOAD_LENGTH, DEFAULT_QR_BORDER,
    DEFAULT_QR_BOX_SIZE, DEFAULT_TEXT_BELOW_FIELDS, DEFAULT_TEXT_FIELDS, QR_BORDER_MAX,
    QR_BOX_SIZE_MAX, QR_BOX_SIZE_MIN, strings,
};

/// Options controlling one QR panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    /// Fields encoded into the QR symbol, in order.
    pub data_fields: Vec<String>,
    /// Field painted over the centre of the symbol.
    pub data_in_image: Option<String>,
    /// Fields printed beside the symbol.
    pub text_fields: Vec<String>,
    /// Fields printed below the symbol.
    pub text_below_fields: Vec<String>,
    /// Font name, resolved to `<font_dir>/<font>.ttf`.
    pub font: String,
    pub with_text: bool,
    pub text_below: bool,
    pub qr_box_size: u32,
    pub qr_border: u32,
    pub max_payload_length: usize,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            data_fields: strings(DEFAULT_DATA_FIELDS),
            data_in_image: None,
            text_fields: strings(DEFAULT_TEXT_FIELDS),
            text_below_fields: strings(DEFAULT_TEXT_BELOW_FIELDS),
            font: DEFAULT_FONT.into(),
            with_text: true,
            text_below: false,
            qr_box_size: DEFAULT_QR_BOX_SIZE,
            qr_border: DEFAULT_QR_BORDER,
            max_payload_length: DEFAULT_MAX_PAYLOAD_LENGTH,
        }
    }
}

/// Per-kind override. Every present key replaces the default wholesale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QrOptionsOverride {
    pub data_fields: Option<Vec<String>>,
    /// Absent keeps the default; `null` clears it.
    #[serde(deserialize_with = "present")]
    pub data_in_image: Option<Option<String>>,
    pub text_fields: Option<Vec<String>>,
    pub text_below_fields: Option<Vec<String>>,
    pub font: Option<String>,
    pub with_text: Option<bool>,
    pub text_below: Option<bool>,
    pub qr_box_size: Option<u32>,
    pub qr_border: Option<u32>,
    pub max_payload_length: Option<usize>,
}

/// Marks a key as present, so an explicit `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl QrOptions {
    /// `qr_box_size` clamped to the renderable range.
    pub fn box_size(&self) -> u32 {
        self.qr_box_size.clamp(QR_BOX_SIZE_MIN, QR_BOX_SIZE_MAX)
    }

    /// `qr_border` clamped to the renderable range.
    pub fn border(&self) -> u32 {
        self.qr_border.min(QR_BORDER_MAX)
    }

    /// Apply an override on top of these options.
    pub fn merged(&self, over: &QrOptionsOverride) -> QrOptions {
        QrOptions {
            data_fields: over.data_fields.clone().unwrap_or_else(|| self.data_fields.clone()),
            data_in_image: over
                .data_in_image
                .clone()
                .unwrap_or_else(|| self.data_in_image.clone()),
            text_fields: over.text_fields.clone().unwrap_or_else(|| self.text_fields.clone()),
            text_below_fields: over
                .text_below_fields
                .clone()
                .unwrap_or_else(|| self.text_below_fields.clone()),
            font: over.font.clone().unwrap_or_else(|| self.font.clone()),
            with_text: over.with_text.unwrap_or(self.with_text),
            text_below: over.text_below.unwrap_or(self.text_below),
            qr_box_size: over.qr_box_size.unwrap_or(self.qr_box_size),
            qr_border: over.qr_border.unwrap_or(self.qr_border),
            max_payload_length: over.max_payload_length.unwrap_or(self.max_payload_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_replaces_lists_wholesale() {
        let defaults = QrOptions::default();
        let over: QrOptionsOverride =
            serde_json::from_str(r#"{"text_fields": ["label"], "with_text": false}"#).unwrap();
        let merged = defaults.merged(&over);
        assert_eq!(merged.text_fields, vec!["label".to_string()]);
        assert!(!merged.with_text);
        assert_eq!(merged.data_fields, defaults.data_fields);
        assert_eq!(merged.font, defaults.font);
    }

    #[test]
    fn override_can_clear_center_label() {
        let defaults = QrOptions {
            data_in_image: Some("name".into()),
            ..QrOptions::default()
        };
        let over: QrOptionsOverride = serde_json::from_str(r#"{"data_in_image": null}"#).unwrap();
        assert_eq!(over.data_in_image, Some(None));
        assert_eq!(defaults.merged(&over).data_in_image, None);

        let absent: QrOptionsOverride = serde_json::from_str(r#"{"font": "Other"}"#).unwrap();
        assert_eq!(absent.data_in_image, None);
        assert_eq!(defaults.merged(&absent).data_in_image.as_deref(), Some("name"));

        let replaced: QrOptionsOverride =
            serde_json::from_str(r#"{"data_in_image": "asset_tag"}"#).unwrap();
        assert_eq!(defaults.merged(&replaced).data_in_image.as_deref(), Some("asset_tag"));
    }

    #[test]
    fn symbol_dimensions_are_clamped() {
        let options: QrOptions =
            serde_json::from_str(r#"{"qr_box_size": 0, "qr_border": 3000000000}"#).unwrap();
        assert_eq!(options.box_size(), QR_BOX_SIZE_MIN);
        assert_eq!(options.border(), QR_BORDER_MAX);

        let options = QrOptions {
            qr_box_size: u32::MAX,
            ..QrOptions::default()
        };
        assert_eq!(options.box_size(), QR_BOX_SIZE_MAX);
        assert_eq!(QrOptions::default().box_size(), DEFAULT_QR_BOX_SIZE);
        assert_eq!(QrOptions::default().border(), DEFAULT_QR_BORDER);
    }

    #[test]
    fn empty_override_is_identity() {
        let defaults = QrOptions::default();
        assert_eq!(defaults.merged(&QrOptionsOverride::default()), defaults);
    }
}
