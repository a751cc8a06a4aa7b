//! Settings sanity checks.
//!
//! Problems are reported as warnings; rendering continues, with symbol
//! dimensions clamped to their supported ranges.

use qr_payload::DEFAULT_MAX_LENGTH;

use super::defaults::{QR_BORDER_MAX, QR_BOX_SIZE_MAX, QR_BOX_SIZE_MIN};
use super::options::QrOptions;
use super::settings::PluginSettings;
use crate::kind::ObjectKind;

/// Validate settings, returning human-readable warnings.
pub fn validate(settings: &PluginSettings) -> Vec<String> {
    let mut warnings = Vec::new();

    for page in &settings.pages {
        if page.parse::<ObjectKind>().is_err() {
            warnings.push(format!("pages: unknown object kind '{page}'"));
        }
    }

    check_options("defaults", &settings.defaults, &mut warnings);
    for kind in ObjectKind::ALL {
        if settings.override_for(kind).is_some() {
            check_options(kind.key(), &settings.options_for(kind), &mut warnings);
        }
    }

    warnings
}

fn check_options(scope: &str, options: &QrOptions, warnings: &mut Vec<String>) {
    if let Err(e) = validate_range(
        u64::from(options.qr_box_size),
        u64::from(QR_BOX_SIZE_MIN),
        u64::from(QR_BOX_SIZE_MAX),
    ) {
        warnings.push(format!("{scope}.qr_box_size: {e}"));
    }
    if let Err(e) = validate_range(u64::from(options.qr_border), 0, u64::from(QR_BORDER_MAX)) {
        warnings.push(format!("{scope}.qr_border: {e}"));
    }
    if let Err(e) = validate_range(options.max_payload_length as u64, 1, DEFAULT_MAX_LENGTH as u64) {
        warnings.push(format!("{scope}.max_payload_length: {e}"));
    }
    if options.data_fields.is_empty() {
        warnings.push(format!("{scope}.data_fields: empty, QR will encode the page URL only"));
    }
    if options.font.is_empty() {
        warnings.push(format!("{scope}.font: empty, built-in font will be used"));
    }
}

fn validate_range(value: u64, min: u64, max: u64) -> Result<(), String> {
    if !(min..=max).contains(&value) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_clean() {
        assert!(validate(&PluginSettings::default()).is_empty());
    }

    #[test]
    fn reports_unknown_pages_and_bad_ranges() {
        let settings = PluginSettings::from_json_str(
            r#"{
                "pages": ["device", "interface"],
                "qr_box_size": 0,
                "rack": { "max_payload_length": 9000, "data_fields": [] }
            }"#,
        )
        .unwrap();
        let warnings = validate(&settings);
        assert!(warnings.iter().any(|w| w.contains("'interface'")));
        assert!(warnings.iter().any(|w| w.starts_with("defaults.qr_box_size")));
        assert!(warnings.iter().any(|w| w.starts_with("rack.max_payload_length")));
        assert!(warnings.iter().any(|w| w.starts_with("rack.data_fields")));
        assert!(!warnings.iter().any(|w| w.starts_with("device.")));
    }
}
