use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, GrayImage};
use image_engine::encode::PNG_DATA_URI_PREFIX;
use image_engine::{builtin_font, generate_qr};
use netbox_qr::render::{BELOW_LINE_HEIGHT, compose, ensure_data_in_image};
use netbox_qr::{ObjectKind, PluginSettings, QrOptions, render_data_uri};
use qr_payload::{FieldValue, Record, Related, build_payload};

const URL: &str = "http://h/d/1";

fn decode(uri: &str) -> DynamicImage {
    let encoded = uri
        .strip_prefix(PNG_DATA_URI_PREFIX)
        .expect("data URI prefix");
    let bytes = STANDARD.decode(encoded).expect("valid base64");
    image::load_from_memory(&bytes).expect("valid PNG")
}

fn bare_options() -> QrOptions {
    QrOptions {
        data_fields: vec!["name".into(), "serial".into(), "url".into()],
        with_text: false,
        text_below: false,
        ..QrOptions::default()
    }
}

#[test]
fn payload_example_from_device_page() {
    let device = Record::new().with("name", "sw1");
    let payload = build_payload(&bare_options().data_fields, &device, Some(URL), 4296);
    assert_eq!(payload, "sw1\r\nhttp://h/d/1");
}

#[test]
fn bare_panel_matches_qr_dimensions() {
    let font = builtin_font();
    let device = Record::new().with("name", "sw1");
    let options = bare_options();

    let uri = render_data_uri(&options, &device, Some(URL), &font).unwrap();
    let qr = generate_qr("sw1\r\nhttp://h/d/1", options.qr_box_size, options.qr_border).unwrap();

    let decoded = decode(&uri);
    assert_eq!((decoded.width(), decoded.height()), qr.dimensions());
    assert_eq!(decoded.to_luma8(), qr);
}

#[test]
fn side_label_panel_is_three_symbols_wide() {
    let font = builtin_font();
    let rack = Record::new().with("name", "R-12").with("serial", "991-22");
    let options = QrOptions {
        with_text: true,
        text_fields: vec!["name".into(), "serial".into()],
        ..bare_options()
    };

    let uri = render_data_uri(&options, &rack, Some(URL), &font).unwrap();
    let decoded = decode(&uri);
    let qr = generate_qr("R-12\r\n991-22\r\nhttp://h/d/1", options.qr_box_size, options.qr_border)
        .unwrap();
    assert_eq!(decoded.width(), qr.width() * 3);
    assert_eq!(decoded.height(), qr.height());
}

#[test]
fn bottom_label_panel_adds_line_rows() {
    let font = builtin_font();
    let rack = Record::new().with("name", "ComputeRoomRackA12");
    let options = QrOptions {
        text_below: true,
        text_below_fields: vec!["name".into()],
        data_fields: vec!["url".into()],
        ..bare_options()
    };

    let uri = render_data_uri(&options, &rack, Some(URL), &font).unwrap();
    let decoded = decode(&uri);
    let qr = generate_qr(URL, options.qr_box_size, options.qr_border).unwrap();
    assert_eq!(decoded.width(), qr.width());
    assert_eq!(decoded.height(), qr.height() + 2 * BELOW_LINE_HEIGHT);
}

#[test]
fn center_label_only_when_small_enough() {
    let font = builtin_font();
    let qr = generate_qr(URL, 4, 4).unwrap();
    let options = QrOptions {
        data_in_image: Some("name".into()),
        ..bare_options()
    };

    let mut small = qr.clone();
    let short = Record::new().with("name", "R1");
    assert!(ensure_data_in_image(&mut small, &options, &short, &font));
    assert_ne!(small, qr);

    let mut large = qr.clone();
    let long = Record::new().with("name", "a rack name far too wide for the symbol");
    assert!(!ensure_data_in_image(&mut large, &options, &long, &font));
    assert_eq!(large, qr);
}

#[test]
fn compose_without_decorations_is_identity() {
    let font = builtin_font();
    let qr: GrayImage = generate_qr(URL, 2, 4).unwrap();
    let out = compose(qr.clone(), &bare_options(), &Record::new(), &font);
    assert_eq!(out, qr);
}

#[test]
fn cable_terminations_reach_the_label() {
    let term_a = Related::new("Gi1/0/1").with_field("device", Related::new("core-sw").into());
    let term_b = Related::new("eth0").with_field("device", FieldValue::Null);
    let cable = Record::new()
        .with("label", "uplink-7")
        .with("termination_a", term_a)
        .with("termination_b", term_b)
        .with("length", 5i64)
        .with("length_unit", "m");

    let settings = PluginSettings::from_json_str(
        r#"{ "cable": { "data_fields": ["label", "length", "termination_a", "termination_b"] } }"#,
    )
    .unwrap();
    let options = settings.options_for(ObjectKind::Cable);
    let payload = build_payload(&options.data_fields, &cable, None, options.max_payload_length);
    assert_eq!(payload, "uplink-7\r\n5 m\r\ncore-sw Gi1/0/1");
}

#[test]
fn payload_length_bounded_for_any_budget() {
    let device = Record::new()
        .with("name", "edge-router-01")
        .with("serial", "FDO2233X0AB")
        .with("asset_tag", "IT-000123")
        .with("comments", "rack rear, left rail, shelf 3");
    let fields: Vec<String> = ["name", "serial", "asset_tag", "comments", "url"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    for max in URL.len() + 1..120 {
        let payload = build_payload(&fields, &device, Some(URL), max);
        assert!(payload.chars().count() <= max, "max={max}");
        assert!(payload.ends_with(URL));
    }
}
