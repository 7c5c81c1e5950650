use super::*;

#[test]
fn partial_json_keeps_defaults() {
    let s = TableStyle::from_json_str(r#"{ "guide": [255, 0, 0, 255] }"#).unwrap();
    assert_eq!(s.guide, [255, 0, 0, 255]);
    assert_eq!(s.background, TableStyle::default().background);
    assert_eq!(s.frame, [255, 255, 255, 255]);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = TableStyle::from_json_str(r#"{ "glow": [1, 2, 3, 4] }"#).unwrap_err();
    assert!(matches!(err, TableError::Serde(_)));
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = TableStyle::from_json_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, TableError::Validation(_)));
}

#[test]
fn ring_stops_are_a_soft_light_dark_band() {
    let s = TableStyle::default();
    let stops = s.ring_stops();
    let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.1, 0.45, 0.55, 0.9, 1.0]);
    assert_eq!(stops[0].color, TRANSPARENT);
    assert_eq!(stops[1].color, s.ring_light);
    assert_eq!(stops[2].color, s.ring_dark);
    assert_eq!(stops[3].color, s.ring_dark);
    assert_eq!(stops[4].color, s.ring_light);
    assert_eq!(stops[5].color, TRANSPARENT);
}

#[test]
fn style_round_trips_through_json() {
    let s = TableStyle {
        guide: [200, 10, 10, 255],
        ..TableStyle::default()
    };
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(TableStyle::from_json_str(&json).unwrap(), s);
}
