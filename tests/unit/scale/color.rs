use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!("#0000FF80")).unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 128));

    assert!(serde_json::from_value::<Color>(json!("#ff00")).is_err());
    assert!(serde_json::from_value::<Color>(json!("#gg0000")).is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 1.0, "g": 0.5, "b": 0.0})).unwrap();
    assert_eq!(c, Color::rgb(255, 128, 0));

    let c: Color = serde_json::from_value(json!([0.0, 0.0, 1.0, 0.0])).unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 0));

    assert!(serde_json::from_value::<Color>(json!([0.0, 1.0])).is_err());
}

#[test]
fn parses_hsla_object() {
    let c: Color = serde_json::from_value(json!({"h": 120.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c, Color::rgb(0, 255, 0));
}

#[test]
fn serializes_as_hex() {
    assert_eq!(serde_json::to_value(Color::rgb(8, 16, 255)).unwrap(), json!("#0810ff"));
    assert_eq!(Color::rgba(0, 0, 0, 0x40).to_string(), "#00000040");
}

#[test]
fn lerp_hits_endpoints_and_clamps() {
    let a = Color::rgb(0, 0, 0);
    let b = Color::rgb(200, 100, 50);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Color::rgb(100, 50, 25));
    assert_eq!(a.lerp(b, 7.0), b);
}
