use super::*;
use serde_json::json;

#[test]
fn minimal_config_fills_defaults() {
    let cfg: MapConfig = serde_json::from_value(json!({
        "width": 960,
        "height": 500,
        "features": "areas.geojson"
    }))
    .unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.framer, FramerConfig::default());
    assert_eq!(cfg.style, MapStyle::default());
    assert_eq!(cfg.projection, ProjectionConfig::default());
    assert_eq!(cfg.animation.frames, 30);
    assert_eq!(cfg.focus, None);
    assert_eq!(cfg.viewport().unwrap(), Viewport::new(960.0, 500.0).unwrap());
}

#[test]
fn nested_sections_parse() {
    let cfg: MapConfig = serde_json::from_value(json!({
        "width": 800,
        "height": 600,
        "features": "a.geojson",
        "counts": "c.json",
        "focus": "north",
        "id_property": "code",
        "projection": {"kind": "fit", "padding": 0.9, "flip_y": true},
        "style": {"focus_stroke": "#00ff00", "legend_stops": 4},
        "framer": {"max_scale": 12},
        "color_scale": {"kind": "quantize", "colors": ["#ffffff", "#000000"]},
        "animation": {"frames": 12, "ease": "Linear"}
    }))
    .unwrap();
    cfg.validate().unwrap();
    assert_eq!(
        cfg.projection,
        ProjectionConfig::Fit {
            padding: 0.9,
            flip_y: true
        }
    );
    assert_eq!(cfg.style.legend_stops, 4);
    assert_eq!(cfg.framer.max_scale, 12.0);
    assert_eq!(cfg.animation.ease, Ease::Linear);
}

#[test]
fn invalid_values_are_rejected() {
    let base = json!({"width": 0, "height": 500, "features": "a.geojson"});
    let cfg: MapConfig = serde_json::from_value(base).unwrap();
    assert!(cfg.validate().is_err());

    let cfg: MapConfig = serde_json::from_value(json!({
        "width": 10, "height": 10, "features": "a", "framer": {"min_scale": 4, "max_scale": 2}
    }))
    .unwrap();
    assert!(cfg.validate().is_err());

    assert!(
        serde_json::from_value::<MapConfig>(json!({
            "width": 10, "height": 10, "features": "a", "zoom": 3
        }))
        .is_err()
    );
}

#[test]
fn load_resolves_relative_paths() {
    let dir = std::env::temp_dir().join(format!("choropleth-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("map.json");
    std::fs::write(
        &path,
        r#"{"width": 100, "height": 80, "features": "areas.geojson", "counts": "/abs/counts.json"}"#,
    )
    .unwrap();

    let cfg = MapConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg.features, dir.join("areas.geojson"));
    assert_eq!(cfg.counts, Some(PathBuf::from("/abs/counts.json")));

    std::fs::write(&path, "{").unwrap();
    assert!(matches!(
        MapConfig::load_from_file(&path),
        Err(ChoroplethError::Serde(_))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
