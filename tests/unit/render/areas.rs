use super::*;
use crate::geo::feature::{Geometry, Position};
use crate::geo::path::PlanarPath;

fn shade(count: f64) -> Color {
    Color::rgb((count * 10.0).min(255.0) as u8, 0, 0)
}

fn features() -> Vec<AreaFeature> {
    vec![
        AreaFeature::rect("a", 0.0, 0.0, 10.0, 10.0),
        AreaFeature::rect("b", 10.0, 0.0, 20.0, 10.0),
        AreaFeature::anonymous(Geometry::Point(Position::new(5.0, 5.0))),
        AreaFeature::rect("c", 20.0, 0.0, 30.0, 10.0),
    ]
}

fn transform() -> FrameTransform {
    FrameTransform {
        translate_x: 1.0,
        translate_y: 2.0,
        scale: 4.0,
        stroke_width: 0.125,
    }
}

#[test]
fn one_path_per_feature_in_input_order() {
    let style = MapStyle::default();
    let renderer = AreaRenderer {
        style: &style,
        paths: &PlanarPath::identity(),
        colors: &shade,
    };
    let out = renderer.render(&features(), &AreaCounts::new(), &transform(), None, None);
    assert_eq!(out.len(), 4);
    for (i, area) in out.iter().enumerate() {
        assert_eq!(area.key, i);
    }
    assert_eq!(out[1].id.as_deref(), Some("b"));
    assert_eq!(out[2].id, None);
}

#[test]
fn fill_comes_from_count_and_missing_counts_are_zero() {
    let style = MapStyle::default();
    let renderer = AreaRenderer {
        style: &style,
        paths: &PlanarPath::identity(),
        colors: &shade,
    };
    let mut counts = AreaCounts::new();
    counts.insert("a", 3.0).unwrap();
    let out = renderer.render(&features(), &counts, &transform(), None, None);
    assert_eq!(out[0].count, 3.0);
    assert_eq!(out[0].fill, shade(3.0));
    assert_eq!(out[1].count, 0.0);
    assert_eq!(out[1].fill, shade(0.0));
    assert_eq!(out[2].fill, shade(0.0));
}

#[test]
fn focused_area_gets_highlight_and_double_stroke() {
    let style = MapStyle::default();
    let renderer = AreaRenderer {
        style: &style,
        paths: &PlanarPath::identity(),
        colors: &shade,
    };
    let out = renderer.render(
        &features(),
        &AreaCounts::new(),
        &transform(),
        Some("b"),
        None,
    );
    assert!(out[1].focused);
    assert_eq!(out[1].stroke, style.focus_stroke);
    assert_eq!(out[1].stroke_width, 0.25);

    assert!(!out[0].focused);
    assert_eq!(out[0].stroke, style.default_stroke);
    assert_eq!(out[0].stroke_width, 0.125);
}

#[test]
fn hover_applies_only_when_not_focused() {
    let style = MapStyle::default();
    let renderer = AreaRenderer {
        style: &style,
        paths: &PlanarPath::identity(),
        colors: &shade,
    };
    let out = renderer.render(
        &features(),
        &AreaCounts::new(),
        &transform(),
        Some("a"),
        Some("c"),
    );
    assert_eq!(out[3].stroke, style.hover_stroke);
    assert_eq!(out[3].stroke_width, 0.125);

    let out = renderer.render(
        &features(),
        &AreaCounts::new(),
        &transform(),
        Some("a"),
        Some("a"),
    );
    assert_eq!(out[0].stroke, style.focus_stroke);
}

#[test]
fn anonymous_features_are_never_focused() {
    let style = MapStyle::default();
    let renderer = AreaRenderer {
        style: &style,
        paths: &PlanarPath::identity(),
        colors: &shade,
    };
    let out = renderer.render(&features(), &AreaCounts::new(), &transform(), None, None);
    assert!(out.iter().all(|a| !a.focused));
}

#[test]
fn empty_focus_and_hover_ids_match_nothing() {
    let style = MapStyle::default();
    let renderer = AreaRenderer {
        style: &style,
        paths: &PlanarPath::identity(),
        colors: &shade,
    };
    let blank = vec![AreaFeature::rect("", 0.0, 0.0, 10.0, 10.0)];
    let out = renderer.render(&blank, &AreaCounts::new(), &transform(), Some(""), Some(""));
    assert!(!out[0].focused);
    assert_eq!(out[0].stroke, style.default_stroke);
    assert_eq!(out[0].stroke_width, transform().stroke_width);
}
