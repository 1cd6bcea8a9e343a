use super::*;
use crate::scale::color::Color;

fn heat(count: f64) -> Color {
    Color::rgb((count * 50.0).min(255.0) as u8, 0, 0)
}

fn map() -> ChoroplethMap {
    let features = vec![
        AreaFeature::rect("a", 0.0, 0.0, 100.0, 50.0),
        AreaFeature::rect("b", 100.0, 0.0, 960.0, 500.0),
    ];
    let counts: AreaCounts = [("a", 2.0)].into_iter().collect();
    ChoroplethMap::new(
        Viewport::new(960.0, 500.0).unwrap(),
        features,
        counts,
        Box::new(PlanarPath::identity()),
        Box::new(heat),
    )
}

#[test]
fn frame_delegates_to_framer_with_path_bounds() {
    let m = map();
    let t = m.frame(Some("a"));
    assert_eq!(t.scale, 8.0);
    assert_eq!(t.translate_x, 80.0);
    assert_eq!(t.translate_y, 50.0);
    assert_eq!(m.frame(None), FrameTransform::IDENTITY);
    assert_eq!(m.frame(Some("zzz")), FrameTransform::IDENTITY);
    assert_eq!(m.bounds_of(&m.features[0]), Rect::new(0.0, 0.0, 100.0, 50.0));
}

#[test]
fn framer_config_is_honored() {
    let m = map().with_framer(FramerConfig {
        max_scale: 4.0,
        ..FramerConfig::default()
    });
    assert_eq!(m.frame(Some("a")).scale, 4.0);
}

#[test]
fn scene_uses_counts_focus_and_legend() {
    let m = map();
    let t = m.frame(Some("a"));
    let scene = m.scene(&t, Some("a"), None);
    assert_eq!(scene.areas.len(), 2);
    assert_eq!(scene.areas[0].fill, heat(2.0));
    assert_eq!(scene.areas[1].fill, heat(0.0));
    assert_eq!(scene.areas[0].stroke_width, 2.0 * t.stroke_width);
    let legend = scene.legend.expect("counts are non-empty");
    assert!((legend.height - 500.0 / 3.0).abs() < 1e-9);
}

#[test]
fn no_counts_means_no_legend() {
    let mut m = map();
    m.counts = AreaCounts::new();
    let scene = m.scene(&FrameTransform::IDENTITY, None, None);
    assert!(scene.legend.is_none());
    assert!(!m.render_svg(None).contains("legend"));
}

#[test]
fn render_svg_embeds_the_focus_frame() {
    let svg = map().render_svg(Some("a"));
    assert!(svg.contains("translate(80 50) scale(8)"));
    assert!(svg.contains(r#"viewBox="0 0 960 500""#));
}
