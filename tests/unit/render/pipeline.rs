use super::*;
use crate::foundation::core::Viewport;
use crate::foundation::error::ChoroplethError;
use crate::geo::counts::AreaCounts;
use crate::geo::feature::AreaFeature;
use crate::geo::path::PlanarPath;
use crate::scale::color::Color;

fn small_map() -> ChoroplethMap {
    let features = vec![
        AreaFeature::rect("left", 0.0, 0.0, 20.0, 40.0),
        AreaFeature::rect("right", 20.0, 0.0, 40.0, 40.0),
    ];
    ChoroplethMap::new(
        Viewport::new(40.0, 40.0).unwrap(),
        features,
        AreaCounts::new(),
        Box::new(PlanarPath::identity()),
        Box::new(|_: f64| Color::rgb(0, 0, 255)),
    )
}

fn zoom_in(frames: u64) -> ZoomSequence {
    ZoomSequence {
        from: None,
        to: Some("left".to_owned()),
        frames,
        ease: Ease::InOutCubic,
    }
}

#[test]
fn transforms_run_from_current_to_target_frame() {
    let map = small_map();
    let seq = zoom_in(8);
    let ts = seq.transforms(&map);
    assert_eq!(ts.len(), 9);
    assert_eq!(ts[0], FrameTransform::IDENTITY);
    assert_eq!(ts[8], map.frame(Some("left")));
    for pair in ts.windows(2) {
        assert!(pair[1].scale >= pair[0].scale);
    }
}

#[test]
fn zero_frame_sequence_is_just_the_target() {
    let map = small_map();
    let ts = zoom_in(0).transforms(&map);
    assert_eq!(ts, vec![map.frame(Some("left"))]);
}

#[test]
fn svgs_highlight_the_destination() {
    let map = small_map();
    let svgs = zoom_in(2).svgs(&map);
    assert_eq!(svgs.len(), 3);
    let focus = map.style.focus_stroke.to_rgb_hex();
    assert!(svgs.iter().all(|s| s.contains(&focus)));
}

#[test]
fn render_produces_ordered_viewport_sized_frames() {
    let map = small_map();
    let frames = zoom_in(3)
        .render(&map, &SvgRasterizer::without_fonts())
        .unwrap();
    assert_eq!(frames.len(), 4);
    assert!(frames.iter().all(|f| f.dimensions() == (40, 40)));
    // Settled on "left": its center pixel is filled.
    assert_eq!(frames[3].get_pixel(20, 20).0[2], 255);
}

#[test]
fn settled_png_matches_viewport() {
    let map = small_map();
    let img = render_png(&map, &SvgRasterizer::without_fonts(), None).unwrap();
    assert_eq!(img.dimensions(), (40, 40));
    assert_eq!(img.get_pixel(5, 20).0, [0, 0, 255, 255]);
}

#[test]
fn frame_files_are_zero_padded() {
    assert_eq!(frame_file_name(0), "frame_00000.png");
    assert_eq!(frame_file_name(123), "frame_00123.png");
}

#[test]
fn write_pngs_creates_one_file_per_frame() {
    let dir = std::env::temp_dir().join(format!("choropleth-seq-{}", std::process::id()));
    let paths = zoom_in(1)
        .write_pngs(&small_map(), &SvgRasterizer::without_fonts(), &dir)
        .unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.exists()));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn oversized_viewport_reports_the_rasterizer_error_unchanged() {
    let map = ChoroplethMap::new(
        Viewport::new(20_000.0, 10.0).unwrap(),
        vec![AreaFeature::rect("a", 0.0, 0.0, 10.0, 10.0)],
        AreaCounts::new(),
        Box::new(PlanarPath::identity()),
        Box::new(|_: f64| Color::BLACK),
    );
    let err = render_png(&map, &SvgRasterizer::without_fonts(), None).unwrap_err();
    match err {
        ChoroplethError::Render(msg) => assert!(msg.starts_with("raster size 20000x10"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}
