use super::*;

#[test]
fn viewport_rejects_non_positive_and_non_finite_sizes() {
    assert!(Viewport::new(0.0, 10.0).is_err());
    assert!(Viewport::new(10.0, -1.0).is_err());
    assert!(Viewport::new(f64::NAN, 10.0).is_err());
    assert!(Viewport::new(10.0, f64::INFINITY).is_err());
    assert!(Viewport::new(960.0, 500.0).is_ok());
}

#[test]
fn viewport_center_and_rect() {
    let vp = Viewport::new(800.0, 600.0).unwrap();
    assert_eq!(vp.center(), Point::new(400.0, 300.0));
    assert_eq!(vp.rect(), Rect::new(0.0, 0.0, 800.0, 600.0));
}

#[test]
fn viewport_pixel_size_rounds_up() {
    let vp = Viewport::new(10.2, 0.5).unwrap();
    assert_eq!(vp.pixel_size(), (11, 1));
}

#[test]
fn frame_index_since_saturates() {
    assert_eq!(FrameIndex(10).since(FrameIndex(4)), 6);
    assert_eq!(FrameIndex(2).since(FrameIndex(4)), 0);
}
