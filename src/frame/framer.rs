use crate::foundation::core::{Rect, Viewport};
use crate::frame::transform::{FrameTransform, FramerConfig};
use crate::geo::feature::AreaFeature;

/// Compute the transform that frames `focus` inside `viewport`.
///
/// Uses [`FramerConfig::default`]: 10% padding, scale clamped to `[1, 8]`,
/// stroke `0.5 / scale`. See [`frame_with`] for the degraded cases.
pub fn frame<F>(
    viewport: Viewport,
    focus: Option<&str>,
    features: &[AreaFeature],
    bounds_of: F,
) -> FrameTransform
where
    F: Fn(&AreaFeature) -> Rect,
{
    frame_with(&FramerConfig::default(), viewport, focus, features, bounds_of)
}

/// [`frame`] with explicit framing parameters.
///
/// Returns the identity frame when `focus` is `None` or empty, or when no
/// feature carries that id. With duplicate ids the first match in `features`
/// wins. A config that fails [`FramerConfig::validate`] also yields
/// [`FrameTransform::IDENTITY`].
#[tracing::instrument(level = "trace", skip(config, features, bounds_of))]
pub fn frame_with<F>(
    config: &FramerConfig,
    viewport: Viewport,
    focus: Option<&str>,
    features: &[AreaFeature],
    bounds_of: F,
) -> FrameTransform
where
    F: Fn(&AreaFeature) -> Rect,
{
    if !config_is_usable(config) {
        return FrameTransform::IDENTITY;
    }
    let Some(target) = focus.filter(|id| !id.is_empty()) else {
        return config.identity();
    };
    let Some(feature) = find_focus(features, target) else {
        tracing::debug!(focus = target, "focus id not found; using identity frame");
        return config.identity();
    };
    frame_bounds_with(config, viewport, bounds_of(feature))
}

/// Frame a raw bounding box with the default parameters.
pub fn frame_bounds(viewport: Viewport, bounds: Rect) -> FrameTransform {
    frame_bounds_with(&FramerConfig::default(), viewport, bounds)
}

/// Frame a raw bounding box.
///
/// - Inverted rects are normalized first.
/// - A zero-area box (point geometry) zooms to `max_scale`, centered on the point.
/// - Non-finite bounds or an unusable viewport yield the identity frame.
/// - An invalid `config` yields [`FrameTransform::IDENTITY`].
pub fn frame_bounds_with(config: &FramerConfig, viewport: Viewport, bounds: Rect) -> FrameTransform {
    if !config_is_usable(config) {
        return FrameTransform::IDENTITY;
    }
    if !viewport_is_usable(viewport) {
        tracing::warn!(?viewport, "unusable viewport; using identity frame");
        return config.identity();
    }
    if !rect_is_finite(bounds) {
        tracing::warn!(?bounds, "non-finite focus bounds; using identity frame");
        return config.identity();
    }

    let bounds = bounds.abs();
    let extent = (bounds.width() / viewport.width).max(bounds.height() / viewport.height);
    let scale = if extent > 0.0 {
        (config.padding / extent).clamp(config.min_scale, config.max_scale)
    } else {
        config.max_scale
    };

    let center = bounds.center();
    let view_center = viewport.center();
    let out = FrameTransform {
        translate_x: view_center.x - scale * center.x,
        translate_y: view_center.y - scale * center.y,
        scale,
        stroke_width: config.base_stroke_width / scale,
    };

    // Coordinates near f64::MAX can still overflow in the center/translate math.
    if !out.is_finite() {
        tracing::warn!(?bounds, "framing overflowed; using identity frame");
        return config.identity();
    }
    tracing::debug!(
        scale = out.scale,
        tx = out.translate_x,
        ty = out.translate_y,
        "framed focus bounds"
    );
    out
}

pub(crate) fn find_focus<'a>(features: &'a [AreaFeature], id: &str) -> Option<&'a AreaFeature> {
    features.iter().find(|f| f.id.as_deref() == Some(id))
}

fn config_is_usable(config: &FramerConfig) -> bool {
    match config.validate() {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, "invalid framer config; using identity frame");
            false
        }
    }
}

fn rect_is_finite(r: Rect) -> bool {
    r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()
}

fn viewport_is_usable(v: Viewport) -> bool {
    v.width.is_finite() && v.height.is_finite() && v.width > 0.0 && v.height > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/frame/framer.rs"]
mod tests;
