use crate::foundation::core::{Affine, Point, Vec2};
use crate::foundation::error::{ChoroplethError, ChoroplethResult};

/// Translate + uniform scale applied to the group holding every area path,
/// plus the stroke width that keeps outlines visually constant under that scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub stroke_width: f64,
}

impl FrameTransform {
    /// Full-map view: no translation, scale 1, base stroke.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        stroke_width: DEFAULT_BASE_STROKE_WIDTH,
    };

    pub fn translate(self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// `T(translate) * S(scale)`, the order SVG applies `translate(..) scale(..)`.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate()) * Affine::scale(self.scale)
    }

    /// Map a content-space point into viewport coordinates.
    pub fn apply(self, p: Point) -> Point {
        Point::new(
            self.translate_x + self.scale * p.x,
            self.translate_y + self.scale * p.y,
        )
    }

    pub fn is_finite(self) -> bool {
        self.translate_x.is_finite()
            && self.translate_y.is_finite()
            && self.scale.is_finite()
            && self.stroke_width.is_finite()
    }
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub(crate) const DEFAULT_PADDING: f64 = 0.9;
pub(crate) const DEFAULT_MIN_SCALE: f64 = 1.0;
pub(crate) const DEFAULT_MAX_SCALE: f64 = 8.0;
pub(crate) const DEFAULT_BASE_STROKE_WIDTH: f64 = 0.5;

/// Tunables for [`frame_with`](crate::frame_with).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FramerConfig {
    /// Fraction of the viewport the focused area's larger axis may fill.
    pub padding: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Stroke width at scale 1.
    pub base_stroke_width: f64,
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            base_stroke_width: DEFAULT_BASE_STROKE_WIDTH,
        }
    }
}

impl FramerConfig {
    pub fn validate(&self) -> ChoroplethResult<()> {
        if !(self.padding.is_finite() && self.padding > 0.0 && self.padding <= 1.0) {
            return Err(ChoroplethError::validation(
                "framer padding must be in (0, 1]",
            ));
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(ChoroplethError::validation("framer min_scale must be > 0"));
        }
        if !self.max_scale.is_finite() || self.min_scale > self.max_scale {
            return Err(ChoroplethError::validation(
                "framer max_scale must be finite and >= min_scale",
            ));
        }
        if !(self.base_stroke_width.is_finite() && self.base_stroke_width > 0.0) {
            return Err(ChoroplethError::validation(
                "framer base_stroke_width must be > 0",
            ));
        }
        Ok(())
    }

    /// Identity frame carrying this config's base stroke.
    pub fn identity(&self) -> FrameTransform {
        FrameTransform {
            stroke_width: self.base_stroke_width,
            ..FrameTransform::IDENTITY
        }
    }
}
