use crate::foundation::error::{ChoroplethError, ChoroplethResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Zero-based animation frame counter.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Frames elapsed since `earlier`, saturating at zero.
    pub fn since(self, earlier: FrameIndex) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Visible drawing area in device units.
///
/// The outer frame is always `(0, 0, width, height)`; zooming only moves the
/// content inside it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ChoroplethResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ChoroplethError::validation("viewport size must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ChoroplethError::validation(format!(
                "viewport size must be > 0 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Pixel dimensions for rasterization, rounded up and at least 1x1.
    pub fn pixel_size(self) -> (u32, u32) {
        fn to_px(v: f64) -> u32 {
            v.ceil().clamp(1.0, f64::from(u32::MAX)) as u32
        }
        (to_px(self.width), to_px(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
