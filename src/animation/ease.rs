use crate::animation::interp::Lerp;

/// Timing curve of a zoom transition.
///
/// Serialized by variant name (`"Linear"`, `"InOutCubic"`, ...), the form
/// `MapConfig.animation.ease` expects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    /// Slow start and slow landing on the focused area.
    #[default]
    InOutCubic,
}

impl Ease {
    /// Eased progress for linear progress `t`; `t` is clamped to `[0, 1]` and
    /// both endpoints map to themselves exactly.
    pub fn curve(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => ease_in(t, 2),
            Self::OutQuad => ease_out(t, 2),
            Self::InOutQuad => ease_in_out(t, 2),
            Self::InCubic => ease_in(t, 3),
            Self::OutCubic => ease_out(t, 3),
            Self::InOutCubic => ease_in_out(t, 3),
        }
    }

    /// Value between `from` and `to` at linear progress `t`.
    pub fn sample<T: Lerp>(self, from: &T, to: &T, t: f64) -> T {
        T::lerp(from, to, self.curve(t))
    }
}

fn ease_in(t: f64, power: i32) -> f64 {
    t.powi(power)
}

fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

// Two mirrored halves meeting at (0.5, 0.5).
fn ease_in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        ease_in(2.0 * t, power) / 2.0
    } else {
        1.0 - ease_in(2.0 - 2.0 * t, power) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
