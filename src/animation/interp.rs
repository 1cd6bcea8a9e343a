use crate::animation::ease::Ease;
use crate::foundation::core::FrameIndex;
use crate::frame::transform::FrameTransform;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for FrameTransform {
    /// Translation and scale interpolate linearly. Stroke follows the
    /// on-screen weight `stroke_width * scale`, so outlines keep a constant
    /// visual thickness through the whole zoom.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t <= 0.0 {
            return *a;
        }
        if t >= 1.0 {
            return *b;
        }
        let scale = <f64 as Lerp>::lerp(&a.scale, &b.scale, t);
        let weight = <f64 as Lerp>::lerp(&(a.stroke_width * a.scale), &(b.stroke_width * b.scale), t);
        Self {
            translate_x: <f64 as Lerp>::lerp(&a.translate_x, &b.translate_x, t),
            translate_y: <f64 as Lerp>::lerp(&a.translate_y, &b.translate_y, t),
            scale,
            stroke_width: weight / scale,
        }
    }
}

/// Eases the displayed transform toward the latest framing target.
///
/// The framer is stateless; this is the only place that remembers the
/// previous transform. Retargeting mid-flight starts a new segment from the
/// currently displayed value, so the picture never jumps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformInterpolator {
    from: FrameTransform,
    to: FrameTransform,
    start: FrameIndex,
    duration: u64,
    ease: Ease,
}

impl TransformInterpolator {
    /// Settled at `initial`; later segments last `duration` frames.
    pub fn new(initial: FrameTransform, duration: u64, ease: Ease) -> Self {
        Self {
            from: initial,
            to: initial,
            start: FrameIndex(0),
            duration,
            ease,
        }
    }

    pub fn target(&self) -> FrameTransform {
        self.to
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Start easing toward `target` from whatever is displayed at `now`.
    pub fn retarget(&mut self, target: FrameTransform, now: FrameIndex) {
        if target == self.to {
            return;
        }
        let current = self.sample(now);
        tracing::trace!(from = ?current, to = ?target, frame = now.0, "retarget");
        self.from = current;
        self.to = target;
        self.start = now;
    }

    /// Snap to `target` immediately.
    pub fn jump_to(&mut self, target: FrameTransform) {
        self.from = target;
        self.to = target;
    }

    pub fn progress(&self, now: FrameIndex) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        (now.since(self.start) as f64 / self.duration as f64).min(1.0)
    }

    pub fn sample(&self, now: FrameIndex) -> FrameTransform {
        let t = self.progress(now);
        self.ease.sample(&self.from, &self.to, t)
    }

    pub fn is_settled(&self, now: FrameIndex) -> bool {
        self.from == self.to || self.progress(now) >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
