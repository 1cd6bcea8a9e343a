use crate::foundation::error::{ChoroplethError, ChoroplethResult};
use crate::geo::counts::AreaCounts;
use crate::scale::color::Color;

/// Maps an area's count to its fill color.
///
/// Must be total over non-negative counts, including `0` (the value used for
/// areas missing from [`AreaCounts`]).
pub trait ColorScale {
    fn color_of(&self, count: f64) -> Color;
}

impl<F> ColorScale for F
where
    F: Fn(f64) -> Color,
{
    fn color_of(&self, count: f64) -> Color {
        self(count)
    }
}

fn validate_domain(min: f64, max: f64) -> ChoroplethResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ChoroplethError::validation("color scale domain must be finite"));
    }
    if min > max {
        return Err(ChoroplethError::validation(
            "color scale domain min must be <= max",
        ));
    }
    Ok(())
}

/// Position of `v` within `[min, max]`, clamped to `[0, 1]`.
///
/// A zero-width domain and NaN both map to `0`.
fn normalize(v: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 || v.is_nan() {
        return 0.0;
    }
    ((v - min) / span).clamp(0.0, 1.0)
}

/// Continuous ramp: piecewise-linear interpolation through evenly spaced stops.
#[derive(Clone, Debug, PartialEq)]
pub struct SequentialScale {
    min: f64,
    max: f64,
    stops: Vec<Color>,
}

impl SequentialScale {
    pub fn new(min: f64, max: f64, stops: Vec<Color>) -> ChoroplethResult<Self> {
        validate_domain(min, max)?;
        if stops.is_empty() {
            return Err(ChoroplethError::validation(
                "sequential scale needs at least one color stop",
            ));
        }
        Ok(Self { min, max, stops })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl ColorScale for SequentialScale {
    fn color_of(&self, count: f64) -> Color {
        let t = normalize(count, self.min, self.max);
        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        self.stops[i].lerp(self.stops[i + 1], pos - i as f64)
    }
}

/// Discrete scale: equal-width buckets over the domain, one color each.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantizeScale {
    min: f64,
    max: f64,
    colors: Vec<Color>,
}

impl QuantizeScale {
    pub fn new(min: f64, max: f64, colors: Vec<Color>) -> ChoroplethResult<Self> {
        validate_domain(min, max)?;
        if colors.is_empty() {
            return Err(ChoroplethError::validation(
                "quantize scale needs at least one color",
            ));
        }
        Ok(Self { min, max, colors })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl ColorScale for QuantizeScale {
    fn color_of(&self, count: f64) -> Color {
        let n = self.colors.len();
        let t = normalize(count, self.min, self.max);
        let i = ((t * n as f64).floor() as usize).min(n - 1);
        self.colors[i]
    }
}

fn default_ramp() -> Vec<Color> {
    vec![Color::rgb(0xf7, 0xfb, 0xff), Color::rgb(0x08, 0x30, 0x6b)]
}

/// Serializable description of the color scale; `max: None` is resolved from
/// the largest count at build time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorScaleConfig {
    Sequential {
        #[serde(default)]
        min: f64,
        #[serde(default)]
        max: Option<f64>,
        #[serde(default = "default_ramp")]
        colors: Vec<Color>,
    },
    Quantize {
        #[serde(default)]
        min: f64,
        #[serde(default)]
        max: Option<f64>,
        colors: Vec<Color>,
    },
}

impl Default for ColorScaleConfig {
    fn default() -> Self {
        Self::Sequential {
            min: 0.0,
            max: None,
            colors: default_ramp(),
        }
    }
}

impl ColorScaleConfig {
    pub fn build(
        &self,
        counts: &AreaCounts,
    ) -> ChoroplethResult<Box<dyn ColorScale + Send + Sync>> {
        let resolve_max = |min: f64, max: Option<f64>| {
            max.unwrap_or_else(|| counts.max().unwrap_or(min).max(min))
        };
        Ok(match self {
            Self::Sequential { min, max, colors } => Box::new(SequentialScale::new(
                *min,
                resolve_max(*min, *max),
                colors.clone(),
            )?),
            Self::Quantize { min, max, colors } => Box::new(QuantizeScale::new(
                *min,
                resolve_max(*min, *max),
                colors.clone(),
            )?),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/ramp.rs"]
mod tests;
