use crate::foundation::core::{Point, Viewport};
use crate::geo::counts::AreaCounts;
use crate::render::style::MapStyle;
use crate::scale::color::Color;
use crate::scale::ramp::ColorScale;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendStop {
    /// `0` at the bottom of the bar (smallest count), `1` at the top.
    pub offset: f64,
    pub value: f64,
    pub color: Color,
}

/// Vertical gradient bar describing the color scale, in viewport coordinates.
///
/// Not affected by the zoom transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub min: f64,
    pub max: f64,
    pub stops: Vec<LegendStop>,
}

pub struct LegendRenderer<'a, C: ?Sized> {
    pub style: &'a MapStyle,
    pub colors: &'a C,
}

impl<C> LegendRenderer<'_, C>
where
    C: ColorScale + ?Sized,
{
    /// `None` when there are no counts to describe.
    pub fn render(&self, viewport: Viewport, counts: &AreaCounts) -> Option<Legend> {
        let max = counts.max()?;
        let min = 0.0;
        let n = self.style.legend_stops.max(2);
        let stops = (0..n)
            .map(|i| {
                let offset = i as f64 / (n - 1) as f64;
                let value = min + (max - min) * offset;
                LegendStop {
                    offset,
                    value,
                    color: self.colors.color_of(value),
                }
            })
            .collect();

        let [left, bottom] = self.style.legend_offset;
        let height = viewport.height / 3.0;
        Some(Legend {
            origin: Point::new(left, viewport.height - height - bottom),
            width: self.style.legend_bar_width,
            height,
            min,
            max,
            stops,
        })
    }
}

impl<C: ?Sized> std::fmt::Debug for LegendRenderer<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegendRenderer")
            .field("style", self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/legend.rs"]
mod tests;
