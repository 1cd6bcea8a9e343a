use crate::foundation::core::BezPath;
use crate::frame::transform::FrameTransform;
use crate::geo::counts::AreaCounts;
use crate::geo::feature::AreaFeature;
use crate::geo::path::PathSource;
use crate::render::style::MapStyle;
use crate::scale::color::Color;
use crate::scale::ramp::ColorScale;

/// One styled area, ready to be emitted inside the transformed group.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaPath {
    /// Position in the feature collection; stable for one render.
    pub key: usize,
    pub id: Option<String>,
    pub path: BezPath,
    pub count: f64,
    pub fill: Color,
    pub stroke: Color,
    /// In content units; the group scale brings it back to screen size.
    pub stroke_width: f64,
    pub focused: bool,
}

/// Styles every feature from its count, focus and hover state.
pub struct AreaRenderer<'a, P: ?Sized, C: ?Sized> {
    pub style: &'a MapStyle,
    pub paths: &'a P,
    pub colors: &'a C,
}

impl<P, C> AreaRenderer<'_, P, C>
where
    P: PathSource + ?Sized,
    C: ColorScale + ?Sized,
{
    /// One [`AreaPath`] per feature, in input order.
    pub fn render(
        &self,
        features: &[AreaFeature],
        counts: &AreaCounts,
        transform: &FrameTransform,
        focus: Option<&str>,
        hover: Option<&str>,
    ) -> Vec<AreaPath> {
        let focus = focus.filter(|id| !id.is_empty());
        let hover = hover.filter(|id| !id.is_empty());
        features
            .iter()
            .enumerate()
            .map(|(key, feature)| {
                let id = feature.id.as_deref();
                let focused = id.is_some() && id == focus;
                let hovered = !focused && id.is_some() && id == hover;
                let count = counts.count_of(id);

                let stroke = if focused {
                    self.style.focus_stroke
                } else if hovered {
                    self.style.hover_stroke
                } else {
                    self.style.default_stroke
                };
                let stroke_width = if focused {
                    2.0 * transform.stroke_width
                } else {
                    transform.stroke_width
                };

                AreaPath {
                    key,
                    id: feature.id.clone(),
                    path: self.paths.path_of(feature),
                    count,
                    fill: self.colors.color_of(count),
                    stroke,
                    stroke_width,
                    focused,
                }
            })
            .collect()
    }
}

impl<P: ?Sized, C: ?Sized> std::fmt::Debug for AreaRenderer<'_, P, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AreaRenderer")
            .field("style", self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/areas.rs"]
mod tests;
