use crate::data::config::{MapConfig, ProjectionConfig};
use crate::data::geojson::{load_counts, load_features};
use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::ChoroplethResult;
use crate::frame::framer::frame_with;
use crate::frame::transform::{FrameTransform, FramerConfig};
use crate::geo::counts::AreaCounts;
use crate::geo::feature::AreaFeature;
use crate::geo::path::{PathSource, PlanarPath};
use crate::render::areas::AreaRenderer;
use crate::render::legend::LegendRenderer;
use crate::render::scene::MapScene;
use crate::render::style::MapStyle;
use crate::scale::ramp::ColorScale;

/// A loaded map: features, counts and the capabilities used to draw them.
pub struct ChoroplethMap {
    pub viewport: Viewport,
    pub features: Vec<AreaFeature>,
    pub counts: AreaCounts,
    pub style: MapStyle,
    pub framer: FramerConfig,
    paths: Box<dyn PathSource + Send + Sync>,
    colors: Box<dyn ColorScale + Send + Sync>,
}

impl std::fmt::Debug for ChoroplethMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChoroplethMap")
            .field("viewport", &self.viewport)
            .field("features", &self.features.len())
            .field("counts", &self.counts.len())
            .field("framer", &self.framer)
            .finish_non_exhaustive()
    }
}

impl ChoroplethMap {
    pub fn new(
        viewport: Viewport,
        features: Vec<AreaFeature>,
        counts: AreaCounts,
        paths: Box<dyn PathSource + Send + Sync>,
        colors: Box<dyn ColorScale + Send + Sync>,
    ) -> Self {
        Self {
            viewport,
            features,
            counts,
            style: MapStyle::default(),
            framer: FramerConfig::default(),
            paths,
            colors,
        }
    }

    pub fn with_style(mut self, style: MapStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_framer(mut self, framer: FramerConfig) -> Self {
        self.framer = framer;
        self
    }

    /// Load features and counts named by `cfg` and build its scale and projection.
    #[tracing::instrument(skip(cfg), fields(features = %cfg.features.display()))]
    pub fn from_config(cfg: &MapConfig) -> ChoroplethResult<Self> {
        cfg.validate()?;
        let viewport = cfg.viewport()?;
        let features = load_features(&cfg.features, cfg.id_property.as_deref())?;
        let counts = match &cfg.counts {
            Some(path) => load_counts(path)?,
            None => AreaCounts::new(),
        };

        let paths = match cfg.projection {
            ProjectionConfig::Identity => PlanarPath::identity(),
            ProjectionConfig::Fit { padding, flip_y } => {
                PlanarPath::fit_extent(&features, viewport, padding, flip_y)
            }
        };
        let colors = cfg.color_scale.build(&counts)?;

        Ok(Self::new(viewport, features, counts, Box::new(paths), colors)
            .with_style(cfg.style.clone())
            .with_framer(cfg.framer))
    }

    pub fn bounds_of(&self, feature: &AreaFeature) -> Rect {
        self.paths.bounds_of(feature)
    }

    /// Target transform for `focus`; identity when it is `None` or unknown.
    pub fn frame(&self, focus: Option<&str>) -> FrameTransform {
        frame_with(&self.framer, self.viewport, focus, &self.features, |f| {
            self.paths.bounds_of(f)
        })
    }

    /// Scene for one displayed transform, which may be an eased intermediate.
    pub fn scene(
        &self,
        transform: &FrameTransform,
        focus: Option<&str>,
        hover: Option<&str>,
    ) -> MapScene {
        let areas = AreaRenderer {
            style: &self.style,
            paths: self.paths.as_ref(),
            colors: self.colors.as_ref(),
        }
        .render(&self.features, &self.counts, transform, focus, hover);
        let legend = LegendRenderer {
            style: &self.style,
            colors: self.colors.as_ref(),
        }
        .render(self.viewport, &self.counts);
        MapScene::new(self.viewport, *transform, &self.style, areas, legend)
    }

    /// SVG of the settled view framed on `focus`.
    pub fn render_svg(&self, focus: Option<&str>) -> String {
        let transform = self.frame(focus);
        self.scene(&transform, focus, None).to_svg()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/map.rs"]
mod tests;
