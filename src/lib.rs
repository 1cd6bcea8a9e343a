//! Choropleth maps with animated focus framing.
//!
//! The core is [`frame()`]: given a viewport, a focus id and the area features, it
//! computes the pan/zoom that centers the focused area on screen. Around it sit
//! the pieces needed to draw a complete map:
//!
//! - Load GeoJSON features and per-area counts ([`load_features`], [`load_counts`])
//! - Color areas by count ([`SequentialScale`], [`QuantizeScale`])
//! - Ease between framings ([`TransformInterpolator`])
//! - Emit SVG ([`MapScene`]) and rasterize to PNG ([`SvgRasterizer`])
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod data;
pub(crate) mod frame;
pub(crate) mod geo;
pub(crate) mod render;
pub(crate) mod scale;

pub use crate::foundation::core::{Affine, BezPath, FrameIndex, Point, Rect, Vec2, Viewport};
pub use crate::foundation::error::{ChoroplethError, ChoroplethResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interp::{Lerp, TransformInterpolator};
pub use crate::data::config::{AnimationConfig, MapConfig, ProjectionConfig};
pub use crate::data::geojson::{load_counts, load_features, parse_features};
pub use crate::frame::framer::{frame, frame_bounds, frame_bounds_with, frame_with};
pub use crate::frame::transform::{FrameTransform, FramerConfig};
pub use crate::geo::counts::AreaCounts;
pub use crate::geo::feature::{AreaFeature, Geometry, Position};
pub use crate::geo::path::{PathSource, PlanarPath};
pub use crate::render::areas::{AreaPath, AreaRenderer};
pub use crate::render::legend::{Legend, LegendRenderer, LegendStop};
pub use crate::render::map::ChoroplethMap;
pub use crate::render::pipeline::{ZoomSequence, frame_file_name, render_png};
pub use crate::render::raster::{SvgRasterizer, write_png};
pub use crate::render::scene::MapScene;
pub use crate::render::style::MapStyle;
pub use crate::scale::color::Color;
pub use crate::scale::ramp::{ColorScale, ColorScaleConfig, QuantizeScale, SequentialScale};
