use kurbo::{Circle, Shape as _};

use crate::foundation::core::{Affine, BezPath, Point, Rect, Viewport};
use crate::geo::feature::{AreaFeature, Geometry, Position};

/// Converts area geometry into drawable paths and their bounds.
///
/// `path_of` and `bounds_of` must agree on the coordinate space: the framer
/// derives its transform from `bounds_of`, and the transform is applied to
/// the output of `path_of`.
pub trait PathSource {
    fn path_of(&self, feature: &AreaFeature) -> BezPath;
    fn bounds_of(&self, feature: &AreaFeature) -> Rect;
}

const DEFAULT_POINT_RADIUS: f64 = 4.5;
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Geometry already projected onto the drawing plane, mapped by one affine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarPath {
    to_view: Affine,
    point_radius: f64,
}

impl Default for PlanarPath {
    fn default() -> Self {
        Self::identity()
    }
}

impl PlanarPath {
    pub fn identity() -> Self {
        Self::new(Affine::IDENTITY)
    }

    pub fn new(to_view: Affine) -> Self {
        Self {
            to_view,
            point_radius: DEFAULT_POINT_RADIUS,
        }
    }

    /// Radius, in path units, of the circle drawn for point geometry.
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius.max(0.0);
        self
    }

    pub fn to_view(&self) -> Affine {
        self.to_view
    }

    /// Uniformly scale and center the collection's extent into `viewport`.
    ///
    /// `flip_y` mirrors the y axis first, for inputs where y grows upward
    /// (longitude/latitude style). An empty or non-finite extent falls back
    /// to the plain y mapping with no scaling.
    pub fn fit_extent(
        features: &[AreaFeature],
        viewport: Viewport,
        padding: f64,
        flip_y: bool,
    ) -> Self {
        let src = if flip_y { Affine::FLIP_Y } else { Affine::IDENTITY };
        let Some(extent) = extent_of(features.iter().map(|f| &f.geometry), src) else {
            tracing::warn!("feature collection has no finite extent; skipping fit");
            return Self::new(src);
        };

        let sx = if extent.width() > 0.0 {
            viewport.width / extent.width()
        } else {
            f64::INFINITY
        };
        let sy = if extent.height() > 0.0 {
            viewport.height / extent.height()
        } else {
            f64::INFINITY
        };
        let fit = sx.min(sy);
        let s = if fit.is_finite() { fit * padding } else { 1.0 };

        let offset = viewport.center().to_vec2() - extent.center().to_vec2() * s;
        Self::new(Affine::translate(offset) * Affine::scale(s) * src)
    }

    fn map(&self, p: Position) -> Point {
        self.to_view * p.to_point()
    }

    fn push_line(&self, path: &mut BezPath, line: &[Position], close: bool) {
        let mut iter = line.iter();
        let Some(first) = iter.next() else {
            return;
        };
        path.move_to(self.map(*first));
        for p in iter {
            path.line_to(self.map(*p));
        }
        if close {
            path.close_path();
        }
    }

    fn push_point(&self, path: &mut BezPath, p: Position) {
        if self.point_radius <= 0.0 {
            return;
        }
        let circle = Circle::new(self.map(p), self.point_radius);
        path.extend(circle.path_elements(CIRCLE_TOLERANCE));
    }
}

impl PathSource for PlanarPath {
    fn path_of(&self, feature: &AreaFeature) -> BezPath {
        let mut path = BezPath::new();
        match &feature.geometry {
            Geometry::Point(p) => self.push_point(&mut path, *p),
            Geometry::MultiPoint(ps) => {
                for p in ps {
                    self.push_point(&mut path, *p);
                }
            }
            Geometry::LineString(line) => self.push_line(&mut path, line, false),
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    self.push_line(&mut path, line, false);
                }
            }
            Geometry::Polygon(rings) => {
                for ring in rings {
                    self.push_line(&mut path, ring, true);
                }
            }
            Geometry::MultiPolygon(polys) => {
                for ring in polys.iter().flatten() {
                    self.push_line(&mut path, ring, true);
                }
            }
        }
        path
    }

    /// Bounds of the mapped positions; point radius is not included, so point
    /// geometry yields a zero-area box. Empty geometry yields `Rect::ZERO`.
    fn bounds_of(&self, feature: &AreaFeature) -> Rect {
        extent_of(std::iter::once(&feature.geometry), self.to_view).unwrap_or(Rect::ZERO)
    }
}

fn extent_of<'a>(geoms: impl Iterator<Item = &'a Geometry>, xf: Affine) -> Option<Rect> {
    let mut out: Option<Rect> = None;
    for g in geoms {
        g.for_each_position(|p| {
            let pt = xf * p.to_point();
            if !(pt.x.is_finite() && pt.y.is_finite()) {
                return;
            }
            out = Some(match out {
                Some(r) => r.union_pt(pt),
                None => Rect::from_points(pt, pt),
            });
        });
    }
    out
}

impl<T: PathSource + ?Sized> PathSource for &T {
    fn path_of(&self, feature: &AreaFeature) -> BezPath {
        (**self).path_of(feature)
    }

    fn bounds_of(&self, feature: &AreaFeature) -> Rect {
        (**self).bounds_of(feature)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/path.rs"]
mod tests;
