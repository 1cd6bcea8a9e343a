use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::core::Point;

/// A planar `[x, y]` position. Extra ordinates (altitude) are dropped on input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(pub [f64; 2]);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    pub fn to_point(self) -> Point {
        Point::new(self.0[0], self.0[1])
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Vec::<f64>::deserialize(deserializer)?;
        if v.len() < 2 {
            return Err(serde::de::Error::custom(
                "position must have at least 2 ordinates ([x, y])",
            ));
        }
        Ok(Self([v[0], v[1]]))
    }
}

type Ring = Vec<Position>;

/// Subset of GeoJSON geometries accepted as area shapes.
///
/// Serialized in GeoJSON form: `{"type": "Polygon", "coordinates": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Visit every position in document order.
    pub fn for_each_position(&self, mut f: impl FnMut(Position)) {
        match self {
            Self::Point(p) => f(*p),
            Self::MultiPoint(ps) | Self::LineString(ps) => ps.iter().copied().for_each(f),
            Self::MultiLineString(lines) | Self::Polygon(lines) => {
                lines.iter().flatten().copied().for_each(f);
            }
            Self::MultiPolygon(polys) => polys.iter().flatten().flatten().copied().for_each(f),
        }
    }

    pub fn is_empty(&self) -> bool {
        let mut any = false;
        self.for_each_position(|_| any = true);
        !any
    }
}

/// One drawable area of the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaFeature {
    /// Stable identifier; features without one can never be a focus target.
    pub id: Option<String>,
    pub geometry: Geometry,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl AreaFeature {
    pub fn new(id: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: Some(id.into()),
            geometry,
            properties: serde_json::Map::new(),
        }
    }

    pub fn anonymous(geometry: Geometry) -> Self {
        Self {
            id: None,
            geometry,
            properties: serde_json::Map::new(),
        }
    }

    /// Axis-aligned rectangle `[x0, y0] .. [x1, y1]` as a single-ring polygon.
    pub fn rect(id: impl Into<String>, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let ring = vec![
            Position::new(x0, y0),
            Position::new(x1, y0),
            Position::new(x1, y1),
            Position::new(x0, y1),
            Position::new(x0, y0),
        ];
        Self::new(id, Geometry::Polygon(vec![ring]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/feature.rs"]
mod tests;
