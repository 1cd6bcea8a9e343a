use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::foundation::error::{ChoroplethError, ChoroplethResult};
use crate::geo::counts::AreaCounts;
use crate::geo::feature::{AreaFeature, Geometry};

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawDocument {
    FeatureCollection { features: Vec<RawFeature> },
    Feature(RawFeature),
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<RawId>,
    geometry: Option<Geometry>,
    #[serde(default)]
    properties: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Str(String),
    Num(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Num(n) => n.to_string(),
        }
    }
}

fn id_from_value(v: &serde_json::Value) -> Option<String> {
    match v {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a GeoJSON `FeatureCollection` (or a single `Feature`).
///
/// With `id_property`, the id is read from that property and falls back to
/// the feature's own `id`. Null geometry becomes an empty shape.
pub fn parse_features(
    json: &str,
    id_property: Option<&str>,
) -> ChoroplethResult<Vec<AreaFeature>> {
    let doc: RawDocument = serde_json::from_str(json)
        .map_err(|e| ChoroplethError::data(format!("invalid GeoJSON: {e}")))?;
    let raw = match doc {
        RawDocument::FeatureCollection { features } => features,
        RawDocument::Feature(f) => vec![f],
    };

    let mut out = Vec::with_capacity(raw.len());
    for (index, f) in raw.into_iter().enumerate() {
        let properties = f.properties.unwrap_or_default();
        let id = id_property
            .and_then(|key| properties.get(key))
            .and_then(id_from_value)
            .or_else(|| f.id.map(RawId::into_string));
        let geometry = f.geometry.unwrap_or_else(|| {
            tracing::debug!(index, "feature has null geometry");
            Geometry::MultiPolygon(Vec::new())
        });
        out.push(AreaFeature {
            id,
            geometry,
            properties,
        });
    }

    let anonymous = out.iter().filter(|f| f.id.is_none()).count();
    if anonymous > 0 {
        tracing::warn!(anonymous, "features without an id cannot be focused");
    }
    Ok(out)
}

#[tracing::instrument]
pub fn load_features(path: &Path, id_property: Option<&str>) -> ChoroplethResult<Vec<AreaFeature>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read features '{}'", path.display()))?;
    let features = parse_features(&json, id_property)?;
    tracing::info!(count = features.len(), "loaded features");
    Ok(features)
}

/// Read a JSON object of `{ "<area id>": count }`.
#[tracing::instrument]
pub fn load_counts(path: &Path) -> ChoroplethResult<AreaCounts> {
    let f = File::open(path).with_context(|| format!("open counts '{}'", path.display()))?;
    let counts: AreaCounts = serde_json::from_reader(BufReader::new(f))
        .map_err(|e| ChoroplethError::data(format!("invalid counts '{}': {e}", path.display())))?;
    tracing::info!(count = counts.len(), "loaded counts");
    Ok(counts)
}

#[cfg(test)]
#[path = "../../tests/unit/data/geojson.rs"]
mod tests;
