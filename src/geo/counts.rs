use std::collections::HashMap;

use crate::foundation::error::{ChoroplethError, ChoroplethResult};

/// Per-area counts keyed by feature id. Ids without an entry read as `0`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "HashMap<String, f64>", into = "HashMap<String, f64>")]
pub struct AreaCounts {
    values: HashMap<String, f64>,
}

impl AreaCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a count. Negative and non-finite values are rejected.
    pub fn insert(&mut self, id: impl Into<String>, count: f64) -> ChoroplethResult<()> {
        let id = id.into();
        if !count.is_finite() || count < 0.0 {
            return Err(ChoroplethError::validation(format!(
                "count for \"{id}\" must be a finite non-negative number (got {count})"
            )));
        }
        self.values.insert(id, count);
        Ok(())
    }

    pub fn get(&self, id: &str) -> f64 {
        self.values.get(id).copied().unwrap_or(0.0)
    }

    /// Count for an optional id; anonymous features read as `0`.
    pub fn count_of(&self, id: Option<&str>) -> f64 {
        id.map_or(0.0, |id| self.get(id))
    }

    pub fn max(&self) -> Option<f64> {
        self.values.values().copied().reduce(f64::max)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl TryFrom<HashMap<String, f64>> for AreaCounts {
    type Error = ChoroplethError;

    fn try_from(values: HashMap<String, f64>) -> ChoroplethResult<Self> {
        let mut out = Self::new();
        for (id, count) in values {
            out.insert(id, count)?;
        }
        Ok(out)
    }
}

impl From<AreaCounts> for HashMap<String, f64> {
    fn from(counts: AreaCounts) -> Self {
        counts.values
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AreaCounts {
    /// Collects counts, dropping entries that fail validation.
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (id, count) in iter {
            if let Err(err) = out.insert(id, count) {
                tracing::warn!(%err, "dropping invalid count");
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/counts.rs"]
mod tests;
