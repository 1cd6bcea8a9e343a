use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::core::Viewport;
use crate::foundation::error::{ChoroplethError, ChoroplethResult};
use crate::frame::transform::FramerConfig;
use crate::render::style::MapStyle;
use crate::scale::ramp::ColorScaleConfig;

/// How feature coordinates reach the drawing plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionConfig {
    /// Coordinates are already in viewport units.
    Identity,
    /// Scale and center the whole collection into the viewport.
    Fit {
        #[serde(default = "default_fit_padding")]
        padding: f64,
        #[serde(default)]
        flip_y: bool,
    },
}

fn default_fit_padding() -> f64 {
    1.0
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::Fit {
            padding: default_fit_padding(),
            flip_y: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Length of one zoom transition in frames.
    pub frames: u64,
    pub ease: Ease,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: 30,
            ease: Ease::default(),
        }
    }
}

/// Map description loaded from a JSON file.
///
/// Relative `features` / `counts` paths resolve against the config file's
/// directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    pub width: f64,
    pub height: f64,
    pub features: PathBuf,
    #[serde(default)]
    pub counts: Option<PathBuf>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub id_property: Option<String>,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub style: MapStyle,
    #[serde(default)]
    pub framer: FramerConfig,
    #[serde(default)]
    pub color_scale: ColorScaleConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl MapConfig {
    pub fn load_from_file(path: &Path) -> ChoroplethResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let mut cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            ChoroplethError::serde(format!("parse config '{}': {e}", path.display()))
        })?;
        if let Some(dir) = path.parent() {
            cfg.resolve_paths(dir);
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn resolve_paths(&mut self, base: &Path) {
        if self.features.is_relative() {
            self.features = base.join(&self.features);
        }
        if let Some(counts) = &mut self.counts
            && counts.is_relative()
        {
            *counts = base.join(&*counts);
        }
    }

    pub fn viewport(&self) -> ChoroplethResult<Viewport> {
        Viewport::new(self.width, self.height)
    }

    pub fn validate(&self) -> ChoroplethResult<()> {
        self.viewport()?;
        self.framer.validate()?;
        self.style.validate()?;
        if let ProjectionConfig::Fit { padding, .. } = self.projection
            && !(padding.is_finite() && padding > 0.0)
        {
            return Err(ChoroplethError::validation("fit padding must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/config.rs"]
mod tests;
