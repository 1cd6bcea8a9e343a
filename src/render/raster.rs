use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::{ChoroplethError, ChoroplethResult};

// Avoid pathological allocations from a bad viewport.
const MAX_DIM: u32 = 16_384;

/// CPU rasterizer for scene SVG, sharing one font database across frames.
#[derive(Clone)]
pub struct SvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for SvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgRasterizer")
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::with_system_fonts()
    }
}

impl SvgRasterizer {
    /// Loads system fonts for legend labels.
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// No fonts: text is skipped, shapes still render.
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Rasterize `svg` into a straight-alpha RGBA image of `width x height`,
    /// stretching the document's own size to fit.
    pub fn rasterize(&self, svg: &str, width: u32, height: u32) -> ChoroplethResult<RgbaImage> {
        if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
            return Err(ChoroplethError::render(format!(
                "raster size {width}x{height} out of range (1..={MAX_DIM})"
            )));
        }

        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts).context("parse scene svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ChoroplethError::render("failed to allocate pixmap"))?;
        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        let mut rgba = pixmap.take();
        demultiply_rgba8_in_place(&mut rgba);
        RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| ChoroplethError::render("pixmap size does not match image size"))
    }
}

/// Write `img` as PNG, creating parent directories as needed.
pub fn write_png(img: &RgbaImage, path: &Path) -> ChoroplethResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
