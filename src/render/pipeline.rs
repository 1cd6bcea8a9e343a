use std::path::{Path, PathBuf};

use image::RgbaImage;
use rayon::prelude::*;

use crate::animation::ease::Ease;
use crate::animation::interp::TransformInterpolator;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::ChoroplethResult;
use crate::frame::transform::FrameTransform;
use crate::render::map::ChoroplethMap;
use crate::render::raster::{SvgRasterizer, write_png};

/// An animated change of focus.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomSequence {
    pub from: Option<String>,
    pub to: Option<String>,
    /// Transition length; `frames + 1` images are produced (both endpoints).
    pub frames: u64,
    pub ease: Ease,
}

impl ZoomSequence {
    /// Displayed transforms for every frame, eased by [`TransformInterpolator`].
    pub fn transforms(&self, map: &ChoroplethMap) -> Vec<FrameTransform> {
        let start = map.frame(self.from.as_deref());
        let target = map.frame(self.to.as_deref());
        let mut driver = TransformInterpolator::new(start, self.frames, self.ease);
        driver.retarget(target, FrameIndex(0));
        (0..=self.frames)
            .map(|f| driver.sample(FrameIndex(f)))
            .collect()
    }

    /// SVG documents for every frame. The focus highlight follows `to`.
    pub fn svgs(&self, map: &ChoroplethMap) -> Vec<String> {
        let focus = self.to.as_deref();
        self.transforms(map)
            .iter()
            .map(|t| map.scene(t, focus, None).to_svg())
            .collect()
    }

    /// Rasterize every frame; frames are independent and render in parallel.
    #[tracing::instrument(skip(map, raster))]
    pub fn render(
        &self,
        map: &ChoroplethMap,
        raster: &SvgRasterizer,
    ) -> ChoroplethResult<Vec<RgbaImage>> {
        let (w, h) = map.viewport.pixel_size();
        let svgs = self.svgs(map);
        let frames = svgs
            .par_iter()
            .map(|svg| raster.rasterize(svg, w, h))
            .collect::<ChoroplethResult<Vec<_>>>()?;
        tracing::info!(frames = frames.len(), "rendered zoom sequence");
        Ok(frames)
    }

    /// Render and write `frame_00000.png`, `frame_00001.png`, ... into `dir`.
    pub fn write_pngs(
        &self,
        map: &ChoroplethMap,
        raster: &SvgRasterizer,
        dir: &Path,
    ) -> ChoroplethResult<Vec<PathBuf>> {
        let frames = self.render(map, raster)?;
        frames
            .par_iter()
            .enumerate()
            .map(|(i, img)| {
                let path = dir.join(frame_file_name(i));
                write_png(img, &path)?;
                Ok(path)
            })
            .collect()
    }
}

pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:05}.png")
}

/// Rasterize the settled view framed on `focus`.
pub fn render_png(
    map: &ChoroplethMap,
    raster: &SvgRasterizer,
    focus: Option<&str>,
) -> ChoroplethResult<RgbaImage> {
    let (w, h) = map.viewport.pixel_size();
    raster.rasterize(&map.render_svg(focus), w, h)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
