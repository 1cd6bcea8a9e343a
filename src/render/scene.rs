use std::fmt::Write as _;

use crate::foundation::core::Viewport;
use crate::frame::transform::FrameTransform;
use crate::render::areas::AreaPath;
use crate::render::legend::Legend;
use crate::render::style::MapStyle;
use crate::scale::color::Color;

const LEGEND_GRADIENT_ID: &str = "choropleth-legend-gradient";
const LEGEND_LABEL_GAP: f64 = 4.0;

/// Everything drawn for one frame.
///
/// The outer frame is `(0, 0, width, height)` for every transform; only the
/// area group moves and scales.
#[derive(Clone, Debug, PartialEq)]
pub struct MapScene {
    pub viewport: Viewport,
    pub transform: FrameTransform,
    pub background: Color,
    pub areas: Vec<AreaPath>,
    pub legend: Option<Legend>,
    pub legend_text: Color,
    pub legend_font_size: f64,
}

impl MapScene {
    pub fn new(
        viewport: Viewport,
        transform: FrameTransform,
        style: &MapStyle,
        areas: Vec<AreaPath>,
        legend: Option<Legend>,
    ) -> Self {
        Self {
            viewport,
            transform,
            background: style.background,
            areas,
            legend,
            legend_text: style.legend_text,
            legend_font_size: style.legend_font_size,
        }
    }

    /// Standalone SVG document for this scene.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(256 + self.areas.len() * 128);
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut out);
        out
    }

    fn write_svg(&self, out: &mut String) -> std::fmt::Result {
        let Viewport { width, height } = self.viewport;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        if self.background.a > 0 {
            writeln!(
                out,
                r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"{}/>"#,
                self.background.to_rgb_hex(),
                opacity_attr("fill-opacity", self.background),
            )?;
        }

        let t = self.transform;
        writeln!(
            out,
            r#"<g class="areas" transform="translate({} {}) scale({})">"#,
            t.translate_x, t.translate_y, t.scale
        )?;
        for area in &self.areas {
            self.write_area(out, area)?;
        }
        writeln!(out, "</g>")?;

        if let Some(legend) = &self.legend {
            self.write_legend(out, legend)?;
        }
        writeln!(out, "</svg>")
    }

    fn write_area(&self, out: &mut String, area: &AreaPath) -> std::fmt::Result {
        write!(out, r#"<path data-key="{}""#, area.key)?;
        if let Some(id) = &area.id {
            write!(out, r#" data-id="{}""#, escape_xml(id))?;
        }
        writeln!(
            out,
            r#" d="{}" fill="{}"{} stroke="{}"{} stroke-width="{}"/>"#,
            area.path.to_svg(),
            area.fill.to_rgb_hex(),
            opacity_attr("fill-opacity", area.fill),
            area.stroke.to_rgb_hex(),
            opacity_attr("stroke-opacity", area.stroke),
            area.stroke_width,
        )
    }

    fn write_legend(&self, out: &mut String, legend: &Legend) -> std::fmt::Result {
        writeln!(
            out,
            r#"<g class="legend" transform="translate({} {})">"#,
            legend.origin.x, legend.origin.y
        )?;
        writeln!(
            out,
            r#"<defs><linearGradient id="{LEGEND_GRADIENT_ID}" x1="0" y1="1" x2="0" y2="0">"#
        )?;
        for stop in &legend.stops {
            writeln!(
                out,
                r#"<stop offset="{}" stop-color="{}"{}/>"#,
                stop.offset,
                stop.color.to_rgb_hex(),
                opacity_attr("stop-opacity", stop.color),
            )?;
        }
        writeln!(out, "</linearGradient></defs>")?;
        writeln!(
            out,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="url(#{LEGEND_GRADIENT_ID})"/>"#,
            legend.width, legend.height
        )?;

        let x = legend.width + LEGEND_LABEL_GAP;
        let fs = self.legend_font_size;
        let fill = self.legend_text.to_rgb_hex();
        writeln!(
            out,
            r#"<text x="{x}" y="{fs}" font-size="{fs}" font-family="sans-serif" fill="{fill}">{}</text>"#,
            format_count(legend.max)
        )?;
        writeln!(
            out,
            r#"<text x="{x}" y="{}" font-size="{fs}" font-family="sans-serif" fill="{fill}">{}</text>"#,
            legend.height,
            format_count(legend.min)
        )?;
        writeln!(out, "</g>")
    }
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.is_opaque() {
        String::new()
    } else {
        format!(r#" {name}="{}""#, color.opacity())
    }
}

/// Whole counts print without a fractional part.
fn format_count(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.2}")
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
