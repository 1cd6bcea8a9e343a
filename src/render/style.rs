use crate::foundation::error::{ChoroplethError, ChoroplethResult};
use crate::scale::color::Color;

/// Presentation options for areas and the legend.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapStyle {
    /// Outline of areas that are neither focused nor hovered.
    pub default_stroke: Color,
    /// Outline of the focused area.
    pub focus_stroke: Color,
    /// Outline of the hovered area, unless it is also focused.
    pub hover_stroke: Color,
    pub background: Color,
    /// Legend margins: `[left, bottom]` in viewport units. The bar is
    /// anchored to the bottom-left corner.
    pub legend_offset: [f64; 2],
    pub legend_bar_width: f64,
    /// Number of gradient stops sampled from the color scale.
    pub legend_stops: usize,
    pub legend_text: Color,
    pub legend_font_size: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            default_stroke: Color::rgb(0xbb, 0xbb, 0xbb),
            focus_stroke: Color::BLACK,
            hover_stroke: Color::rgb(0x88, 0x88, 0x88),
            background: Color::TRANSPARENT,
            legend_offset: [10.0, 20.0],
            legend_bar_width: 12.0,
            legend_stops: 10,
            legend_text: Color::rgb(0x33, 0x33, 0x33),
            legend_font_size: 10.0,
        }
    }
}

impl MapStyle {
    pub fn validate(&self) -> ChoroplethResult<()> {
        if !self.legend_offset.iter().all(|v| v.is_finite()) {
            return Err(ChoroplethError::validation("legend_offset must be finite"));
        }
        if !(self.legend_bar_width.is_finite() && self.legend_bar_width > 0.0) {
            return Err(ChoroplethError::validation("legend_bar_width must be > 0"));
        }
        if self.legend_stops < 2 {
            return Err(ChoroplethError::validation("legend_stops must be >= 2"));
        }
        if !(self.legend_font_size.is_finite() && self.legend_font_size > 0.0) {
            return Err(ChoroplethError::validation("legend_font_size must be > 0"));
        }
        Ok(())
    }
}
