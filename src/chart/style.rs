use serde::{Deserialize, Serialize};

use crate::error::{TrendError, TrendResult};
use crate::render::Color;

/// Visual tuning for the price-history chart.
///
/// All knobs are serializable so host applications can persist a theme
/// without inventing their own format. Defaults reproduce the neutral
/// warm-gray theme with an accent on the latest transaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub grid_color: Color,
    pub axis_label_color: Color,
    pub series_color: Color,
    /// Style for the latest point's marker and label.
    pub emphasis_color: Color,
    pub label_color: Color,
    pub grid_stroke_width: f64,
    pub line_stroke_width: f64,
    /// Alpha applied to the connecting polyline so markers stay readable.
    pub line_alpha: f64,
    pub marker_radius_px: f64,
    pub latest_marker_radius_px: f64,
    pub axis_font_size_px: f64,
    pub label_font_size_px: f64,
    pub label_offset_above_px: f64,
    pub label_offset_below_px: f64,
    /// Minimum clearance below the top padding before a label flips below
    /// its point.
    pub label_top_clearance_px: f64,
    pub collision_dx_px: f64,
    pub collision_dy_px: f64,
    pub ascii_char_width_px: f64,
    /// Width estimate for non-ASCII (Hangul) characters.
    pub wide_char_width_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            grid_color: Color::rgb(0.910, 0.878, 0.831),
            axis_label_color: Color::rgb(0.604, 0.584, 0.565),
            series_color: Color::rgb(0.102, 0.435, 0.353),
            emphasis_color: Color::rgb(0.839, 0.227, 0.227),
            label_color: Color::rgb(0.431, 0.416, 0.388),
            grid_stroke_width: 0.5,
            line_stroke_width: 1.2,
            line_alpha: 0.5,
            marker_radius_px: 2.5,
            latest_marker_radius_px: 4.0,
            axis_font_size_px: 10.0,
            label_font_size_px: 9.0,
            label_offset_above_px: 10.0,
            label_offset_below_px: 14.0,
            label_top_clearance_px: 4.0,
            collision_dx_px: 50.0,
            collision_dy_px: 12.0,
            ascii_char_width_px: 5.0,
            wide_char_width_px: 9.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> TrendResult<Self> {
        for color in [
            self.grid_color,
            self.axis_label_color,
            self.series_color,
            self.emphasis_color,
            self.label_color,
        ] {
            color.validate()?;
        }
        if !self.line_alpha.is_finite() || !(0.0..=1.0).contains(&self.line_alpha) {
            return Err(TrendError::InvalidData(
                "style `line_alpha` must be finite and in [0, 1]".to_owned(),
            ));
        }
        for (value, name) in [
            (self.grid_stroke_width, "grid_stroke_width"),
            (self.line_stroke_width, "line_stroke_width"),
            (self.marker_radius_px, "marker_radius_px"),
            (self.latest_marker_radius_px, "latest_marker_radius_px"),
            (self.axis_font_size_px, "axis_font_size_px"),
            (self.label_font_size_px, "label_font_size_px"),
            (self.label_offset_above_px, "label_offset_above_px"),
            (self.label_offset_below_px, "label_offset_below_px"),
            (self.label_top_clearance_px, "label_top_clearance_px"),
            (self.collision_dx_px, "collision_dx_px"),
            (self.collision_dy_px, "collision_dy_px"),
            (self.ascii_char_width_px, "ascii_char_width_px"),
            (self.wide_char_width_px, "wide_char_width_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TrendError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}
