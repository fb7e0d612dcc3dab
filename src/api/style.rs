use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::render::{Color, FontStyle, FontWeight, LineJoin, StrokeStyle};

/// Drawing configuration of one graph renderer.
///
/// Built once and never mutated by a render pass. Missing JSON fields fall
/// back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSet {
    pub background_color: Color,
    /// Pen for the function polyline.
    pub function_stroke: StrokeStyle,
    pub function_color: Color,
    /// Pen for axis lines and arrowhead outlines.
    pub axis_stroke: StrokeStyle,
    /// Color of axis lines, arrowheads (outline and fill) and labels.
    pub axis_color: Color,
    pub axis_font: FontStyle,
    /// Pen for marker outlines, shared by both glyph kinds.
    pub marker_stroke: StrokeStyle,
    pub marker_outline_color: Color,
    /// Fill of circle markers; star markers are never filled.
    pub marker_fill_color: Color,
    pub marker_radius_px: f64,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            function_stroke: StrokeStyle::solid(5.0)
                .with_join(LineJoin::Round)
                .with_dash_pattern(vec![40.0, 10.0, 20.0, 10.0, 10.0, 10.0, 20.0, 10.0, 40.0]),
            function_color: Color::BLUE,
            axis_stroke: StrokeStyle::solid(2.0),
            axis_color: Color::BLACK,
            axis_font: FontStyle::new("Serif", FontWeight::Bold, 35.0),
            marker_stroke: StrokeStyle::solid(2.0).with_miter_limit(90.0),
            marker_outline_color: Color::RED,
            marker_fill_color: Color::GREEN,
            marker_radius_px: 3.0,
        }
    }
}

impl StyleSet {
    pub fn validate(&self) -> GraphResult<()> {
        self.background_color.validate()?;
        self.function_stroke.validate()?;
        self.function_color.validate()?;
        self.axis_stroke.validate()?;
        self.axis_color.validate()?;
        self.axis_font.validate()?;
        self.marker_stroke.validate()?;
        self.marker_outline_color.validate()?;
        self.marker_fill_color.validate()?;
        if !self.marker_radius_px.is_finite() || self.marker_radius_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
