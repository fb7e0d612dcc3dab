use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SurfacePoint;
use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Pen used to outline paths and glyphs.
///
/// An empty `dash_pattern` means a solid stroke; otherwise the pattern
/// alternates on/off lengths in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    #[serde(default)]
    pub cap: LineCap,
    #[serde(default)]
    pub join: LineJoin,
    #[serde(default = "default_miter_limit")]
    pub miter_limit: f64,
    #[serde(default)]
    pub dash_pattern: Vec<f64>,
    #[serde(default)]
    pub dash_offset: f64,
}

fn default_miter_limit() -> f64 {
    10.0
}

impl StrokeStyle {
    #[must_use]
    pub fn solid(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: default_miter_limit(),
            dash_pattern: Vec::new(),
            dash_offset: 0.0,
        }
    }

    #[must_use]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    #[must_use]
    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    #[must_use]
    pub fn with_dash_pattern(mut self, pattern: impl Into<Vec<f64>>) -> Self {
        self.dash_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn is_dashed(&self) -> bool {
        !self.dash_pattern.is_empty()
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(GraphError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.miter_limit.is_finite() || self.miter_limit < 1.0 {
            return Err(GraphError::InvalidData(
                "stroke miter limit must be finite and >= 1".to_owned(),
            ));
        }
        if !self.dash_offset.is_finite() {
            return Err(GraphError::InvalidData(
                "stroke dash offset must be finite".to_owned(),
            ));
        }
        if self
            .dash_pattern
            .iter()
            .any(|length| !length.is_finite() || *length < 0.0)
        {
            return Err(GraphError::InvalidData(
                "dash lengths must be finite and >= 0".to_owned(),
            ));
        }
        if self.is_dashed() && self.dash_pattern.iter().all(|length| *length == 0.0) {
            return Err(GraphError::InvalidData(
                "dash pattern must contain a non-zero length".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font used for text labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub family: String,
    #[serde(default)]
    pub weight: FontWeight,
    pub size_px: f64,
}

impl FontStyle {
    #[must_use]
    pub fn new(family: impl Into<String>, weight: FontWeight, size_px: f64) -> Self {
        Self {
            family: family.into(),
            weight,
            size_px,
        }
    }

    /// Approximate distance from baseline to the top of lowercase glyphs.
    #[must_use]
    pub fn ascent_px(&self) -> f64 {
        self.size_px * 0.75
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.family.trim().is_empty() {
            return Err(GraphError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(SurfacePoint),
    LineTo(SurfacePoint),
    Close,
}

impl PathCommand {
    fn point(self) -> Option<SurfacePoint> {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => Some(point),
            Self::Close => None,
        }
    }
}

/// Draw command for one path in pixel space, optionally filled.
///
/// Backends fill first, then stroke the outline on top.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub commands: SmallVec<[PathCommand; 4]>,
    pub stroke: StrokeStyle,
    pub stroke_color: Color,
    pub fill_color: Option<Color>,
}

impl PathPrimitive {
    /// Open polyline through `points` in order.
    #[must_use]
    pub fn polyline<I>(points: I, stroke: StrokeStyle, stroke_color: Color) -> Self
    where
        I: IntoIterator<Item = SurfacePoint>,
    {
        let commands = points
            .into_iter()
            .enumerate()
            .map(|(index, point)| {
                if index == 0 {
                    PathCommand::MoveTo(point)
                } else {
                    PathCommand::LineTo(point)
                }
            })
            .collect();
        Self {
            commands,
            stroke,
            stroke_color,
            fill_color: None,
        }
    }

    /// Closes the path back to its first vertex.
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn filled(mut self, fill_color: Color) -> Self {
        self.fill_color = Some(fill_color);
        self
    }

    pub fn vertices(&self) -> impl Iterator<Item = SurfacePoint> + '_ {
        self.commands.iter().filter_map(|command| command.point())
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !matches!(self.commands.first(), Some(PathCommand::MoveTo(_))) {
            return Err(GraphError::InvalidData(
                "path must start with a move-to command".to_owned(),
            ));
        }
        if self.vertices().any(|point| !point.is_finite()) {
            return Err(GraphError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        self.stroke.validate()?;
        self.stroke_color.validate()?;
        if let Some(fill_color) = self.fill_color {
            fill_color.validate()?;
        }
        Ok(())
    }
}

/// Draw command for an outlined, filled circle in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct CirclePrimitive {
    pub center: SurfacePoint,
    pub radius: f64,
    pub stroke: StrokeStyle,
    pub stroke_color: Color,
    pub fill_color: Color,
}

impl CirclePrimitive {
    pub fn validate(&self) -> GraphResult<()> {
        if !self.center.is_finite() {
            return Err(GraphError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GraphError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.stroke.validate()?;
        self.stroke_color.validate()?;
        self.fill_color.validate()
    }
}

/// Draw command for one label; `position` is the left end of the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub position: SurfacePoint,
    pub font: FontStyle,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        position: SurfacePoint,
        font: FontStyle,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            font,
            color,
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.text.is_empty() {
            return Err(GraphError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() {
            return Err(GraphError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.font.validate()?;
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, PathCommand, PathPrimitive, StrokeStyle};
    use crate::core::SurfacePoint;

    #[test]
    fn polyline_starts_with_move_to() {
        let path = PathPrimitive::polyline(
            [SurfacePoint::new(0.0, 0.0), SurfacePoint::new(5.0, 5.0)],
            StrokeStyle::solid(1.0),
            Color::BLACK,
        );
        assert_eq!(
            path.commands.as_slice(),
            &[
                PathCommand::MoveTo(SurfacePoint::new(0.0, 0.0)),
                PathCommand::LineTo(SurfacePoint::new(5.0, 5.0)),
            ]
        );
        path.validate().expect("valid path");
    }

    #[test]
    fn all_zero_dash_pattern_is_rejected() {
        let stroke = StrokeStyle::solid(1.0).with_dash_pattern(vec![0.0, 0.0]);
        assert!(stroke.validate().is_err());
    }

    #[test]
    fn out_of_range_color_is_rejected() {
        assert!(Color::rgb(1.5, 0.0, 0.0).validate().is_err());
    }
}
