use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Sample, Series, SurfacePoint, SurfaceSize};
use crate::error::{GraphError, GraphResult};

/// Span substituted for a zero-width data range before scaling.
pub const MIN_SPAN: f64 = 1.0;

/// Raw value range of a series, before any fitting.
///
/// X bounds come from the first and last sample (the series is trusted to be
/// sorted by `x`); Y bounds come from a full scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DataRange {
    pub fn of(series: &Series) -> GraphResult<Self> {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return Err(GraphError::EmptySeries);
        };

        let (min_y, max_y) = series
            .iter()
            .fold((first.y, first.y), |(min_y, max_y), sample| {
                (min_y.min(sample.y), max_y.max(sample.y))
            });

        Ok(Self {
            min_x: first.x,
            max_x: last.x,
            min_y,
            max_y,
        })
    }
}

/// Visible data window and uniform pixel scale for one render pass.
///
/// `scale` is the same on both axes, so the graph is never distorted. The
/// axis that did not determine the scale is padded symmetrically so its range
/// exactly covers the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub scale: f64,
}

impl Viewport {
    /// Fits `series` into `surface`.
    ///
    /// Fails with [`GraphError::EmptySeries`] for an empty series and with
    /// [`GraphError::InvalidViewport`] for a zero-sized surface.
    pub fn compute(series: &Series, surface: SurfaceSize) -> GraphResult<Self> {
        let surface = surface.validate()?;
        let range = DataRange::of(series)?;
        Self::fit(range, surface)
    }

    /// Fits an already computed data range into `surface`.
    ///
    /// Any finite range fits: spans too narrow to divide by are widened
    /// around their centre, and spans wider than `f64::MAX` are handled in
    /// half units.
    pub fn fit(range: DataRange, surface: SurfaceSize) -> GraphResult<Self> {
        let surface = surface.validate()?;
        if ![range.min_x, range.max_x, range.min_y, range.max_y]
            .iter()
            .all(|bound| bound.is_finite())
        {
            return Err(GraphError::InvalidData(
                "data range bounds must be finite".to_owned(),
            ));
        }

        let width = f64::from(surface.width);
        let height = f64::from(surface.height);
        let (mut min_x, mut max_x) = reserve_min_span(range.min_x, range.max_x, width);
        let (mut min_y, mut max_y) = reserve_min_span(range.min_y, range.max_y, height);
        let scale_x = axis_scale(min_x, max_x, width);
        let scale_y = axis_scale(min_y, max_y, height);
        let scale = scale_x.min(scale_y);

        // Exactly one branch pads; equal scales take the Y branch with a zero increment.
        if scale_x <= scale_y {
            (min_y, max_y) = padded_window(min_y, max_y, height, scale);
        } else {
            (min_x, max_x) = padded_window(min_x, max_x, width, scale);
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            scale,
        })
    }

    /// Maps a data-space point to surface pixels (origin top-left).
    #[must_use]
    pub fn to_surface(&self, x: f64, y: f64) -> SurfacePoint {
        let double_scale = 2.0 * self.scale;
        SurfacePoint::new(
            half_difference(x, self.min_x) * double_scale,
            half_difference(self.max_y, y) * double_scale,
        )
    }

    #[must_use]
    pub fn sample_to_surface(&self, sample: Sample) -> SurfacePoint {
        self.to_surface(sample.x, sample.y)
    }

    /// Inverse of [`Viewport::to_surface`].
    #[must_use]
    pub fn from_surface(&self, point: SurfacePoint) -> Sample {
        Sample::new(
            2.0 * (self.min_x / 2.0 + point.x / 2.0 / self.scale),
            2.0 * (self.max_y / 2.0 - point.y / 2.0 / self.scale),
        )
    }

    /// The vertical axis (`x = 0`) lies inside the visible X range.
    #[must_use]
    pub fn shows_y_axis(&self) -> bool {
        self.min_x <= 0.0 && self.max_x >= 0.0
    }

    /// The horizontal axis (`y = 0`) lies inside the visible Y range.
    #[must_use]
    pub fn shows_x_axis(&self) -> bool {
        self.min_y <= 0.0 && self.max_y >= 0.0
    }

    #[must_use]
    pub fn span_x(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn span_y(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Projects every sample of `series` into surface space, preserving order.
#[must_use]
pub fn project_series(series: &Series, viewport: &Viewport) -> Vec<SurfacePoint> {
    #[cfg(feature = "parallel-projection")]
    {
        series
            .samples()
            .par_iter()
            .map(|sample| viewport.sample_to_surface(*sample))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        series
            .iter()
            .map(|sample| viewport.sample_to_surface(*sample))
            .collect()
    }
}

/// `(a - b) / 2` without overflowing for any pair of finite values.
fn half_difference(a: f64, b: f64) -> f64 {
    a / 2.0 - b / 2.0
}

fn midpoint(min: f64, max: f64) -> f64 {
    min / 2.0 + max / 2.0
}

/// Pixels per data unit along one axis. `2 * scale` stays finite.
fn axis_scale(min: f64, max: f64, size: f64) -> f64 {
    size / half_difference(max, min) / 2.0
}

/// Keeps `[min, max]` when `size` can be divided by its span, otherwise
/// widens it to at least `MIN_SPAN` around its centre.
fn reserve_min_span(min: f64, max: f64, size: f64) -> (f64, f64) {
    let half_span = half_difference(max, min);
    if half_span > 0.0 && (size / half_span).is_finite() {
        return (min, max);
    }

    let center = midpoint(min, max);
    // Far from zero, half of MIN_SPAN would vanish into rounding.
    let half_width = (MIN_SPAN / 2.0).max(center.abs() * 4.0 * f64::EPSILON);
    let (low, high) = (center - half_width, center + half_width);
    if low.is_finite() && high.is_finite() {
        (low, high)
    } else if center > 0.0 {
        (center - 2.0 * half_width, center)
    } else {
        (center, center + 2.0 * half_width)
    }
}

/// Symmetric window around the centre of `[min, max]` that spans `size`
/// pixels at `scale`, clamped to the finite range.
fn padded_window(min: f64, max: f64, size: f64, scale: f64) -> (f64, f64) {
    let center = midpoint(min, max);
    let half_extent = size / 2.0 / scale;
    (
        (center - half_extent).max(f64::MIN),
        (center + half_extent).min(f64::MAX),
    )
}
