use tracing::{debug, trace};

use crate::core::{Series, SurfaceSize, Viewport};
use crate::error::GraphResult;
use crate::render::{CanvasLayerKind, RenderFrame, Renderer};

use super::{RenderFlags, StyleSet};

/// Stateless graph renderer: range fitting, axes, function path and markers.
///
/// Every pass recomputes the viewport from scratch; nothing is cached
/// between passes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphRenderer {
    pub(super) style: StyleSet,
}

impl GraphRenderer {
    pub fn new(style: StyleSet) -> GraphResult<Self> {
        style.validate()?;
        Ok(Self { style })
    }

    #[must_use]
    pub fn style(&self) -> &StyleSet {
        &self.style
    }

    /// Builds the frame for one pass.
    ///
    /// An absent or empty series yields a frame without draw commands. Layers
    /// are filled axes first, then the function path, then markers.
    pub fn build_frame(
        &self,
        series: Option<&Series>,
        flags: RenderFlags,
        surface: SurfaceSize,
    ) -> GraphResult<RenderFrame> {
        let surface = surface.validate()?;
        let frame = RenderFrame::new(surface, self.style.background_color);

        let Some(series) = series.filter(|series| !series.is_empty()) else {
            trace!("no series loaded, emitting background-only frame");
            return Ok(frame);
        };

        let viewport = Viewport::compute(series, surface)?;
        let mut frame = frame.with_viewport(viewport);

        if flags.show_axis {
            self.append_axis_primitives(&mut frame, &viewport);
        }
        self.append_function_path_primitives(&mut frame, series, &viewport);
        if flags.show_markers {
            self.append_marker_primitives(&mut frame, series, &viewport);
        }

        debug!(
            samples = series.len(),
            scale = viewport.scale,
            axis_commands = frame.layer(CanvasLayerKind::Axis).len(),
            marker_commands = frame.layer(CanvasLayerKind::Markers).len(),
            "built graph frame"
        );
        Ok(frame)
    }

    /// Builds a frame and hands it to `target`.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        target: &mut R,
        series: Option<&Series>,
        flags: RenderFlags,
        surface: SurfaceSize,
    ) -> GraphResult<()> {
        let frame = self.build_frame(series, flags, surface)?;
        target.render(&frame)
    }
}
