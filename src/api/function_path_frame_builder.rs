use crate::core::{Series, Viewport, project_series};
use crate::render::{CanvasLayerKind, DrawCommand, PathPrimitive, RenderFrame};

use super::GraphRenderer;

impl GraphRenderer {
    /// One open polyline through every sample in series order.
    pub(super) fn append_function_path_primitives(
        &self,
        frame: &mut RenderFrame,
        series: &Series,
        viewport: &Viewport,
    ) {
        if series.len() < 2 {
            return;
        }

        let path = PathPrimitive::polyline(
            project_series(series, viewport),
            self.style.function_stroke.clone(),
            self.style.function_color,
        );
        frame.push(CanvasLayerKind::Series, DrawCommand::Path(path));
    }
}
