use crate::core::{MarkerKind, Series, SurfacePoint, Viewport};
use crate::render::{CanvasLayerKind, CirclePrimitive, DrawCommand, PathPrimitive, RenderFrame};

use super::GraphRenderer;

/// Star glyph vertices relative to the marker centre, in pixels.
const STAR_OFFSETS_PX: [(f64, f64); 4] = [(-4.0, 3.0), (4.0, -3.0), (4.0, 4.0), (-3.0, 0.0)];

impl GraphRenderer {
    pub(super) fn append_marker_primitives(
        &self,
        frame: &mut RenderFrame,
        series: &Series,
        viewport: &Viewport,
    ) {
        for sample in series {
            let center = viewport.sample_to_surface(*sample);
            let command = self.marker_command(MarkerKind::classify(sample.y), center);
            frame.push(CanvasLayerKind::Markers, command);
        }
    }

    fn marker_command(&self, kind: MarkerKind, center: SurfacePoint) -> DrawCommand {
        match kind {
            MarkerKind::Star => DrawCommand::Path(PathPrimitive::polyline(
                STAR_OFFSETS_PX
                    .iter()
                    .map(|&(dx, dy)| center.shifted(dx, dy)),
                self.style.marker_stroke.clone(),
                self.style.marker_outline_color,
            )),
            MarkerKind::Circle => DrawCommand::Circle(CirclePrimitive {
                center,
                radius: self.style.marker_radius_px,
                stroke: self.style.marker_stroke.clone(),
                stroke_color: self.style.marker_outline_color,
                fill_color: self.style.marker_fill_color,
            }),
        }
    }
}
