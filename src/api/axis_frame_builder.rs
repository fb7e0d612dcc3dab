use crate::core::{SurfacePoint, Viewport};
use crate::render::{CanvasLayerKind, DrawCommand, PathPrimitive, RenderFrame, TextPrimitive};

use super::GraphRenderer;

const ARROW_LENGTH_PX: f64 = 20.0;
const ARROW_HALF_WIDTH_PX: f64 = 5.0;
const LABEL_OFFSET_PX: f64 = 10.0;

impl GraphRenderer {
    /// Axis lines, arrowheads and labels for whichever axes cross the
    /// visible range.
    pub(super) fn append_axis_primitives(&self, frame: &mut RenderFrame, viewport: &Viewport) {
        let ascent = self.style.axis_font.ascent_px();

        if viewport.shows_y_axis() {
            let tip = viewport.to_surface(0.0, viewport.max_y);
            let foot = viewport.to_surface(0.0, viewport.min_y);
            self.push_axis(
                frame,
                [tip, foot],
                tip,
                // Upward arrow: down the right flank, then across the base.
                [
                    (ARROW_HALF_WIDTH_PX, ARROW_LENGTH_PX),
                    (-2.0 * ARROW_HALF_WIDTH_PX, 0.0),
                ],
                "y",
                tip.shifted(LABEL_OFFSET_PX, ascent),
            );
        }

        if viewport.shows_x_axis() {
            let start = viewport.to_surface(viewport.min_x, 0.0);
            let tip = viewport.to_surface(viewport.max_x, 0.0);
            self.push_axis(
                frame,
                [start, tip],
                tip,
                // Rightward arrow: back along the upper flank, then down the base.
                [
                    (-ARROW_LENGTH_PX, -ARROW_HALF_WIDTH_PX),
                    (0.0, 2.0 * ARROW_HALF_WIDTH_PX),
                ],
                "x",
                tip.shifted(-LABEL_OFFSET_PX, -ascent),
            );
        }
    }

    fn push_axis(
        &self,
        frame: &mut RenderFrame,
        line: [SurfacePoint; 2],
        tip: SurfacePoint,
        arrow_steps: [(f64, f64); 2],
        label: &str,
        label_position: SurfacePoint,
    ) {
        let style = &self.style;

        let axis_line = PathPrimitive::polyline(line, style.axis_stroke.clone(), style.axis_color);
        frame.push(CanvasLayerKind::Axis, DrawCommand::Path(axis_line));

        let arrow = PathPrimitive::polyline(
            arrowhead_vertices(tip, arrow_steps),
            style.axis_stroke.clone(),
            style.axis_color,
        )
        .closed()
        .filled(style.axis_color);
        frame.push(CanvasLayerKind::Axis, DrawCommand::Path(arrow));

        let text = TextPrimitive::new(
            label,
            label_position,
            style.axis_font.clone(),
            style.axis_color,
        );
        frame.push(CanvasLayerKind::Axis, DrawCommand::Text(text));
    }
}

/// Triangle vertices: the tip, then each step applied relative to the
/// previous vertex.
fn arrowhead_vertices(tip: SurfacePoint, steps: [(f64, f64); 2]) -> [SurfacePoint; 3] {
    let first = tip.shifted(steps[0].0, steps[0].1);
    let second = first.shifted(steps[1].0, steps[1].1);
    [tip, first, second]
}

#[cfg(test)]
mod tests {
    use super::arrowhead_vertices;
    use crate::core::SurfacePoint;

    #[test]
    fn arrowhead_steps_are_relative_to_previous_vertex() {
        let tip = SurfacePoint::new(50.0, 0.0);
        let [a, b, c] = arrowhead_vertices(tip, [(5.0, 20.0), (-10.0, 0.0)]);
        assert_eq!(a, tip);
        assert_eq!(b, SurfacePoint::new(55.0, 20.0));
        assert_eq!(c, SurfacePoint::new(45.0, 20.0));
    }
}
