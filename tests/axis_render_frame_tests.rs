use approx::assert_relative_eq;
use graph_rs::api::{GraphRenderer, RenderFlags};
use graph_rs::core::{Series, SurfacePoint, SurfaceSize};
use graph_rs::render::{CanvasLayerKind, DrawCommand, PathPrimitive, RenderFrame, TextPrimitive};

fn axis_frame(pairs: &[(f64, f64)], width: u32, height: u32) -> RenderFrame {
    let series = Series::from_pairs(pairs.iter().copied()).expect("valid series");
    GraphRenderer::default()
        .build_frame(
            Some(&series),
            RenderFlags::new(true, false),
            SurfaceSize::new(width, height),
        )
        .expect("frame")
}

fn axis_labels(frame: &RenderFrame) -> Vec<&TextPrimitive> {
    frame
        .layer(CanvasLayerKind::Axis)
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
        .collect()
}

fn axis_paths(frame: &RenderFrame) -> Vec<&PathPrimitive> {
    frame
        .layer(CanvasLayerKind::Axis)
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Path(path) => Some(path),
            _ => None,
        })
        .collect()
}

#[test]
fn single_quadrant_series_draws_no_axis() {
    let frame = axis_frame(&[(10.0, 10.0), (20.0, 20.0)], 100, 100);
    assert!(frame.layer(CanvasLayerKind::Axis).is_empty());
}

#[test]
fn x_straddling_zero_draws_only_y_axis() {
    let frame = axis_frame(&[(-5.0, 10.0), (5.0, 20.0)], 100, 100);
    let labels = axis_labels(&frame);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].text, "y");
    assert_eq!(axis_paths(&frame).len(), 2);
}

#[test]
fn y_straddling_zero_draws_only_x_axis() {
    let frame = axis_frame(&[(10.0, -5.0), (20.0, 5.0)], 100, 100);
    let labels = axis_labels(&frame);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].text, "x");
}

#[test]
fn origin_inside_range_draws_both_axes_y_first() {
    let frame = axis_frame(&[(-2.0, 4.0), (0.0, 0.0), (2.0, 4.0)], 100, 100);
    let labels: Vec<&str> = axis_labels(&frame)
        .iter()
        .map(|label| label.text.as_str())
        .collect();
    assert_eq!(labels, vec!["y", "x"]);
}

#[test]
fn y_axis_runs_top_to_bottom_with_upward_arrow() {
    let frame = axis_frame(&[(-2.0, 4.0), (0.0, 0.0), (2.0, 4.0)], 100, 100);
    let paths = axis_paths(&frame);

    let line: Vec<SurfacePoint> = paths[0].vertices().collect();
    assert_eq!(
        line,
        vec![SurfacePoint::new(50.0, 0.0), SurfacePoint::new(50.0, 100.0)]
    );

    let arrow = paths[1];
    assert!(arrow.is_closed());
    assert!(arrow.fill_color.is_some());
    let vertices: Vec<SurfacePoint> = arrow.vertices().collect();
    assert_eq!(
        vertices,
        vec![
            SurfacePoint::new(50.0, 0.0),
            SurfacePoint::new(55.0, 20.0),
            SurfacePoint::new(45.0, 20.0),
        ]
    );
}

#[test]
fn x_axis_runs_left_to_right_with_rightward_arrow() {
    let frame = axis_frame(&[(-2.0, 4.0), (0.0, 0.0), (2.0, 4.0)], 100, 100);
    let paths = axis_paths(&frame);

    let line: Vec<SurfacePoint> = paths[2].vertices().collect();
    assert_eq!(
        line,
        vec![SurfacePoint::new(0.0, 100.0), SurfacePoint::new(100.0, 100.0)]
    );

    let vertices: Vec<SurfacePoint> = paths[3].vertices().collect();
    assert_eq!(
        vertices,
        vec![
            SurfacePoint::new(100.0, 100.0),
            SurfacePoint::new(80.0, 95.0),
            SurfacePoint::new(80.0, 105.0),
        ]
    );
}

#[test]
fn labels_sit_beside_arrow_tips() {
    let renderer = GraphRenderer::default();
    let ascent = renderer.style().axis_font.ascent_px();
    let frame = axis_frame(&[(-2.0, 4.0), (0.0, 0.0), (2.0, 4.0)], 100, 100);
    let labels = axis_labels(&frame);

    // "y": right of and below the top tip.
    assert_relative_eq!(labels[0].position.x, 60.0);
    assert_relative_eq!(labels[0].position.y, ascent);
    // "x": left of and above the right tip.
    assert_relative_eq!(labels[1].position.x, 90.0);
    assert_relative_eq!(labels[1].position.y, 100.0 - ascent);
    assert_eq!(labels[0].font, renderer.style().axis_font);
}

#[test]
fn axes_use_solid_axis_stroke() {
    let renderer = GraphRenderer::default();
    let frame = axis_frame(&[(-2.0, 4.0), (0.0, 0.0), (2.0, 4.0)], 100, 100);
    for path in axis_paths(&frame) {
        assert_eq!(path.stroke, renderer.style().axis_stroke);
        assert!(!path.stroke.is_dashed());
        assert_eq!(path.stroke_color, renderer.style().axis_color);
    }
}
