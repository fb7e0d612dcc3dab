use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use graph_rs::api::{GraphConfig, GraphDisplay, InvalidationTopic, RenderFlags};
use graph_rs::core::{Series, SurfaceSize};
use graph_rs::data::save_series;
use graph_rs::render::{CanvasLayerKind, NullRenderer, RecordingRenderer};
use graph_rs::GraphError;

fn display() -> GraphDisplay<RecordingRenderer> {
    GraphDisplay::new(
        RecordingRenderer::default(),
        GraphConfig::new(SurfaceSize::new(100, 100)),
    )
    .expect("display init")
}

fn parabola() -> Series {
    Series::from_pairs([(-2.0, 4.0), (0.0, 0.0), (2.0, 4.0)]).expect("valid series")
}

fn temp_data_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "graph_rs_display_{}_{}.bin",
        std::process::id(),
        name
    ))
}

#[test]
fn fresh_display_has_no_series_and_no_pending_request() {
    let display = display();
    assert!(!display.has_series());
    assert!(display.series().is_none());
    assert!(!display.render_requests().is_pending());
    assert_eq!(display.flags(), RenderFlags::default());
    assert_eq!(display.surface_size(), SurfaceSize::new(100, 100));
}

#[test]
fn each_mutation_enqueues_exactly_one_request() {
    let mut display = display();

    display.set_series(parabola());
    assert_eq!(display.render_requests().requested_total(), 1);
    assert_eq!(
        display.render_requests().last_topic(),
        Some(InvalidationTopic::Series)
    );

    display.set_show_axis(false);
    assert_eq!(display.render_requests().requested_total(), 2);
    display.set_show_markers(false);
    assert_eq!(display.render_requests().requested_total(), 3);
    assert_eq!(
        display.render_requests().last_topic(),
        Some(InvalidationTopic::Flags)
    );

    // Unchanged values still request a repaint.
    display.set_show_markers(false);
    assert_eq!(display.render_requests().requested_total(), 4);

    display
        .set_surface_size(SurfaceSize::new(320, 200))
        .expect("resize");
    assert_eq!(display.render_requests().requested_total(), 5);
    assert_eq!(
        display.render_requests().last_topic(),
        Some(InvalidationTopic::Surface)
    );
    assert_eq!(display.renderer().frames().len(), 0);
}

#[test]
fn pending_requests_coalesce_into_one_render() {
    let mut display = display();
    display.set_series(parabola());
    display.set_show_axis(false);

    assert!(display.render_if_requested().expect("render"));
    assert!(!display.render_if_requested().expect("idle"));
    assert_eq!(display.renderer().frames().len(), 1);
    assert_eq!(display.render_requests().rendered_total(), 1);
    assert!(!display.render_requests().is_pending());
    assert!(
        display
            .renderer()
            .last_layer(CanvasLayerKind::Axis)
            .is_empty()
    );
}

#[test]
fn hook_sees_every_request_topic() {
    let mut display = display();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    display.set_render_request_hook(move |topic| sink.borrow_mut().push(topic));

    display.set_series(parabola());
    display.set_flags(RenderFlags::path_only());
    display.clear_series();

    assert_eq!(
        *seen.borrow(),
        vec![
            InvalidationTopic::Series,
            InvalidationTopic::Flags,
            InvalidationTopic::Series
        ]
    );
}

#[test]
fn rejected_resize_keeps_previous_surface_and_enqueues_nothing() {
    let mut display = display();
    let err = display
        .set_surface_size(SurfaceSize::new(0, 50))
        .expect_err("zero width must fail");
    assert!(matches!(err, GraphError::InvalidViewport { .. }));
    assert_eq!(display.surface_size(), SurfaceSize::new(100, 100));
    assert_eq!(display.render_requests().requested_total(), 0);
}

#[test]
fn flag_toggles_change_rendered_layers() {
    let mut display = GraphDisplay::new(
        NullRenderer::default(),
        GraphConfig::new(SurfaceSize::new(100, 100)),
    )
    .expect("display init");
    display.set_series(parabola());

    display.render().expect("render");
    assert_eq!(display.renderer().last_text_count, 2);
    assert_eq!(display.renderer().last_path_count, 8);

    display.set_show_axis(false);
    display.render().expect("render");
    assert_eq!(display.renderer().last_text_count, 0);
    assert_eq!(display.renderer().last_path_count, 4);

    display.set_show_markers(false);
    display.render().expect("render");
    assert_eq!(display.renderer().last_path_count, 1);
    assert_eq!(display.renderer().frames_rendered, 3);
}

#[test]
fn load_series_file_installs_non_empty_data() {
    let path = temp_data_path("loaded");
    save_series(&parabola(), &path).expect("write data file");

    let mut display = display();
    let installed = display.load_series_file(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    assert!(installed);
    assert!(display.has_series());
    assert_eq!(display.series(), Some(&parabola()));
    assert_eq!(display.render_requests().requested_total(), 1);
}

#[test]
fn empty_data_file_keeps_current_series() {
    let path = temp_data_path("empty");
    std::fs::write(&path, b"").expect("write empty file");

    let mut display = display();
    display.set_series(parabola());
    let installed = display.load_series_file(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    assert!(!installed);
    assert_eq!(display.series(), Some(&parabola()));
    assert_eq!(display.render_requests().requested_total(), 1);
}

#[test]
fn failed_loads_leave_state_untouched() {
    let mut display = display();
    display.set_series(parabola());

    let missing = temp_data_path("missing");
    let err = display
        .load_series_file(&missing)
        .expect_err("missing file must fail");
    assert!(matches!(err, GraphError::DataSourceNotFound { .. }));

    let malformed = temp_data_path("malformed");
    std::fs::write(&malformed, [0_u8; 24]).expect("write malformed file");
    let err = display
        .load_series_file(&malformed)
        .expect_err("partial pair must fail");
    let _ = std::fs::remove_file(&malformed);
    assert!(matches!(err, GraphError::MalformedDataSource { len: 24 }));

    assert_eq!(display.series(), Some(&parabola()));
    assert_eq!(display.render_requests().requested_total(), 1);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let result = GraphDisplay::new(
        NullRenderer::default(),
        GraphConfig::new(SurfaceSize::new(0, 0)),
    );
    assert!(result.is_err());
}
