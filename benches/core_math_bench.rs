use criterion::{Criterion, criterion_group, criterion_main};
use graph_rs::api::{GraphRenderer, RenderFlags};
use graph_rs::core::{MarkerKind, Series, SurfaceSize, Viewport, project_series};
use graph_rs::data::{decode_series, encode_series};
use std::hint::black_box;

fn parabola(samples: usize) -> Series {
    Series::from_pairs((0..samples).map(|i| {
        let x = -50.0 + 100.0 * i as f64 / samples as f64;
        (x, x * x)
    }))
    .expect("valid generated series")
}

fn bench_viewport_fit_10k(c: &mut Criterion) {
    let series = parabola(10_000);
    let surface = SurfaceSize::new(1920, 1080);

    c.bench_function("viewport_fit_10k", |b| {
        b.iter(|| {
            let _ = Viewport::compute(black_box(&series), black_box(surface))
                .expect("fit should succeed");
        })
    });
}

fn bench_series_projection_10k(c: &mut Criterion) {
    let series = parabola(10_000);
    let viewport =
        Viewport::compute(&series, SurfaceSize::new(1920, 1080)).expect("fit should succeed");

    c.bench_function("series_projection_10k", |b| {
        b.iter(|| {
            let _ = project_series(black_box(&series), black_box(&viewport));
        })
    });
}

fn bench_marker_classification_10k(c: &mut Criterion) {
    let series = parabola(10_000);

    c.bench_function("marker_classification_10k", |b| {
        b.iter(|| {
            series
                .iter()
                .filter(|sample| MarkerKind::classify(black_box(sample.y)) == MarkerKind::Star)
                .count()
        })
    });
}

fn bench_full_frame_2k(c: &mut Criterion) {
    let series = parabola(2_000);
    let renderer = GraphRenderer::default();
    let surface = SurfaceSize::new(1600, 900);

    c.bench_function("full_frame_2k", |b| {
        b.iter(|| {
            let _ = renderer
                .build_frame(Some(black_box(&series)), RenderFlags::default(), surface)
                .expect("frame should build");
        })
    });
}

fn bench_data_decode_10k(c: &mut Criterion) {
    let bytes = encode_series(&parabola(10_000));

    c.bench_function("data_decode_10k", |b| {
        b.iter(|| {
            let _ = decode_series(black_box(&bytes)).expect("decode should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_viewport_fit_10k,
    bench_series_projection_10k,
    bench_marker_classification_10k,
    bench_full_frame_2k,
    bench_data_decode_10k
);
criterion_main!(benches);
