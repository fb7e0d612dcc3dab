use std::io::Cursor;
use std::path::PathBuf;

use graph_rs::GraphError;
use graph_rs::core::{Sample, Series};
use graph_rs::data::{
    PAIR_SIZE_BYTES, decode_series, encode_series, load_series, read_series, save_series,
    write_series,
};

fn temp_data_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "graph_rs_data_{}_{}.bin",
        std::process::id(),
        name
    ))
}

#[test]
fn saved_file_loads_back_in_order() {
    let series = Series::from_pairs([(-1.5, 2.25), (0.0, 0.0), (1.5, 2.25), (3.0, -9.0)])
        .expect("valid series");
    let path = temp_data_path("round_trip");

    save_series(&series, &path).expect("save");
    let bytes = std::fs::metadata(&path).expect("metadata").len();
    let loaded = load_series(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(bytes, (series.len() * PAIR_SIZE_BYTES) as u64);
    assert_eq!(loaded, series);
}

#[test]
fn layout_is_big_endian_x_then_y() {
    let series = Series::from_pairs([(1.0, -2.0)]).expect("series");
    let bytes = encode_series(&series);

    let mut expected = 1.0_f64.to_be_bytes().to_vec();
    expected.extend_from_slice(&(-2.0_f64).to_be_bytes());
    assert_eq!(bytes, expected);
    assert_eq!(
        decode_series(&bytes).expect("decode").samples(),
        &[Sample::new(1.0, -2.0)]
    );
}

#[test]
fn stream_reader_and_writer_share_layout() {
    let series = Series::from_pairs([(0.5, 8.0), (1.0, 27.0)]).expect("series");
    let mut buffer = Vec::new();
    write_series(&series, &mut buffer).expect("write");

    let decoded = read_series(Cursor::new(buffer)).expect("decode");
    assert_eq!(decoded, series);
}

#[test]
fn missing_file_reports_not_found() {
    let path = temp_data_path("does_not_exist");
    let err = load_series(&path).expect_err("missing file must fail");
    match err {
        GraphError::DataSourceNotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn directory_is_unreadable_not_missing() {
    let err = load_series(std::env::temp_dir()).expect_err("directory must fail");
    assert!(matches!(err, GraphError::DataSourceUnreadable { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn trailing_partial_pair_rejects_whole_file() {
    let mut bytes = encode_series(&Series::from_pairs([(1.0, 1.0)]).expect("series"));
    bytes.extend_from_slice(&2.0_f64.to_be_bytes());

    let err = decode_series(&bytes).expect_err("partial pair must fail");
    assert!(matches!(err, GraphError::MalformedDataSource { len: 24 }));
}

#[test]
fn non_finite_values_are_invalid_data() {
    let mut bytes = 0.0_f64.to_be_bytes().to_vec();
    bytes.extend_from_slice(&f64::NAN.to_be_bytes());

    let err = decode_series(&bytes).expect_err("NaN sample must fail");
    assert!(matches!(err, GraphError::InvalidData(_)));
}
