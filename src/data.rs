//! Binary point-pair data source.
//!
//! A data file is a flat stream of big-endian IEEE-754 `f64` values read as
//! consecutive `(x, y)` pairs. There is no header; the pair count is the byte
//! length divided by 16. Loading is all-or-nothing.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::core::{Sample, Series};
use crate::error::{GraphError, GraphResult};

/// Encoded size of one `(x, y)` pair.
pub const PAIR_SIZE_BYTES: usize = 2 * size_of::<f64>();

/// Decodes a whole byte buffer into a series.
pub fn decode_series(bytes: &[u8]) -> GraphResult<Series> {
    if bytes.len() % PAIR_SIZE_BYTES != 0 {
        return Err(GraphError::MalformedDataSource { len: bytes.len() });
    }

    let samples = bytes
        .chunks_exact(PAIR_SIZE_BYTES)
        .map(|pair| {
            let (x, y) = pair.split_at(size_of::<f64>());
            Sample::new(read_be_f64(x), read_be_f64(y))
        })
        .collect();
    Series::new(samples)
}

/// Reads `reader` to the end and decodes it.
pub fn read_series<R: Read>(mut reader: R) -> GraphResult<Series> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(GraphError::DataStreamUnreadable)?;
    decode_series(&bytes)
}

/// Loads a series from a data file on disk.
pub fn load_series(path: impl AsRef<Path>) -> GraphResult<Series> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| map_io_error(path, source))?;
    let series = decode_series(&bytes)?;
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        samples = series.len(),
        "loaded series data file"
    );
    Ok(series)
}

/// Encodes a series into the data file layout.
#[must_use]
pub fn encode_series(series: &Series) -> Vec<u8> {
    let mut out = Vec::with_capacity(series.len() * PAIR_SIZE_BYTES);
    for sample in series {
        out.extend_from_slice(&sample.x.to_be_bytes());
        out.extend_from_slice(&sample.y.to_be_bytes());
    }
    out
}

/// Writes `series` to `writer` in the data file layout.
pub fn write_series<W: Write>(series: &Series, mut writer: W) -> io::Result<()> {
    writer.write_all(&encode_series(series))?;
    writer.flush()
}

/// Writes `series` to a data file, replacing any existing file.
pub fn save_series(series: &Series, path: impl AsRef<Path>) -> GraphResult<()> {
    let path = path.as_ref();
    fs::write(path, encode_series(series)).map_err(|source| map_io_error(path, source))
}

fn read_be_f64(bytes: &[u8]) -> f64 {
    let mut buf = [0_u8; size_of::<f64>()];
    buf.copy_from_slice(bytes);
    f64::from_be_bytes(buf)
}

fn map_io_error(path: &Path, source: io::Error) -> GraphError {
    if source.kind() == io::ErrorKind::NotFound {
        return GraphError::DataSourceNotFound {
            path: path.to_path_buf(),
        };
    }
    GraphError::DataSourceUnreadable {
        path: path.to_path_buf(),
        source,
    }
}
