use std::path::PathBuf;

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series must contain at least one sample")]
    EmptySeries,

    #[error("data source not found: {}", path.display())]
    DataSourceNotFound { path: PathBuf },

    #[error("failed to read data source {}: {source}", path.display())]
    DataSourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read data stream: {0}")]
    DataStreamUnreadable(#[source] std::io::Error),

    #[error("malformed data source: {len} bytes is not a whole number of (x, y) pairs")]
    MalformedDataSource { len: usize },
}
