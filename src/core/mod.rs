pub mod mapper;
pub mod markers;
pub mod series;
pub mod types;

pub use mapper::{DataRange, MIN_SPAN, Viewport, project_series};
pub use markers::{MarkerKind, STAR_DIGIT_SUM_LIMIT, digit_sum};
pub use series::Series;
pub use types::{Sample, SurfacePoint, SurfaceSize};
