mod axis_frame_builder;
mod config;
mod display;
mod flags;
mod function_path_frame_builder;
mod graph_renderer;
mod invalidation;
mod marker_frame_builder;
mod style;

pub use config::GraphConfig;
pub use display::GraphDisplay;
pub use flags::RenderFlags;
pub use graph_renderer::GraphRenderer;
pub use invalidation::{InvalidationTopic, RenderRequests};
pub use style::StyleSet;
