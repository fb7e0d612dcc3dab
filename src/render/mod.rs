mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{DrawCommand, LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::{NullRenderer, RecordingRenderer};
pub use primitives::{
    CirclePrimitive, Color, FontStyle, FontWeight, LineCap, LineJoin, PathCommand, PathPrimitive,
    StrokeStyle, TextPrimitive,
};

use crate::error::GraphResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from range fitting and marker classification.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
