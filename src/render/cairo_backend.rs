use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::{trace, warn};

use crate::error::{GraphError, GraphResult};
use crate::render::{
    CirclePrimitive, Color, DrawCommand, FontStyle, FontWeight, LineCap, LineJoin, PathCommand,
    PathPrimitive, RenderFrame, Renderer, StrokeStyle, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// In both modes the context's drawing state is saved before the pass and
/// restored afterwards, whatever path the pass exits through.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GraphResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            GraphError::InvalidData(format!("failed to create {}: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| GraphError::InvalidData(format!("failed to write png: {err}")))
    }

    fn ensure_surface_size(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        let width = to_cairo_dimension(frame.surface.width)?;
        let height = to_cairo_dimension(frame.surface.height)?;
        if self.surface.width() != width || self.surface.height() != height {
            trace!(width, height, "resizing offscreen cairo surface");
            self.surface = create_surface(width, height)?;
        }
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        let _saved = SavedDrawingState::acquire(context)?;

        apply_color(context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for command in frame.commands() {
            match command {
                DrawCommand::Path(path) => {
                    draw_path(context, path)?;
                    stats.paths_drawn += 1;
                }
                DrawCommand::Circle(circle) => {
                    draw_circle(context, circle)?;
                    stats.circles_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        self.ensure_surface_size(frame)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Saves the context state on creation and restores it on drop.
struct SavedDrawingState<'a> {
    context: &'a Context,
}

impl<'a> SavedDrawingState<'a> {
    fn acquire(context: &'a Context) -> GraphResult<Self> {
        context
            .save()
            .map_err(|err| map_backend_error("failed to save drawing state", err))?;
        Ok(Self { context })
    }
}

impl Drop for SavedDrawingState<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.context.restore() {
            warn!(error = %err, "failed to restore cairo drawing state");
        }
    }
}

fn draw_path(context: &Context, path: &PathPrimitive) -> GraphResult<()> {
    context.new_path();
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo(point) => context.move_to(point.x, point.y),
            PathCommand::LineTo(point) => context.line_to(point.x, point.y),
            PathCommand::Close => context.close_path(),
        }
    }
    fill_and_stroke(context, path.fill_color, &path.stroke, path.stroke_color)
}

fn draw_circle(context: &Context, circle: &CirclePrimitive) -> GraphResult<()> {
    context.new_path();
    context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
    context.close_path();
    fill_and_stroke(
        context,
        Some(circle.fill_color),
        &circle.stroke,
        circle.stroke_color,
    )
}

fn fill_and_stroke(
    context: &Context,
    fill_color: Option<Color>,
    stroke: &StrokeStyle,
    stroke_color: Color,
) -> GraphResult<()> {
    if let Some(fill_color) = fill_color {
        apply_color(context, fill_color);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
    }
    apply_stroke(context, stroke);
    apply_color(context, stroke_color);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke path", err))
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description(&text.font)));
    layout.set_text(&text.text);

    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
    apply_color(context, text.color);
    context.move_to(text.position.x, text.position.y - baseline);
    pangocairo::functions::show_layout(context, &layout);
}

fn font_description(font: &FontStyle) -> FontDescription {
    let mut description = FontDescription::new();
    description.set_family(&font.family);
    description.set_weight(match font.weight {
        FontWeight::Normal => pango::Weight::Normal,
        FontWeight::Bold => pango::Weight::Bold,
    });
    description.set_absolute_size(font.size_px * f64::from(pango::SCALE));
    description
}

fn apply_stroke(context: &Context, stroke: &StrokeStyle) {
    context.set_line_width(stroke.width);
    context.set_line_cap(match stroke.cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    });
    context.set_line_join(match stroke.join {
        LineJoin::Miter => cairo::LineJoin::Miter,
        LineJoin::Round => cairo::LineJoin::Round,
        LineJoin::Bevel => cairo::LineJoin::Bevel,
    });
    context.set_miter_limit(stroke.miter_limit);
    context.set_dash(&stroke.dash_pattern, stroke.dash_offset);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn create_surface(width: i32, height: i32) -> GraphResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(GraphError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn to_cairo_dimension(value: u32) -> GraphResult<i32> {
    i32::try_from(value).map_err(|_| {
        GraphError::InvalidData(format!("surface dimension {value} exceeds cairo limits"))
    })
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GraphError {
    GraphError::InvalidData(format!("{prefix}: {err}"))
}
