use std::path::Path;

use tracing::{debug, trace, warn};

use crate::core::{Series, SurfaceSize};
use crate::data;
use crate::error::GraphResult;
use crate::render::{RenderFrame, Renderer};

use super::{GraphConfig, GraphRenderer, InvalidationTopic, RenderFlags, RenderRequests};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

type RenderRequestHook = Box<dyn FnMut(InvalidationTopic)>;

/// Host-side graph state: the loaded series, display flags and the target
/// renderer.
///
/// Each setter enqueues exactly one render request and notifies the optional
/// hook, so a toolkit can schedule its own redraw. Rendering itself happens
/// only on [`GraphDisplay::render`] or [`GraphDisplay::render_if_requested`].
pub struct GraphDisplay<R: Renderer> {
    renderer: R,
    graph: GraphRenderer,
    series: Option<Series>,
    flags: RenderFlags,
    surface: SurfaceSize,
    requests: RenderRequests,
    request_hook: Option<RenderRequestHook>,
}

impl<R: Renderer> GraphDisplay<R> {
    pub fn new(renderer: R, config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            graph: GraphRenderer::new(config.style)?,
            series: None,
            flags: config.flags,
            surface: config.surface,
            requests: RenderRequests::default(),
            request_hook: None,
        })
    }

    /// Installs a callback invoked whenever a render request is enqueued.
    pub fn set_render_request_hook(&mut self, hook: impl FnMut(InvalidationTopic) + 'static) {
        self.request_hook = Some(Box::new(hook));
    }

    /// Replaces the displayed series.
    pub fn set_series(&mut self, series: Series) {
        debug!(samples = series.len(), "set series");
        if !series.is_sorted_by_x() {
            warn!("series is not sorted by x; range fitting trusts first and last sample");
        }
        self.series = Some(series);
        self.request_render(InvalidationTopic::Series);
    }

    pub fn clear_series(&mut self) {
        debug!("clear series");
        self.series = None;
        self.request_render(InvalidationTopic::Series);
    }

    /// Loads a data file and installs it when it holds at least one sample.
    ///
    /// Returns `Ok(false)` for an empty file, leaving the current series in
    /// place. Load failures are logged and returned; nothing is installed.
    pub fn load_series_file(&mut self, path: impl AsRef<Path>) -> GraphResult<bool> {
        let path = path.as_ref();
        let series = match data::load_series(path) {
            Ok(series) => series,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load series data file");
                return Err(err);
            }
        };
        if series.is_empty() {
            debug!(path = %path.display(), "data file holds no samples, keeping current series");
            return Ok(false);
        }
        self.set_series(series);
        Ok(true)
    }

    #[must_use]
    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    /// Whether a non-empty series is loaded.
    #[must_use]
    pub fn has_series(&self) -> bool {
        self.series.as_ref().is_some_and(|series| !series.is_empty())
    }

    pub fn set_show_axis(&mut self, show_axis: bool) {
        self.flags.show_axis = show_axis;
        self.request_render(InvalidationTopic::Flags);
    }

    pub fn set_show_markers(&mut self, show_markers: bool) {
        self.flags.show_markers = show_markers;
        self.request_render(InvalidationTopic::Flags);
    }

    pub fn set_flags(&mut self, flags: RenderFlags) {
        self.flags = flags;
        self.request_render(InvalidationTopic::Flags);
    }

    #[must_use]
    pub fn flags(&self) -> RenderFlags {
        self.flags
    }

    pub fn set_surface_size(&mut self, surface: SurfaceSize) -> GraphResult<()> {
        self.surface = surface.validate()?;
        self.request_render(InvalidationTopic::Surface);
        Ok(())
    }

    #[must_use]
    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn render_requests(&self) -> RenderRequests {
        self.requests
    }

    #[must_use]
    pub fn graph_renderer(&self) -> &GraphRenderer {
        &self.graph
    }

    /// Builds the frame for the current state without rendering it.
    pub fn build_frame(&self) -> GraphResult<RenderFrame> {
        self.graph
            .build_frame(self.series.as_ref(), self.flags, self.surface)
    }

    /// Runs one full render pass into the owned renderer.
    pub fn render(&mut self) -> GraphResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        self.requests.mark_rendered();
        Ok(())
    }

    /// Renders only if a request is pending. Returns whether a pass ran.
    pub fn render_if_requested(&mut self) -> GraphResult<bool> {
        if !self.requests.is_pending() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Renders into an external cairo context of the given pixel size.
    ///
    /// Used by toolkit draw callbacks, which own the surface and its size.
    /// A zero-sized allocation draws nothing.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        width: i32,
        height: i32,
    ) -> GraphResult<()>
    where
        R: CairoContextRenderer,
    {
        let surface = SurfaceSize::new(
            u32::try_from(width).unwrap_or(0),
            u32::try_from(height).unwrap_or(0),
        );
        if !surface.is_valid() {
            trace!(width, height, "skipping render on empty allocation");
            return Ok(());
        }
        self.surface = surface;
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.requests.mark_rendered();
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn request_render(&mut self, topic: InvalidationTopic) {
        self.requests.request(topic);
        trace!(
            ?topic,
            requested_total = self.requests.requested_total(),
            "render requested"
        );
        if let Some(hook) = self.request_hook.as_mut() {
            hook(topic);
        }
    }
}
