use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{GraphConfig, GraphDisplay, RenderFlags};
use crate::core::Series;
use crate::error::GraphResult;
use crate::render::CairoRenderer;

/// `DrawingArea` bound to a [`GraphDisplay`].
///
/// Display mutations queue a GTK redraw; the draw callback renders with the
/// area's current allocation as surface size. Window and menu construction
/// stay with the host application.
pub struct GtkGraphAdapter {
    area: gtk::DrawingArea,
    display: Rc<RefCell<GraphDisplay<CairoRenderer>>>,
}

impl GtkGraphAdapter {
    pub fn new(config: GraphConfig) -> GraphResult<Self> {
        let renderer = CairoRenderer::new(1, 1)?;
        let surface = config.surface;
        let display = Rc::new(RefCell::new(GraphDisplay::new(renderer, config)?));

        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(surface.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(surface.height).unwrap_or(i32::MAX));
        area.set_hexpand(true);
        area.set_vexpand(true);

        let weak_area = area.downgrade();
        display
            .borrow_mut()
            .set_render_request_hook(move |_topic| {
                if let Some(area) = weak_area.upgrade() {
                    area.queue_draw();
                }
            });

        let draw_display = Rc::clone(&display);
        area.set_draw_func(move |_area, context, width, height| {
            let mut display = draw_display.borrow_mut();
            if let Err(err) = display.render_on_cairo_context(context, width, height) {
                warn!(error = %err, "graph draw callback failed");
            }
        });

        Ok(Self { area, display })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    pub fn set_series(&self, series: Series) {
        self.display.borrow_mut().set_series(series);
    }

    /// Target of a host "open file" action.
    pub fn load_series_file(&self, path: impl AsRef<Path>) -> GraphResult<bool> {
        self.display.borrow_mut().load_series_file(path)
    }

    /// Whether display toggles should be enabled in the host's menus.
    #[must_use]
    pub fn has_series(&self) -> bool {
        self.display.borrow().has_series()
    }

    pub fn set_show_axis(&self, show_axis: bool) {
        self.display.borrow_mut().set_show_axis(show_axis);
    }

    pub fn set_show_markers(&self, show_markers: bool) {
        self.display.borrow_mut().set_show_markers(show_markers);
    }

    #[must_use]
    pub fn flags(&self) -> RenderFlags {
        self.display.borrow().flags()
    }
}
