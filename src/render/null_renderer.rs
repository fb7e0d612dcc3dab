use crate::error::GraphResult;
use crate::render::{CanvasLayerKind, DrawCommand, RenderFrame, Renderer};

/// Renderer that validates frames and only keeps draw-call counts.
///
/// Used for headless display usage and count-based tests.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_path_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_path_count = 0;
        self.last_circle_count = 0;
        self.last_text_count = 0;
        for command in frame.commands() {
            match command {
                DrawCommand::Path(_) => self.last_path_count += 1,
                DrawCommand::Circle(_) => self.last_circle_count += 1,
                DrawCommand::Text(_) => self.last_text_count += 1,
            }
        }
        Ok(())
    }
}

/// In-memory surface that records every frame it receives.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<RenderFrame>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    /// Commands of `kind` from the most recent frame.
    #[must_use]
    pub fn last_layer(&self, kind: CanvasLayerKind) -> &[DrawCommand] {
        self.last_frame()
            .map(|frame| frame.layer(kind))
            .unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.frames.push(frame.clone());
        Ok(())
    }
}
