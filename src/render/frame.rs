use crate::core::{SurfaceSize, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::render::{CanvasLayerKind, CirclePrimitive, Color, PathPrimitive, TextPrimitive};

/// One backend-agnostic draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Path(PathPrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> GraphResult<()> {
        match self {
            Self::Path(path) => path.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub commands: Vec<DrawCommand>,
}

/// Scene for one graph draw pass.
///
/// `viewport` is `None` when there was nothing to fit (absent or empty
/// series); such a frame carries no draw commands and renders as background
/// only.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: SurfaceSize,
    pub background: Color,
    pub viewport: Option<Viewport>,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: SurfaceSize, background: Color) -> Self {
        let layers = CanvasLayerKind::CANONICAL_ORDER
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                commands: Vec::new(),
            })
            .collect();
        Self {
            surface,
            background,
            viewport: None,
            layers,
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn push(&mut self, kind: CanvasLayerKind, command: DrawCommand) {
        if let Some(layer) = self.layers.iter_mut().find(|layer| layer.kind == kind) {
            layer.commands.push(command);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> &[DrawCommand] {
        self.layers
            .iter()
            .find(|layer| layer.kind == kind)
            .map(|layer| layer.commands.as_slice())
            .unwrap_or(&[])
    }

    /// All commands in paint order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.layers.iter().flat_map(|layer| layer.commands.iter())
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.commands.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.command_count() == 0
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.surface.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: self.surface.width,
                height: self.surface.height,
            });
        }
        self.background.validate()?;
        if self.viewport.is_none() && !self.is_empty() {
            return Err(GraphError::InvalidData(
                "frame without viewport must not carry draw commands".to_owned(),
            ));
        }
        for command in self.commands() {
            command.validate()?;
        }
        Ok(())
    }
}
