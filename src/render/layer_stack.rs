use serde::{Deserialize, Serialize};

/// Drawing layers of one graph frame.
///
/// Layers are replayed in [`CanvasLayerKind::CANONICAL_ORDER`]; a later layer
/// paints over an earlier one wherever they overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Axis,
    Series,
    Markers,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 3] = [Self::Axis, Self::Series, Self::Markers];

    #[must_use]
    pub fn z_index(self) -> usize {
        match self {
            Self::Axis => 0,
            Self::Series => 1,
            Self::Markers => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn canonical_order_matches_z_index() {
        for (index, kind) in CanvasLayerKind::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(kind.z_index(), index);
        }
    }
}
