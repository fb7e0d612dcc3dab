use serde::{Deserialize, Serialize};

/// Display toggles owned by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderFlags {
    pub show_axis: bool,
    pub show_markers: bool,
}

impl RenderFlags {
    #[must_use]
    pub const fn new(show_axis: bool, show_markers: bool) -> Self {
        Self {
            show_axis,
            show_markers,
        }
    }

    /// Function path only.
    #[must_use]
    pub const fn path_only() -> Self {
        Self::new(false, false)
    }
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self::new(true, true)
    }
}
