use serde::{Deserialize, Serialize};

use crate::core::SurfaceSize;
use crate::error::{GraphError, GraphResult};

use super::{RenderFlags, StyleSet};

/// Public display bootstrap configuration.
///
/// Serializable so hosts can persist and reload their graph setup; every
/// field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub surface: SurfaceSize,
    pub flags: RenderFlags,
    pub style: StyleSet,
}

impl GraphConfig {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: RenderFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        self.surface.validate()?;
        self.style.validate()
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| GraphError::InvalidData(format!("failed to parse config json: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            GraphError::InvalidData(format!("failed to serialize config json: {err}"))
        })
    }
}
