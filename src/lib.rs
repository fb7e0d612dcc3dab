//! graph-rs: function graph rendering with aspect-preserving fit.
//!
//! A series of `(x, y)` samples is fitted into a surface with one uniform
//! scale, then drawn as a dashed polyline with optional coordinate axes and
//! per-point markers. Drawing goes through a backend-agnostic
//! [`render::RenderFrame`], so the fitting and classification logic can be
//! tested without any toolkit.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{GraphConfig, GraphDisplay, GraphRenderer, RenderFlags, StyleSet};
pub use error::{GraphError, GraphResult};
