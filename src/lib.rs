//! plotview-rs: rendering adapter for declarative chart specifications.
//!
//! This crate flattens serializable plot descriptors into renderer-ready
//! property bags, aggregates shared axis titles, and dispatches each plot
//! to a kind-specific handler behind an engine-agnostic `RenderEngine`
//! trait. The engine itself (drawing, pan/zoom, fonts) stays a black box.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{NoopHandler, PlotHandler, PlotRegistry, PluginState, show};
pub use core::{Chart, ChartLayout, Plot, PlotTitles};
pub use error::{ViewerError, ViewerResult};
