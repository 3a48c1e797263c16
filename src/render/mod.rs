mod null_engine;

pub use null_engine::{NullEngine, RecordedDiv};

use crate::core::NormalizedPlots;
use crate::error::ViewerResult;

/// Handle to a layout region owned by the engine (a container or a child
/// region inserted into one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(pub u32);

/// Handle to a chart constructed from a region via `as_plot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartId(pub u32);

/// Handle to a navigation panel bound to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u32);

/// Handle to one shared pan/zoom/selection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewStateId(pub u32);

/// Handle to a markup element appended to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Horizontal sizing of a child region inside its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionExtent {
    FixedWidth(f64),
    Fill,
}

/// Dock side for markup elements appended to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockSide {
    Bottom,
    Left,
}

/// Contract implemented by the underlying visualization engine.
///
/// The adapter drives the engine exclusively through this trait; drawing,
/// asynchronous resource loading, and interaction stay behind it. Child
/// regions keep insertion order within their parent, which determines
/// side-by-side placement in the host's layout model.
pub trait RenderEngine {
    /// Single-call default renderer: the engine owns all internal layout.
    fn show(&mut self, container: RegionId, plots: &NormalizedPlots) -> ViewerResult<()>;

    /// Configures a region to suppress content overflow.
    fn suppress_overflow(&mut self, region: RegionId);

    /// Appends a child region to `parent` and returns its handle.
    fn append_region(&mut self, parent: RegionId, extent: RegionExtent) -> RegionId;

    fn region_height(&mut self, region: RegionId) -> f64;

    fn set_region_height(&mut self, region: RegionId, height: f64);

    /// Constructs a chart handle from a region.
    fn as_plot(&mut self, region: RegionId) -> ChartId;

    /// Binds a navigation panel to a chart inside `region`.
    fn navigation_panel(&mut self, chart: ChartId, region: RegionId) -> PanelId;

    /// Creates a fresh shared view-state session.
    fn persistent_view_state(&mut self) -> ViewStateId;

    /// Appends a markup element docked to one side of the chart.
    fn add_div(&mut self, chart: ChartId, markup: &str, dock: DockSide) -> ElementId;
}
