use std::collections::HashMap;

use crate::core::NormalizedPlots;
use crate::error::ViewerResult;
use crate::render::{
    ChartId, DockSide, ElementId, PanelId, RegionExtent, RegionId, RenderEngine, ViewStateId,
};

/// Markup element recorded by the null engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDiv {
    pub chart: ChartId,
    pub markup: String,
    pub dock: DockSide,
}

/// No-op engine used by tests and headless adapter usage.
///
/// It performs no drawing but records every operation, so tests can assert
/// region insertion order, show calls, session construction, and appended
/// markup without a real backend.
#[derive(Debug, Default)]
pub struct NullEngine {
    next_id: u32,
    default_region_height: f64,
    children: HashMap<RegionId, Vec<RegionId>>,
    extents: HashMap<RegionId, RegionExtent>,
    heights: HashMap<RegionId, f64>,
    pub overflow_suppressed: Vec<RegionId>,
    pub show_calls: Vec<(RegionId, NormalizedPlots)>,
    pub charts: Vec<(ChartId, RegionId)>,
    pub navigation_panels: Vec<(PanelId, ChartId, RegionId)>,
    pub view_states_created: u32,
    pub divs: Vec<RecordedDiv>,
}

const DEFAULT_REGION_HEIGHT: f64 = 480.0;

impl NullEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_region_height: DEFAULT_REGION_HEIGHT,
            ..Self::default()
        }
    }

    /// Allocates a root region standing in for the host container.
    pub fn host_region(&mut self) -> RegionId {
        let region = RegionId(self.alloc());
        self.children.entry(region).or_default();
        region
    }

    #[must_use]
    pub fn children_of(&self, region: RegionId) -> &[RegionId] {
        match self.children.get(&region) {
            Some(children) => children,
            None => &[],
        }
    }

    #[must_use]
    pub fn extent_of(&self, region: RegionId) -> Option<RegionExtent> {
        self.extents.get(&region).copied()
    }

    #[must_use]
    pub fn height_of(&self, region: RegionId) -> Option<f64> {
        self.heights.get(&region).copied()
    }

    fn alloc(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl RenderEngine for NullEngine {
    fn show(&mut self, container: RegionId, plots: &NormalizedPlots) -> ViewerResult<()> {
        self.show_calls.push((container, plots.clone()));
        Ok(())
    }

    fn suppress_overflow(&mut self, region: RegionId) {
        self.overflow_suppressed.push(region);
    }

    fn append_region(&mut self, parent: RegionId, extent: RegionExtent) -> RegionId {
        let region = RegionId(self.alloc());
        self.children.entry(parent).or_default().push(region);
        self.children.entry(region).or_default();
        self.extents.insert(region, extent);
        region
    }

    fn region_height(&mut self, region: RegionId) -> f64 {
        self.heights
            .get(&region)
            .copied()
            .unwrap_or(self.default_region_height)
    }

    fn set_region_height(&mut self, region: RegionId, height: f64) {
        self.heights.insert(region, height);
    }

    fn as_plot(&mut self, region: RegionId) -> ChartId {
        let chart = ChartId(self.alloc());
        self.charts.push((chart, region));
        chart
    }

    fn navigation_panel(&mut self, chart: ChartId, region: RegionId) -> PanelId {
        let panel = PanelId(self.alloc());
        self.navigation_panels.push((panel, chart, region));
        panel
    }

    fn persistent_view_state(&mut self) -> ViewStateId {
        self.view_states_created += 1;
        ViewStateId(self.alloc())
    }

    fn add_div(&mut self, chart: ChartId, markup: &str, dock: DockSide) -> ElementId {
        let element = ElementId(self.alloc());
        self.divs.push(RecordedDiv {
            chart,
            markup: markup.to_owned(),
            dock,
        });
        element
    }
}
