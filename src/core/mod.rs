pub mod normalize;
pub mod titles;
pub mod types;

pub use normalize::{NormalizedPlots, normalize_plots};
pub use titles::aggregate_axis_title;
pub use types::{Axis, AxisRole, Chart, ChartLayout, Plot, PlotTitles, PropertyBag};
