//! Top-level entry point: the layout composer.
//!
//! `show` normalizes all plots once, then takes exactly one of two render
//! paths chosen by `Chart::layout`. The Default path hands the whole
//! normalized map to the engine's single-call renderer. The Lean path
//! builds a split container with a fixed-width navigation panel, drives
//! the registry per plot against one shared view-state, and appends
//! aggregated axis-title elements when non-empty.

mod plot_registry;

pub use plot_registry::{NoopHandler, PlotHandler, PlotRegistry, PluginState};

use tracing::{debug, trace};

use crate::core::{AxisRole, Chart, ChartLayout, aggregate_axis_title, normalize_plots};
use crate::error::ViewerResult;
use crate::render::{DockSide, RegionExtent, RegionId, RenderEngine};

/// Width of the Lean layout's navigation-panel region, in pixels.
pub const NAV_PANEL_WIDTH_PX: f64 = 200.0;

/// Renders `chart` into the host container.
///
/// One-shot: the call either runs to completion or surfaces the first
/// failure, leaving the container partially modified. Clearing previously
/// rendered content before re-invoking is the caller's responsibility.
pub fn show(
    chart: &Chart,
    host: RegionId,
    engine: &mut dyn RenderEngine,
    registry: &PlotRegistry,
) -> ViewerResult<()> {
    debug!(plots = chart.plots.len(), layout = ?chart.layout, "rendering chart");
    match chart.layout {
        ChartLayout::Default => engine.show(host, &normalize_plots(&chart.plots)),
        ChartLayout::Lean => show_lean(chart, host, engine, registry),
    }
}

fn show_lean(
    chart: &Chart,
    host: RegionId,
    engine: &mut dyn RenderEngine,
    registry: &PlotRegistry,
) -> ViewerResult<()> {
    engine.suppress_overflow(host);

    // The panel region must be inserted before the chart region: insertion
    // order determines side-by-side placement in the host's layout model.
    let panel_region = engine.append_region(host, RegionExtent::FixedWidth(NAV_PANEL_WIDTH_PX));
    let chart_region = engine.append_region(host, RegionExtent::Fill);
    let host_height = engine.region_height(host);
    engine.set_region_height(chart_region, host_height);

    let chart_handle = engine.as_plot(chart_region);
    let _panel = engine.navigation_panel(chart_handle, panel_region);
    let view_state = engine.persistent_view_state();

    let normalized = normalize_plots(&chart.plots);
    for ((index, bag), plot) in normalized.iter().zip(&chart.plots) {
        trace!(index, kind = %plot.kind, "dispatching plot");
        let handler = registry.resolve(&plot.kind);
        let mut state = handler.initialize(bag, view_state, chart_handle, engine)?;
        handler.draw(&mut state, bag, engine)?;
    }

    let x_title = aggregate_axis_title(&chart.plots, AxisRole::X);
    if !x_title.is_empty() {
        engine.add_div(chart_handle, &bottom_title_markup(&x_title), DockSide::Bottom);
    }
    let y_title = aggregate_axis_title(&chart.plots, AxisRole::Y);
    if !y_title.is_empty() {
        engine.add_div(chart_handle, &left_title_markup(&y_title), DockSide::Left);
    }

    Ok(())
}

fn bottom_title_markup(title: &str) -> String {
    format!(
        r#"<div class="plotview-axis-title" style="text-align: center">{}</div>"#,
        escape_html(title)
    )
}

fn left_title_markup(title: &str) -> String {
    format!(
        r#"<div class="plotview-axis-title" style="writing-mode: vertical-rl; transform: rotate(180deg)">{}</div>"#,
        escape_html(title)
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{bottom_title_markup, escape_html};

    #[test]
    fn html_metacharacters_are_escaped() {
        assert_eq!(
            escape_html(r#"<Voltage> & "Current""#),
            "&lt;Voltage&gt; &amp; &quot;Current&quot;"
        );
    }

    #[test]
    fn bottom_markup_embeds_escaped_title() {
        let markup = bottom_title_markup("V < I");
        assert!(markup.contains("V &lt; I"));
        assert!(markup.contains("text-align: center"));
    }
}
