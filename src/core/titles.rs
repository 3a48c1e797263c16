use smallvec::SmallVec;

use crate::core::types::{AxisRole, Plot};

/// Derives one shared display label for an axis role across all plots.
///
/// Scans plots in order, keeping each non-empty title the first time it is
/// seen (exact, case-sensitive match) and joining the distinct titles with
/// `", "`. Returns the empty string when no plot contributes a title for
/// the role. Deterministic and idempotent under repeated aggregation.
#[must_use]
pub fn aggregate_axis_title(plots: &[Plot], role: AxisRole) -> String {
    let mut seen: SmallVec<[&str; 4]> = SmallVec::new();
    for plot in plots {
        if let Some(title) = plot.titles.get(role) {
            if !title.is_empty() && !seen.contains(&title) {
                seen.push(title);
            }
        }
    }
    seen.join(", ")
}

#[cfg(test)]
mod tests {
    use super::aggregate_axis_title;
    use crate::core::types::{AxisRole, Plot, PlotTitles, PropertyBag};

    fn plot_with_x_title(title: &str) -> Plot {
        Plot::new("line", PropertyBag::new())
            .with_titles(PlotTitles::line(Some(title.to_owned()), None))
    }

    #[test]
    fn empty_string_titles_contribute_nothing() {
        let plots = vec![plot_with_x_title(""), plot_with_x_title("Time")];
        assert_eq!(aggregate_axis_title(&plots, AxisRole::X), "Time");
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let plots = vec![plot_with_x_title("time"), plot_with_x_title("Time")];
        assert_eq!(aggregate_axis_title(&plots, AxisRole::X), "time, Time");
    }

    #[test]
    fn first_seen_order_wins_over_repetition() {
        let plots = vec![
            plot_with_x_title("Speed"),
            plot_with_x_title("Time"),
            plot_with_x_title("Speed"),
            plot_with_x_title("Speed"),
        ];
        assert_eq!(aggregate_axis_title(&plots, AxisRole::X), "Speed, Time");
    }
}
