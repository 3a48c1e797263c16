use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque, kind-specific plot property bag.
///
/// The adapter never inspects its shape; malformed contents surface only
/// when the resolved handler consumes them.
pub type PropertyBag = Map<String, Value>;

/// Chart layout selector, resolved once per render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ChartLayout {
    #[default]
    Default,
    Lean,
}

impl<'de> Deserialize<'de> for ChartLayout {
    /// Any serialized value other than `"Lean"` deserializes to `Default`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "Lean" => ChartLayout::Lean,
            _ => ChartLayout::Default,
        })
    }
}

/// Per-plot axis role a title may be contributed for.
///
/// Which roles a plot actually populates depends on its kind: line and
/// marker kinds use `x`/`y`, band kinds use `x`/`y1`/`y2`, heatmap kinds
/// add `value`, marker kinds with extra channels add `color`/`size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisRole {
    X,
    Y,
    Y1,
    Y2,
    Value,
    Color,
    Size,
}

/// Optional per-axis-role title labels contributed by one plot.
///
/// An absent field means the plot contributes no title for that role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlotTitles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl PlotTitles {
    pub fn get(&self, role: AxisRole) -> Option<&str> {
        match role {
            AxisRole::X => self.x.as_deref(),
            AxisRole::Y => self.y.as_deref(),
            AxisRole::Y1 => self.y1.as_deref(),
            AxisRole::Y2 => self.y2.as_deref(),
            AxisRole::Value => self.value.as_deref(),
            AxisRole::Color => self.color.as_deref(),
            AxisRole::Size => self.size.as_deref(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.y1.is_none()
            && self.y2.is_none()
            && self.value.is_none()
            && self.color.is_none()
            && self.size.is_none()
    }

    /// Titles for line-like kinds.
    #[must_use]
    pub fn line(x: Option<String>, y: Option<String>) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Titles for area/band kinds.
    #[must_use]
    pub fn area(x: Option<String>, y1: Option<String>, y2: Option<String>) -> Self {
        Self {
            x,
            y1,
            y2,
            ..Self::default()
        }
    }

    /// Titles for heatmap kinds.
    #[must_use]
    pub fn heatmap(x: Option<String>, y: Option<String>, value: Option<String>) -> Self {
        Self {
            x,
            y,
            value,
            ..Self::default()
        }
    }

    /// Titles for marker kinds with optional color/size channels.
    #[must_use]
    pub fn markers(
        x: Option<String>,
        y: Option<String>,
        color: Option<String>,
        size: Option<String>,
    ) -> Self {
        Self {
            x,
            y,
            color,
            size,
            ..Self::default()
        }
    }
}

/// One plot descriptor before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    pub kind: String,
    #[serde(default)]
    pub properties: PropertyBag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "PlotTitles::is_empty")]
    pub titles: PlotTitles,
}

impl Plot {
    #[must_use]
    pub fn new(kind: impl Into<String>, properties: PropertyBag) -> Self {
        Self {
            kind: kind.into(),
            properties,
            display_name: None,
            titles: PlotTitles::default(),
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn with_titles(mut self, titles: PlotTitles) -> Self {
        self.titles = titles;
        self
    }
}

/// Axis presentation settings carried on the chart for the engine.
///
/// Not consumed by the adapter itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Axis {
    Default,
    Labelled {
        ticks: Vec<f64>,
        labels: Vec<String>,
        #[serde(default)]
        angle: f64,
    },
}

/// Ordered chart specification handed to `api::show`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub plots: Vec<Plot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(default)]
    pub layout: ChartLayout,
}

impl Chart {
    #[must_use]
    pub fn of_plots(plots: Vec<Plot>) -> Self {
        Self {
            plots,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }
}
