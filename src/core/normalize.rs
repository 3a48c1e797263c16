use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::types::{Plot, PropertyBag};

/// Index-keyed map of renderer-ready property bags.
///
/// Keys are the contiguous range `0..N` in original plot order; the index
/// is the public identity used downstream, so order is load-bearing.
/// Serializes to the engine-facing object keyed by stringified index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPlots(IndexMap<usize, PropertyBag>);

impl NormalizedPlots {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PropertyBag> {
        self.0.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PropertyBag> {
        self.0.get_mut(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &PropertyBag)> {
        self.0.iter().map(|(index, bag)| (*index, bag))
    }

    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }
}

/// Flattens plot descriptors into index-keyed property bags.
///
/// Each bag is a structural copy of the plot's `properties` with `kind`,
/// `displayName`, and `titles` injected on top. Injection overwrites
/// same-named keys already present in the bag. Any bag shape is accepted;
/// validation belongs to the resolved handler.
#[must_use]
pub fn normalize_plots(plots: &[Plot]) -> NormalizedPlots {
    let mut map = IndexMap::with_capacity(plots.len());
    for (index, plot) in plots.iter().enumerate() {
        map.insert(index, normalize_plot(plot));
    }
    NormalizedPlots(map)
}

fn normalize_plot(plot: &Plot) -> PropertyBag {
    // Owned clone of a serde_json map is a structural deep copy, so the
    // renderer mutating the bag in place never touches the source chart.
    let mut bag = plot.properties.clone();
    bag.insert("kind".to_owned(), Value::String(plot.kind.clone()));
    bag.insert(
        "displayName".to_owned(),
        match &plot.display_name {
            Some(name) => Value::String(name.clone()),
            None => Value::Null,
        },
    );
    bag.insert(
        "titles".to_owned(),
        serde_json::to_value(&plot.titles).unwrap_or_else(|_| Value::Object(Map::new())),
    );
    bag
}
