use plotview_rs::core::{Plot, PlotTitles, PropertyBag, normalize_plots};
use proptest::prelude::*;
use serde_json::{Value, json};

fn bag(value: Value) -> PropertyBag {
    value.as_object().cloned().expect("json object")
}

#[test]
fn keys_are_contiguous_in_plot_order() {
    let plots = vec![
        Plot::new("line", PropertyBag::new()),
        Plot::new("markers", PropertyBag::new()),
        Plot::new("heatmap", PropertyBag::new()),
    ];

    let normalized = normalize_plots(&plots);
    assert_eq!(normalized.len(), 3);
    assert_eq!(normalized.keys().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(
        normalized.get(1).and_then(|b| b.get("kind")),
        Some(&json!("markers"))
    );
}

#[test]
fn injected_kind_overwrites_property_collision() {
    let plots = vec![Plot::new("line", bag(json!({ "kind": "sneaky", "stroke": "red" })))];

    let normalized = normalize_plots(&plots);
    let first = normalized.get(0).expect("plot 0");
    assert_eq!(first.get("kind"), Some(&json!("line")));
    assert_eq!(first.get("stroke"), Some(&json!("red")));
}

#[test]
fn absent_display_name_is_injected_as_null() {
    let plots = vec![Plot::new("line", bag(json!({ "displayName": "stale" })))];

    let normalized = normalize_plots(&plots);
    let first = normalized.get(0).expect("plot 0");
    assert_eq!(first.get("displayName"), Some(&Value::Null));
}

#[test]
fn display_name_and_titles_are_injected() {
    let plots = vec![
        Plot::new("line", PropertyBag::new())
            .with_display_name("voltage")
            .with_titles(PlotTitles::line(Some("Time".into()), Some("V".into()))),
    ];

    let normalized = normalize_plots(&plots);
    let first = normalized.get(0).expect("plot 0");
    assert_eq!(first.get("displayName"), Some(&json!("voltage")));
    assert_eq!(first.get("titles"), Some(&json!({ "x": "Time", "y": "V" })));
}

#[test]
fn plot_without_titles_gets_empty_titles_object() {
    let plots = vec![Plot::new("line", PropertyBag::new())];

    let normalized = normalize_plots(&plots);
    let first = normalized.get(0).expect("plot 0");
    assert_eq!(first.get("titles"), Some(&json!({})));
}

#[test]
fn mutating_normalized_bag_leaves_source_plot_untouched() {
    let plots = vec![Plot::new(
        "line",
        bag(json!({ "series": { "x": [1.0, 2.0], "y": [10.0, 20.0] } })),
    )];

    let mut normalized = normalize_plots(&plots);
    let first = normalized.get_mut(0).expect("plot 0");
    first.insert("series".to_owned(), json!("clobbered"));

    assert_eq!(
        plots[0].properties.get("series"),
        Some(&json!({ "x": [1.0, 2.0], "y": [10.0, 20.0] }))
    );
}

#[test]
fn empty_plot_list_yields_empty_map() {
    let normalized = normalize_plots(&[]);
    assert!(normalized.is_empty());
}

#[test]
fn serializes_to_index_keyed_object() {
    let plots = vec![
        Plot::new("line", PropertyBag::new()),
        Plot::new("band", PropertyBag::new()),
    ];

    let value = serde_json::to_value(normalize_plots(&plots)).expect("serialize");
    let object = value.as_object().expect("object");
    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["0", "1"]);
}

proptest! {
    #[test]
    fn normalizer_keys_cover_exact_index_range(plot_count in 0usize..32) {
        let plots: Vec<Plot> = (0..plot_count)
            .map(|i| Plot::new("line", PropertyBag::new()).with_display_name(format!("p{i}")))
            .collect();

        let normalized = normalize_plots(&plots);
        prop_assert_eq!(normalized.len(), plot_count);
        prop_assert_eq!(
            normalized.keys().collect::<Vec<_>>(),
            (0..plot_count).collect::<Vec<_>>()
        );
    }
}
