use chrono::{TimeZone, Utc};
/// Serde roundtrip and behavior tests for the shared attribution models.
use prism_core::models::*;

fn roundtrip<T: serde::Serialize + serde::de::DeserializeOwned>(val: &T) -> T {
    let json = serde_json::to_string(val).unwrap();
    serde_json::from_str(&json).unwrap()
}

fn scope() -> (MetricConfig, DatasetConfig) {
    (
        MetricConfig::new("pageviews"),
        DatasetConfig::new(
            "web_events",
            vec!["country".into(), "browser".into(), "os".into()],
        ),
    )
}

#[test]
fn slice_roundtrip() {
    let (metric, dataset) = scope();
    let slice = Slice::new("country=US", metric, dataset, 10.0);
    let r = roundtrip(&slice);
    assert_eq!(r.dimension, "country=US");
    assert_eq!(r.metric.name, "pageviews");
    assert_eq!(r.dataset.dimensions.len(), 3);
    assert_eq!(r.score, 10.0);
}

#[test]
fn slice_with_score_replaces_score_only() {
    let (metric, dataset) = scope();
    let slice = Slice::new("country=US", metric, dataset, 10.0);
    let scored = slice.with_score(7.5);
    assert_eq!(scored.dimension, slice.dimension);
    assert_eq!(scored.metric, slice.metric);
    assert_eq!(scored.dataset, slice.dataset);
    assert_eq!(scored.score, 7.5);
    assert_eq!(slice.score, 10.0, "original slice must stay unchanged");
}

#[test]
fn time_range_roundtrip() {
    let range = TimeRange::new(
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap(),
    );
    let r = roundtrip(&range);
    assert_eq!(r, range);
    assert_eq!(r.duration().num_hours(), 24);
}

#[test]
fn time_range_from_epoch_millis() {
    let range = TimeRange::from_epoch_millis(1_500_000_000_000, 1_500_086_400_000).unwrap();
    assert_eq!(range.start.timestamp_millis(), 1_500_000_000_000);
    assert_eq!(range.end.timestamp_millis(), 1_500_086_400_000);
    assert_eq!(range.duration().num_hours(), 24);
}

#[test]
fn cost_entry_roundtrip() {
    let entry = CostEntry::new("country", "US", 30.0);
    let r = roundtrip(&entry);
    assert_eq!(r.dimension_name, "country");
    assert_eq!(r.dimension_value, "US");
    assert_eq!(r.cost, 30.0);
}

#[test]
fn metric_expression_displays_like_cube_backends_expect() {
    let expr = MetricExpression::new("pageviews", MetricAggFunction::Sum);
    assert_eq!(expr.to_string(), "SUM(pageviews)");
    let expr = MetricExpression::new("latency", MetricAggFunction::CountDistinct);
    assert_eq!(expr.to_string(), "COUNT_DISTINCT(latency)");
}

#[test]
fn metric_agg_function_default_is_sum() {
    assert_eq!(MetricAggFunction::default(), MetricAggFunction::Sum);
}

#[test]
fn metric_agg_function_roundtrips_all_variants() {
    for agg in MetricAggFunction::ALL {
        assert_eq!(roundtrip(&agg), agg);
    }
}

#[test]
fn breakdown_request_roundtrip() {
    let (_, dataset) = scope();
    let request = BreakdownRequest {
        dataset: dataset.name.clone(),
        metric: MetricExpression::new("pageviews", MetricAggFunction::Sum),
        current: TimeRange::from_epoch_millis(2_000, 3_000).unwrap(),
        baseline: TimeRange::from_epoch_millis(0, 1_000).unwrap(),
        dimensions: dataset.dimensions.clone(),
        max_depth: dataset.dimensions.len(),
        value_restrictions: Vec::new(),
    };
    let r = roundtrip(&request);
    assert_eq!(r.dataset, "web_events");
    assert_eq!(r.max_depth, 3);
    assert!(r.value_restrictions.is_empty());
}
