//! Input consistency validation: one metric, one dataset per batch.

use prism_core::errors::InconsistentInputError;
use prism_core::models::{DatasetConfig, MetricConfig, Slice};

/// The single metric and dataset shared by a validated slice batch.
#[derive(Debug, Clone, Copy)]
pub struct SliceScope<'a> {
    pub metric: &'a MetricConfig,
    pub dataset: &'a DatasetConfig,
}

/// Confirm every slice references the first slice's metric and dataset.
///
/// Fails on the first slice that differs. Empty batches never reach here;
/// the engine short-circuits before validation.
pub fn shared_scope<'a>(
    first: &'a Slice,
    rest: &'a [Slice],
) -> Result<SliceScope<'a>, InconsistentInputError> {
    for slice in rest {
        if slice.metric != first.metric {
            return Err(InconsistentInputError::MetricMismatch {
                expected: first.metric.name.clone(),
                found: slice.metric.name.clone(),
            });
        }
        if slice.dataset != first.dataset {
            return Err(InconsistentInputError::DatasetMismatch {
                expected: first.dataset.name.clone(),
                found: slice.dataset.name.clone(),
            });
        }
    }
    Ok(SliceScope {
        metric: &first.metric,
        dataset: &first.dataset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(metric: &str, dataset: &str) -> Slice {
        Slice::new(
            "country=US",
            MetricConfig::new(metric),
            DatasetConfig::new(dataset, vec!["country".into()]),
            1.0,
        )
    }

    #[test]
    fn test_uniform_batch_returns_scope() {
        let first = slice("pageviews", "web_events");
        let rest = vec![slice("pageviews", "web_events")];
        let scope = shared_scope(&first, &rest).unwrap();
        assert_eq!(scope.metric.name, "pageviews");
        assert_eq!(scope.dataset.name, "web_events");
    }

    #[test]
    fn test_metric_mismatch_is_rejected() {
        let first = slice("pageviews", "web_events");
        let rest = vec![slice("clicks", "web_events")];
        let err = shared_scope(&first, &rest).unwrap_err();
        assert!(matches!(
            err,
            InconsistentInputError::MetricMismatch { .. }
        ));
        assert!(err.to_string().contains("clicks"));
    }

    #[test]
    fn test_dataset_mismatch_is_rejected() {
        let first = slice("pageviews", "web_events");
        let rest = vec![slice("pageviews", "mobile_events")];
        let err = shared_scope(&first, &rest).unwrap_err();
        assert!(matches!(
            err,
            InconsistentInputError::DatasetMismatch { .. }
        ));
    }

    #[test]
    fn test_metric_checked_before_dataset() {
        let first = slice("pageviews", "web_events");
        let rest = vec![slice("clicks", "mobile_events")];
        let err = shared_scope(&first, &rest).unwrap_err();
        assert!(matches!(
            err,
            InconsistentInputError::MetricMismatch { .. }
        ));
    }
}
