use serde::{Deserialize, Serialize};

use super::{DatasetConfig, MetricConfig};

/// A metric restricted to one dimension-value combination, carrying the
/// relevance score accumulated so far by the surrounding pipeline.
///
/// The slice identity is the `dimension` key in `name=value` form; the
/// attribution engine resolves cube breakdown rows against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Slice identity, `dimension_name=dimension_value`.
    pub dimension: String,
    /// Metric the slice belongs to.
    pub metric: MetricConfig,
    /// Dataset the metric lives in.
    pub dataset: DatasetConfig,
    /// Relevance score accumulated by upstream pipeline stages.
    pub score: f64,
}

impl Slice {
    pub fn new(
        dimension: impl Into<String>,
        metric: MetricConfig,
        dataset: DatasetConfig,
        score: f64,
    ) -> Self {
        Self {
            dimension: dimension.into(),
            metric,
            dataset,
            score,
        }
    }

    /// Copy of this slice with the score replaced. Identity and scope are
    /// unchanged; the original is never mutated.
    pub fn with_score(&self, score: f64) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }
}
