use serde::{Deserialize, Serialize};

use crate::models::MetricAggFunction;

/// Attribution engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
    /// Aggregation function sent to the cube backend in breakdown requests.
    pub metric_agg: MetricAggFunction,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            metric_agg: MetricAggFunction::Sum,
        }
    }
}
