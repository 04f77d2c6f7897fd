//! Metric expressions as cube backends consume them.

use serde::{Deserialize, Serialize};

/// Aggregation functions a cube backend can apply to a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricAggFunction {
    Sum,
    Avg,
    Count,
    CountDistinct,
    Max,
    Min,
}

impl MetricAggFunction {
    /// All variants for iteration.
    pub const ALL: [MetricAggFunction; 6] = [
        Self::Sum,
        Self::Avg,
        Self::Count,
        Self::CountDistinct,
        Self::Max,
        Self::Min,
    ];

    /// Uppercase name as cube backends spell it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Count => "COUNT",
            Self::CountDistinct => "COUNT_DISTINCT",
            Self::Max => "MAX",
            Self::Min => "MIN",
        }
    }
}

impl Default for MetricAggFunction {
    fn default() -> Self {
        Self::Sum
    }
}

impl std::fmt::Display for MetricAggFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An aggregation applied to a metric, e.g. `SUM(pageviews)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricExpression {
    pub metric: String,
    pub agg: MetricAggFunction,
}

impl MetricExpression {
    pub fn new(metric: impl Into<String>, agg: MetricAggFunction) -> Self {
        Self {
            metric: metric.into(),
            agg,
        }
    }
}

impl std::fmt::Display for MetricExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.agg, self.metric)
    }
}
