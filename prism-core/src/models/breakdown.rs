use serde::{Deserialize, Serialize};

use super::{MetricExpression, TimeRange};

/// Everything a cube backend needs to produce one cost breakdown.
///
/// `dimensions` is the dimension set to explore, `max_depth` caps how many
/// of them a combination may fix at once, and `value_restrictions` pre-pins
/// dimension values per level. The attribution engine always requests the
/// dataset's full dimension set at full depth with no restrictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRequest {
    pub dataset: String,
    pub metric: MetricExpression,
    pub current: TimeRange,
    pub baseline: TimeRange,
    pub dimensions: Vec<String>,
    pub max_depth: usize,
    pub value_restrictions: Vec<Vec<String>>,
}
