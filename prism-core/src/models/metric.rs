use serde::{Deserialize, Serialize};

/// The metric a slice derives from.
///
/// Compared for equality during input validation: all slices in one
/// attribution call must reference the same metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Metric name, unique within its dataset.
    pub name: String,
}

impl MetricConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
