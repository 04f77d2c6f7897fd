use serde::{Deserialize, Serialize};

/// One row of a cube cost breakdown: how much a single dimension value
/// contributed to the metric's change between the compared windows.
///
/// Costs are non-negative by cube contract. Entries are ephemeral; the
/// attribution engine folds them into weights and discards them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Dimension column name.
    pub dimension_name: String,
    /// Value within that column.
    pub dimension_value: String,
    /// Contribution cost assigned by the cube engine.
    pub cost: f64,
}

impl CostEntry {
    pub fn new(
        dimension_name: impl Into<String>,
        dimension_value: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            dimension_name: dimension_name.into(),
            dimension_value: dimension_value.into(),
            cost,
        }
    }
}
