use crate::errors::CubeError;
use crate::models::{BreakdownRequest, CostEntry};

/// Cost-breakdown capability of an external cube engine.
///
/// Implementations wrap whatever OLAP backend decomposes a metric change
/// into per-dimension-value costs. The attribution engine depends on this
/// trait only, so any conforming backend is interchangeable.
///
/// Errors keep their variant: `OlapQuery` for query, network, or cache
/// failure; `Decomposition` for malformed or non-convergent cube builds.
pub trait ICubeClient: Send + Sync {
    /// Produce the cost breakdown for one (metric, dataset, window pair)
    /// request. Read-only; must not retain the request.
    fn cost_breakdown(&self, request: &BreakdownRequest) -> Result<Vec<CostEntry>, CubeError>;
}
