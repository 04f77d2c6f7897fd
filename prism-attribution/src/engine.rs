//! AttributionEngine: validate → cube breakdown → normalize → recombine.

use prism_core::config::AttributionConfig;
use prism_core::errors::PrismResult;
use prism_core::models::{BreakdownRequest, MetricExpression, Slice, TimeRange};
use prism_core::traits::ICubeClient;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::aggregation;
use crate::validate;

/// The attribution engine. Runs the full scoring pass over a slice batch:
/// validate → fetch cost breakdown → normalize weights → fold weights into
/// slice scores.
///
/// Synchronous and stateless across calls; concurrent `score` calls are
/// independent as long as the cube client is safe to share.
pub struct AttributionEngine<'a> {
    client: &'a dyn ICubeClient,
    config: AttributionConfig,
}

impl<'a> AttributionEngine<'a> {
    pub fn new(client: &'a dyn ICubeClient) -> Self {
        Self {
            client,
            config: AttributionConfig::default(),
        }
    }

    /// Replace the default configuration.
    pub fn with_config(mut self, config: AttributionConfig) -> Self {
        self.config = config;
        self
    }

    /// Score `slices` by their contribution to the metric's change between
    /// `baseline` and `current`.
    ///
    /// Every output slice is a copy of an input slice with its score
    /// multiplied by the slice's normalized contribution weight. Input
    /// slices the breakdown never mentions are dropped. Output order
    /// follows the weight map's iteration order, not input order; callers
    /// must not rely on it.
    pub fn score(
        &self,
        slices: &[Slice],
        current: TimeRange,
        baseline: TimeRange,
    ) -> PrismResult<Vec<Slice>> {
        // Step 1: Empty input needs no cube round-trip.
        let Some((first, rest)) = slices.split_first() else {
            debug!("no slices to score");
            return Ok(Vec::new());
        };

        // Step 2: All slices must share one metric and dataset.
        let scope = validate::shared_scope(first, rest)?;
        debug!(
            metric = %scope.metric.name,
            dataset = %scope.dataset.name,
            slices = slices.len(),
            "validated slice batch"
        );

        // Step 3: Fetch the cost breakdown over the dataset's full
        // dimension set, unrestricted.
        let request = BreakdownRequest {
            dataset: scope.dataset.name.clone(),
            metric: MetricExpression::new(&scope.metric.name, self.config.metric_agg),
            current,
            baseline,
            dimensions: scope.dataset.dimensions.clone(),
            max_depth: scope.dataset.dimensions.len(),
            value_restrictions: Vec::new(),
        };
        let entries = self.client.cost_breakdown(&request)?;
        info!(entries = entries.len(), "cube breakdown fetched");

        // Step 4: Normalize raw costs into contribution weights.
        let weights = aggregation::normalized_weights(&entries);

        // Step 5: Fold weights into slice scores. The index keeps the last
        // occurrence of a duplicated input identity.
        let mut by_identity: FxHashMap<&str, &Slice> = FxHashMap::default();
        for slice in slices {
            by_identity.insert(slice.dimension.as_str(), slice);
        }

        let mut scored = Vec::with_capacity(weights.len());
        for (identity, weight) in &weights {
            if let Some(slice) = by_identity.get(identity.as_str()) {
                scored.push(slice.with_score(slice.score * weight));
            }
        }

        for slice in slices {
            if !weights.contains_key(&slice.dimension) {
                warn!(slice = %slice.dimension, "could not resolve slice identity, dropping");
            }
        }

        info!(
            input = slices.len(),
            scored = scored.len(),
            "attribution complete"
        );

        Ok(scored)
    }
}
