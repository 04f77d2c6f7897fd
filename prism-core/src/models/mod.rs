//! Shared data model for contribution attribution.

pub mod breakdown;
pub mod cost_entry;
pub mod dataset;
pub mod expression;
pub mod metric;
pub mod slice;
pub mod time_range;

pub use breakdown::BreakdownRequest;
pub use cost_entry::CostEntry;
pub use dataset::DatasetConfig;
pub use expression::{MetricAggFunction, MetricExpression};
pub use metric::MetricConfig;
pub use slice::Slice;
pub use time_range::TimeRange;
