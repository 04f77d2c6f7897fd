//! # prism-core
//!
//! Foundation crate for the prism attribution workspace.
//! Defines the slice and cube data model, the cube-client trait,
//! errors, and config. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AttributionConfig;
pub use errors::{PrismError, PrismResult};
pub use models::{
    BreakdownRequest, CostEntry, DatasetConfig, MetricAggFunction, MetricConfig, MetricExpression,
    Slice, TimeRange,
};
pub use traits::ICubeClient;
