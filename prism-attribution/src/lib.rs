//! # prism-attribution
//!
//! Contribution attribution engine. Given scored slices of one metric and a
//! pair of compared time windows, it obtains the cost breakdown of the
//! change from a cube backend, normalizes the costs into contribution
//! weights, and folds each weight into the matching slice's score.

pub mod aggregation;
pub mod engine;
pub mod validate;

pub use engine::AttributionEngine;
pub use validate::SliceScope;
