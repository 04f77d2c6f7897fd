//! Configuration structs. No file loading here; embedding applications
//! construct and pass these in.

pub mod attribution_config;

pub use attribution_config::AttributionConfig;
