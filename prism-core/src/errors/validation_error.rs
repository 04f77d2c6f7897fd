/// Input consistency errors, raised before any cube call is issued.
#[derive(Debug, thiserror::Error)]
pub enum InconsistentInputError {
    #[error("metric mismatch: expected {expected}, found {found}")]
    MetricMismatch { expected: String, found: String },

    #[error("dataset mismatch: expected {expected}, found {found}")]
    DatasetMismatch { expected: String, found: String },
}
