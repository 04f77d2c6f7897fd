/// Cube engine errors, raised by `ICubeClient` implementations.
///
/// The attribution engine never maps or retries these; they surface to the
/// caller with their variant intact.
#[derive(Debug, thiserror::Error)]
pub enum CubeError {
    #[error("olap query failed: {reason}")]
    OlapQuery { reason: String },

    #[error("cube decomposition failed: {reason}")]
    Decomposition { reason: String },
}
