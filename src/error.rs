/// Errors raised by the mining engine.
///
/// Every variant is detected synchronously at the point of violation; no
/// operation returns partial results alongside one of these.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("support is undefined for an empty corpus")]
    EmptyCorpus,

    #[error("join candidates must share one item count: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("invalid mining config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MiningError>;

pub(crate) fn check_min_support(min_support: f64) -> Result<()> {
    // NaN fails both comparisons and lands here too.
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(MiningError::InvalidArgument(format!(
            "min_support must lie in (0, 1], got {}",
            min_support
        )));
    }
    Ok(())
}
