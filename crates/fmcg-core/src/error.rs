use thiserror::Error;

/// Core error type shared across the FMCG crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The reference catalog violates internal invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    /// A dataset name did not match any known dataset.
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
}

/// Convenience alias for results returned by the FMCG crates.
pub type Result<T> = std::result::Result<T, Error>;
