use std::path::PathBuf;

use fmcg_core::Dataset;
use thiserror::Error;

/// Errors emitted by the cleaning engine.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("required raw file not found: {}", path.display())]
    MissingInput { path: PathBuf },
    #[error("{dataset}: required column '{column}' not found in header")]
    MissingColumn {
        dataset: Dataset,
        column: &'static str,
    },
    #[error("{dataset}: column '{column}' has no parseable values, median is undefined")]
    DegenerateColumn {
        dataset: Dataset,
        column: &'static str,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
