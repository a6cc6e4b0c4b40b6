use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid distribution: {0}")]
    Distribution(String),
    #[error("no sales row for {date} / {store} / {sku}")]
    MissingSale {
        date: NaiveDate,
        store: String,
        sku: String,
    },
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error writing {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl From<fmcg_core::Error> for GenerationError {
    fn from(err: fmcg_core::Error) -> Self {
        match err {
            fmcg_core::Error::InvalidCatalog(message) => GenerationError::InvalidCatalog(message),
            other => GenerationError::InvalidCatalog(other.to_string()),
        }
    }
}
