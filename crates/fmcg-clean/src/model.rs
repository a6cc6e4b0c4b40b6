use std::path::PathBuf;

use fmcg_core::{DataPaths, Dataset};
use serde::{Deserialize, Serialize};

/// Options for the cleaning engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Directory holding the raw `<name>.csv` files.
    pub raw_dir: PathBuf,
    /// Directory receiving `<name>_cleaned.csv`; created when absent.
    pub cleaned_dir: PathBuf,
    /// Datasets to clean; every one must be present.
    pub datasets: Vec<Dataset>,
}

impl CleanOptions {
    pub fn new(raw_dir: impl Into<PathBuf>, cleaned_dir: impl Into<PathBuf>) -> Self {
        Self {
            raw_dir: raw_dir.into(),
            cleaned_dir: cleaned_dir.into(),
            datasets: Dataset::ALL.to_vec(),
        }
    }
}

impl From<&DataPaths> for CleanOptions {
    fn from(paths: &DataPaths) -> Self {
        Self::new(paths.raw_dir.clone(), paths.cleaned_dir.clone())
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::from(&DataPaths::new("data"))
    }
}

/// What the cleaner did to one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCleanReport {
    pub dataset: Dataset,
    pub rows_read: u64,
    pub duplicates_removed: u64,
    pub rows_written: u64,
    /// Missing or unparseable numbers replaced by the column default.
    pub values_defaulted: u64,
    /// Out-of-domain numbers reset to zero or the column median.
    pub values_clamped: u64,
    /// Date cells left empty because they could not be parsed.
    pub dates_unparsed: u64,
    /// Derived cells whose raw value disagreed with the recomputed one.
    pub derived_corrected: u64,
}

impl TableCleanReport {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            rows_read: 0,
            duplicates_removed: 0,
            rows_written: 0,
            values_defaulted: 0,
            values_clamped: 0,
            dates_unparsed: 0,
            derived_corrected: 0,
        }
    }
}

/// Report for a cleaning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanReport {
    pub run_id: String,
    pub tables: Vec<TableCleanReport>,
    pub duration_ms: u64,
}

impl CleanReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            tables: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn table(&self, dataset: Dataset) -> Option<&TableCleanReport> {
        self.tables.iter().find(|table| table.dataset == dataset)
    }
}

/// Result of a cleaning run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    pub cleaned_dir: PathBuf,
    pub report: CleanReport,
}
