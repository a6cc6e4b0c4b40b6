use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use fmcg_core::{Catalog, Dataset};

use crate::errors::GenerationError;
use crate::generators::GeneratedTables;
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::write_records;

/// File name of the optional machine-readable run report.
pub const REPORT_FILE: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
    pub report_path: Option<PathBuf>,
}

/// Entry point for generating the six datasets from a catalog.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, catalog: &Catalog) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        catalog.validate()?;

        let seed = self.options.seed.unwrap_or(catalog.seed);
        let run_id = uuid::Uuid::new_v4().to_string();
        let out_dir = self.options.out_dir.clone();
        std::fs::create_dir_all(&out_dir).map_err(|source| GenerationError::CreateDir {
            path: out_dir.clone(),
            source,
        })?;

        info!(
            run_id = %run_id,
            seed,
            out_dir = %out_dir.display(),
            "generation started"
        );

        let tables = GeneratedTables::generate(catalog, seed)?;
        let mut report = GenerationReport::new(run_id.clone(), seed);

        write_dataset(&out_dir, Dataset::DailySales, &tables.daily_sales, &mut report)?;
        write_dataset(&out_dir, Dataset::StockLevels, &tables.stock_levels, &mut report)?;
        write_dataset(
            &out_dir,
            Dataset::GrvSupplierInvoices,
            &tables.grv_invoices,
            &mut report,
        )?;
        write_dataset(
            &out_dir,
            Dataset::RecipesAndRawMaterials,
            &tables.recipes,
            &mut report,
        )?;
        write_dataset(&out_dir, Dataset::MenuPricing, &tables.menu_pricing, &mut report)?;
        write_dataset(
            &out_dir,
            Dataset::StoreCashSpotchecks,
            &tables.cash_spotchecks,
            &mut report,
        )?;

        report.duration_ms = start.elapsed().as_millis() as u64;

        let report_path = if self.options.write_report {
            let path = out_dir.join(REPORT_FILE);
            let encoded = serde_json::to_vec_pretty(&report)?;
            std::fs::write(&path, encoded).map_err(|source| GenerationError::Write {
                path: path.clone(),
                source,
            })?;
            Some(path)
        } else {
            None
        };

        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_dir,
            report,
            report_path,
        })
    }
}

fn write_dataset<T: Serialize>(
    out_dir: &Path,
    dataset: Dataset,
    rows: &[T],
    report: &mut GenerationReport,
) -> Result<(), GenerationError> {
    let path = dataset.raw_path(out_dir);
    debug!(dataset = %dataset, path = %path.display(), "writing dataset");

    let bytes_written =
        write_records(&path, dataset.columns(), rows).map_err(|source| GenerationError::Csv {
            path: path.display().to_string(),
            source,
        })?;

    info!(
        dataset = %dataset,
        rows = rows.len(),
        bytes_written,
        "table generated"
    );

    report.record_table(TableReport {
        dataset,
        file: dataset.file_name(),
        rows: rows.len() as u64,
        bytes_written,
    });
    Ok(())
}
