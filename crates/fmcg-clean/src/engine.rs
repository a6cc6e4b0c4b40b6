use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info, warn};

use fmcg_core::Dataset;

use crate::errors::CleanError;
use crate::model::{CleanOptions, CleanReport, CleanResult, TableCleanReport};
use crate::policy::{ColumnPolicy, rules_for};
use crate::table::RawTable;
use crate::values::{
    format_date, format_float, format_integer, median, parse_date, parse_number, to_count,
};

/// Cleans raw datasets into their `_cleaned` counterparts.
#[derive(Debug, Clone)]
pub struct CleaningEngine {
    options: CleanOptions,
}

impl CleaningEngine {
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Clean every configured dataset.
    ///
    /// All inputs are checked and cleaned in memory before anything is
    /// written, so a fatal error leaves no partial output behind.
    pub fn run(&self) -> Result<CleanResult, CleanError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let raw_dir = &self.options.raw_dir;
        let cleaned_dir = self.options.cleaned_dir.clone();

        for dataset in &self.options.datasets {
            let path = dataset.raw_path(raw_dir);
            if !path.is_file() {
                return Err(CleanError::MissingInput { path });
            }
        }

        info!(
            run_id = %run_id,
            raw_dir = %raw_dir.display(),
            cleaned_dir = %cleaned_dir.display(),
            datasets = self.options.datasets.len(),
            "cleaning started"
        );

        let mut cleaned: Vec<(Dataset, RawTable, TableCleanReport)> =
            Vec::with_capacity(self.options.datasets.len());
        for &dataset in &self.options.datasets {
            let path = dataset.raw_path(raw_dir);
            debug!(dataset = %dataset, path = %path.display(), "reading raw dataset");
            let table = RawTable::from_path(&path).map_err(|source| CleanError::Read {
                path: path.clone(),
                source,
            })?;
            let (table, table_report) = clean_table(dataset, table)?;
            cleaned.push((dataset, table, table_report));
        }

        std::fs::create_dir_all(&cleaned_dir).map_err(|source| CleanError::CreateDir {
            path: cleaned_dir.clone(),
            source,
        })?;

        let mut report = CleanReport::new(run_id.clone());
        for (dataset, table, table_report) in cleaned {
            let path: PathBuf = dataset.cleaned_path(&cleaned_dir);
            table
                .write_to_path(&path)
                .map_err(|source| CleanError::Write {
                    path: path.clone(),
                    source,
                })?;

            info!(
                dataset = %dataset,
                rows_read = table_report.rows_read,
                rows_written = table_report.rows_written,
                duplicates_removed = table_report.duplicates_removed,
                values_defaulted = table_report.values_defaulted,
                values_clamped = table_report.values_clamped,
                derived_corrected = table_report.derived_corrected,
                path = %path.display(),
                "table cleaned"
            );
            if table_report.dates_unparsed > 0 {
                warn!(
                    dataset = %dataset,
                    dates_unparsed = table_report.dates_unparsed,
                    "unparseable dates left empty"
                );
            }
            report.tables.push(table_report);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            duration_ms = report.duration_ms,
            "cleaning completed"
        );

        Ok(CleanResult {
            cleaned_dir,
            report,
        })
    }
}

/// Clean one table in memory according to the dataset's rules.
///
/// Steps: drop duplicate rows, normalize dates, coerce and repair numeric
/// columns, recompute derived columns, then drop rows that became duplicates
/// through normalization.
pub fn clean_table(
    dataset: Dataset,
    mut table: RawTable,
) -> Result<(RawTable, TableCleanReport), CleanError> {
    let rules = rules_for(dataset);
    let mut report = TableCleanReport::new(dataset);
    report.rows_read = table.len() as u64;
    report.duplicates_removed = table.dedup() as u64;

    let mut numeric: HashMap<&'static str, (ColumnPolicy, Vec<Option<f64>>)> = HashMap::new();
    for rule in rules.columns {
        let index = table
            .column_index(rule.column)
            .ok_or(CleanError::MissingColumn {
                dataset,
                column: rule.column,
            })?;

        match rule.policy {
            ColumnPolicy::Date => clean_dates(&mut table, index, &mut report),
            policy => {
                let values =
                    clean_numbers(dataset, rule.column, policy, &mut table, index, &mut report)?;
                numeric.insert(rule.column, (policy, values));
            }
        }
    }

    for derived in rules.derived {
        let index = table
            .column_index(derived.column)
            .ok_or(CleanError::MissingColumn {
                dataset,
                column: derived.column,
            })?;
        let (minuend_policy, minuend) =
            numeric
                .get(derived.minuend)
                .ok_or(CleanError::MissingColumn {
                    dataset,
                    column: derived.minuend,
                })?;
        let (subtrahend_policy, subtrahend) =
            numeric
                .get(derived.subtrahend)
                .ok_or(CleanError::MissingColumn {
                    dataset,
                    column: derived.subtrahend,
                })?;
        let integral = minuend_policy.is_integral() && subtrahend_policy.is_integral();

        for ((row, left), right) in table.rows.iter_mut().zip(minuend).zip(subtrahend) {
            let cell = match (left, right) {
                // Computed on the integers that are written, not the parsed floats.
                (Some(left), Some(right)) if integral => to_count(*left)
                    .saturating_sub(to_count(*right))
                    .to_string(),
                (Some(left), Some(right)) => format_float(left - right),
                _ => String::new(),
            };
            if parse_number(&row[index]) != parse_number(&cell) {
                report.derived_corrected += 1;
            }
            row[index] = cell;
        }
    }

    report.duplicates_removed += table.dedup() as u64;
    report.rows_written = table.len() as u64;
    Ok((table, report))
}

fn clean_dates(table: &mut RawTable, index: usize, report: &mut TableCleanReport) {
    for row in &mut table.rows {
        match parse_date(&row[index]) {
            Some(date) => row[index] = format_date(date),
            None => {
                report.dates_unparsed += 1;
                row[index].clear();
            }
        }
    }
}

fn clean_numbers(
    dataset: Dataset,
    column: &'static str,
    policy: ColumnPolicy,
    table: &mut RawTable,
    index: usize,
    report: &mut TableCleanReport,
) -> Result<Vec<Option<f64>>, CleanError> {
    let parsed: Vec<Option<f64>> = table
        .rows
        .iter()
        .map(|row| {
            parse_number(&row[index]).map(|value| {
                if policy.is_integral() {
                    value.trunc()
                } else {
                    value
                }
            })
        })
        .collect();

    // Median over every parsed value, negatives included.
    let column_median = if policy.needs_median() && !parsed.is_empty() {
        let present: Vec<f64> = parsed.iter().flatten().copied().collect();
        let value = median(&present).ok_or(CleanError::DegenerateColumn { dataset, column })?;
        Some(value.max(0.0))
    } else {
        None
    };

    let mut values = Vec::with_capacity(parsed.len());
    for (row, value) in table.rows.iter_mut().zip(parsed) {
        let value = match value {
            Some(value) => match policy.clamp(value, column_median) {
                Some(replacement) => {
                    report.values_clamped += 1;
                    Some(replacement)
                }
                None => Some(value),
            },
            None => {
                let default = policy.missing_default(column_median);
                if default.is_some() {
                    report.values_defaulted += 1;
                }
                default
            }
        };
        row[index] = format_value(value, policy.is_integral());
        values.push(value);
    }

    Ok(values)
}

fn format_value(value: Option<f64>, integral: bool) -> String {
    match value {
        Some(value) if integral => format_integer(value),
        Some(value) => format_float(value),
        None => String::new(),
    }
}
