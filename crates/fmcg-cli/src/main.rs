mod logging;
mod workspace;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use fmcg_clean::{CleanError, CleanOptions, CleaningEngine};
use fmcg_core::{Catalog, DataPaths, Dataset};
use fmcg_generate::{GenerateOptions, GenerationEngine, GenerationError};
use thiserror::Error;

use logging::init_logging;
use workspace::{WorkspaceError, catalog_to_toml, export_catalog, load_catalog, write_json_atomic};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
    #[error("generation failed: {0}")]
    Generate(#[from] GenerationError),
    #[error("cleaning failed: {0}")]
    Clean(#[from] CleanError),
}

#[derive(Parser, Debug)]
#[command(name = "fmcg", version, about = "Bakery FMCG sample data generator and cleaner")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    /// Append logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the six raw datasets.
    Generate(GenerateArgs),
    /// Clean raw datasets into `<name>_cleaned.csv` files.
    Clean(CleanArgs),
    /// Print or export the built-in reference catalog.
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Data root; raw files go to `<data-dir>/raw`.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Write raw files here instead of `<data-dir>/raw`.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Override the catalog seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Catalog TOML file; defaults to the built-in bakery catalog.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
    /// Also write generation_report.json next to the datasets.
    #[arg(long, default_value_t = false)]
    report: bool,
}

#[derive(Args, Debug)]
struct CleanArgs {
    /// Data root holding `raw/` and receiving `cleaned/`.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Read raw files from here instead of `<data-dir>/raw`.
    #[arg(long)]
    raw_dir: Option<PathBuf>,
    /// Write cleaned files here instead of `<data-dir>/cleaned`.
    #[arg(long)]
    cleaned_dir: Option<PathBuf>,
    /// Clean only this dataset (repeatable); defaults to all six.
    #[arg(long = "dataset", value_name = "NAME")]
    datasets: Vec<Dataset>,
    /// Write the cleaning report as JSON to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Write the catalog TOML to this path instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Print the JSON Schema for catalog files instead.
    #[arg(long, default_value_t = false)]
    json_schema: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_json, cli.log_file.as_deref()) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(event = "run_failed", error = %err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate(args) => run_generate(args),
        Command::Clean(args) => run_clean(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        data_dir,
        out_dir,
        seed,
        catalog,
        report,
    } = args;

    let catalog = load_catalog(catalog.as_deref())?;
    let out_dir = out_dir.unwrap_or_else(|| DataPaths::new(data_dir).raw_dir);
    let options = GenerateOptions {
        out_dir,
        seed,
        write_report: report,
    };

    let result = GenerationEngine::new(options).run(&catalog)?;
    for table in &result.report.tables {
        println!(
            "{} ({} rows)",
            result.out_dir.join(&table.file).display(),
            table.rows
        );
    }
    if let Some(path) = result.report_path {
        println!("report_path={}", path.display());
    }
    Ok(())
}

fn run_clean(args: CleanArgs) -> Result<(), CliError> {
    let CleanArgs {
        data_dir,
        raw_dir,
        cleaned_dir,
        datasets,
        report,
    } = args;

    let paths = DataPaths::new(data_dir);
    let mut options = CleanOptions::new(
        raw_dir.unwrap_or(paths.raw_dir),
        cleaned_dir.unwrap_or(paths.cleaned_dir),
    );
    if !datasets.is_empty() {
        options.datasets = datasets;
    }

    let result = CleaningEngine::new(options).run()?;
    for table in &result.report.tables {
        println!(
            "{} ({} rows, {} duplicates removed)",
            table.dataset.cleaned_path(&result.cleaned_dir).display(),
            table.rows_written,
            table.duplicates_removed
        );
    }
    if let Some(path) = report {
        write_json_atomic(&path, &result.report)?;
        println!("report_path={}", path.display());
    }
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<(), CliError> {
    let catalog = Catalog::bakery();
    if args.json_schema {
        let schema = serde_json::to_string_pretty(&Catalog::json_schema())
            .map_err(WorkspaceError::from)?;
        println!("{schema}");
        return Ok(());
    }

    match args.out {
        Some(path) => {
            export_catalog(&path, &catalog)?;
            tracing::info!(event = "catalog_written", path = %path.display());
        }
        None => print!("{}", catalog_to_toml(&catalog)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults_to_data_dir() {
        let cli = Cli::try_parse_from(["fmcg", "generate"]).expect("parse");
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.data_dir, PathBuf::from("data"));
                assert!(args.out_dir.is_none());
                assert!(args.seed.is_none());
                assert!(!args.report);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn clean_accepts_directory_overrides_and_global_flags() {
        let cli = Cli::try_parse_from([
            "fmcg",
            "clean",
            "--raw-dir",
            "in",
            "--cleaned-dir",
            "out",
            "--log-json",
        ])
        .expect("parse");
        assert!(cli.log_json);
        match cli.command {
            Command::Clean(args) => {
                assert_eq!(args.raw_dir, Some(PathBuf::from("in")));
                assert_eq!(args.cleaned_dir, Some(PathBuf::from("out")));
                assert!(args.datasets.is_empty());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn clean_parses_dataset_filter() {
        let cli = Cli::try_parse_from([
            "fmcg",
            "clean",
            "--dataset",
            "menu_pricing",
            "--dataset",
            "grv_supplier_invoices.csv",
        ])
        .expect("parse");
        match cli.command {
            Command::Clean(args) => assert_eq!(
                args.datasets,
                vec![Dataset::MenuPricing, Dataset::GrvSupplierInvoices]
            ),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["fmcg", "clean", "--dataset", "returns"]).is_err());
    }

    #[test]
    fn seed_must_be_numeric() {
        assert!(Cli::try_parse_from(["fmcg", "generate", "--seed", "abc"]).is_err());
    }
}
