//! Normalization pass for raw FMCG datasets.
//!
//! The cleaner reads the six raw CSV files, removes duplicate rows, coerces
//! date and numeric columns, repairs out-of-domain values and recomputes the
//! reconciliation columns before writing `<name>_cleaned.csv` files.

pub mod engine;
pub mod errors;
pub mod model;
pub mod policy;
pub mod table;
pub mod values;

pub use engine::{CleaningEngine, clean_table};
pub use errors::CleanError;
pub use model::{CleanOptions, CleanReport, CleanResult, TableCleanReport};
pub use policy::{ColumnPolicy, ColumnRule, DerivedRule, TableRules, rules_for};
pub use table::RawTable;
