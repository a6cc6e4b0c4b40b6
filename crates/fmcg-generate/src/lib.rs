//! Seeded synthetic dataset generation for the FMCG sample data.
//!
//! The engine consumes a reference [`fmcg_core::Catalog`] and writes six
//! reproducible CSV datasets: the same catalog and seed always produce
//! byte-identical files.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use generators::GeneratedTables;
pub use model::{GenerateOptions, GenerationReport, TableReport};
