//! Core contracts for the FMCG sample-data toolkit.
//!
//! This crate defines the reference catalog (stores, products, ingredients,
//! recipes), the dataset naming convention shared by the generator and the
//! cleaner, and the typed row records written to CSV.

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod paths;
pub mod records;
pub mod validation;

pub use catalog::{Catalog, Ingredient, Product, Recipe, RecipeComponent};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use paths::DataPaths;
pub use records::{CashSpotCheck, DailySale, GrvInvoice, MenuPrice, RecipeLine, StockLevel};
pub use validation::validate_catalog;

/// Date format used for every date column on disk.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
