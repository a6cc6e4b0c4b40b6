//! Per-dataset row builders.
//!
//! Every builder draws from the same caller-owned random source, so the order
//! in which [`GeneratedTables::generate`] invokes them is part of the output
//! contract.

mod cash;
mod grv;
mod menu;
mod recipes;
mod sales;
mod sampling;
mod stock;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fmcg_core::{
    CashSpotCheck, Catalog, DailySale, GrvInvoice, MenuPrice, Product, RecipeLine, StockLevel,
};

use crate::errors::GenerationError;

pub use cash::{CASH_PERTURBATIONS, cash_spotchecks};
pub use grv::{GRV_PER_SKU, INVOICE_PERTURBATIONS, grv_invoices};
pub use menu::menu_pricing;
pub use recipes::recipe_lines;
pub use sales::{WEEKEND_UPLIFT, daily_sales};
pub use sampling::round_to;
pub use stock::stock_levels;

/// All six datasets for one run, held in memory before being written.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTables {
    pub daily_sales: Vec<DailySale>,
    pub stock_levels: Vec<StockLevel>,
    pub grv_invoices: Vec<GrvInvoice>,
    pub recipes: Vec<RecipeLine>,
    pub menu_pricing: Vec<MenuPrice>,
    pub cash_spotchecks: Vec<CashSpotCheck>,
}

impl GeneratedTables {
    /// Build every dataset from one `ChaCha8Rng` seeded with `seed`.
    pub fn generate(catalog: &Catalog, seed: u64) -> Result<Self, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let daily_sales = daily_sales(catalog, &mut rng).collect::<Result<Vec<_>, _>>()?;
        let stock_levels =
            stock_levels(catalog, &daily_sales, &mut rng).collect::<Result<Vec<_>, _>>()?;
        let grv_invoices = grv_invoices(catalog, &mut rng).collect();
        let recipes = recipe_lines(catalog)?;
        let menu_pricing = menu_pricing(catalog).collect();
        let cash_spotchecks = cash_spotchecks(catalog, &mut rng).collect();

        Ok(Self {
            daily_sales,
            stock_levels,
            grv_invoices,
            recipes,
            menu_pricing,
            cash_spotchecks,
        })
    }
}

/// Cartesian product date × store × product in catalog order.
pub fn date_store_sku(catalog: &Catalog) -> impl Iterator<Item = (NaiveDate, &str, &Product)> {
    catalog.dates().flat_map(move |date| {
        catalog.stores.iter().flat_map(move |store| {
            catalog
                .products
                .iter()
                .map(move |product| (date, store.as_str(), product))
        })
    })
}

/// Cartesian product date × store in catalog order.
pub fn date_store(catalog: &Catalog) -> impl Iterator<Item = (NaiveDate, &str)> {
    catalog
        .dates()
        .flat_map(move |date| catalog.stores.iter().map(move |store| (date, store.as_str())))
}
