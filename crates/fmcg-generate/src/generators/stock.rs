use std::collections::HashMap;

use chrono::NaiveDate;
use rand::Rng;

use fmcg_core::{Catalog, DailySale, StockLevel};

use super::date_store_sku;
use crate::errors::GenerationError;

const OPENING_MIN: u32 = 300;
const OPENING_MAX: u32 = 700;
const DELIVERIES_MIN: u32 = 50;
const DELIVERIES_MAX: u32 = 200;

/// Lazily build stock rows for the same keys as the sales table.
///
/// Sold units come from the sales row with the identical key; closing stock
/// never goes below zero.
pub fn stock_levels<'a, R: Rng>(
    catalog: &'a Catalog,
    sales: &'a [DailySale],
    rng: &'a mut R,
) -> impl Iterator<Item = Result<StockLevel, GenerationError>> + 'a {
    let sold: HashMap<(NaiveDate, &str, &str), u32> = sales
        .iter()
        .map(|row| {
            (
                (row.date, row.store.as_str(), row.sku.as_str()),
                row.quantity_sold,
            )
        })
        .collect();

    date_store_sku(catalog).map(move |(date, store, product)| {
        let opening_stock = rng.random_range(OPENING_MIN..=OPENING_MAX);
        let deliveries = rng.random_range(DELIVERIES_MIN..=DELIVERIES_MAX);
        let sales = *sold
            .get(&(date, store, product.sku.as_str()))
            .ok_or_else(|| GenerationError::MissingSale {
                date,
                store: store.to_string(),
                sku: product.sku.clone(),
            })?;

        Ok(StockLevel {
            date,
            store: store.to_string(),
            sku: product.sku.clone(),
            opening_stock,
            deliveries,
            sales,
            closing_stock: (opening_stock + deliveries).saturating_sub(sales),
        })
    })
}
