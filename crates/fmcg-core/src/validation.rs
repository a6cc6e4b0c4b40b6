use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Validate internal consistency of a reference catalog.
///
/// This checks:
/// - the date range is ordered
/// - stores and products are present and uniquely named
/// - prices, costs and recipe quantities are finite and non-negative
/// - every recipe references a known sku and known ingredients
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    if catalog.end_date < catalog.start_date {
        return Err(Error::InvalidCatalog(format!(
            "end_date {} precedes start_date {}",
            catalog.end_date, catalog.start_date
        )));
    }

    if catalog.stores.is_empty() {
        return Err(Error::InvalidCatalog("no stores defined".to_string()));
    }
    if catalog.products.is_empty() {
        return Err(Error::InvalidCatalog("no products defined".to_string()));
    }

    let mut stores = BTreeSet::new();
    for store in &catalog.stores {
        if store.is_empty() {
            return Err(Error::InvalidCatalog("empty store name".to_string()));
        }
        if !stores.insert(store.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate store name: {store}"
            )));
        }
    }

    let mut skus = BTreeSet::new();
    for product in &catalog.products {
        if product.sku.is_empty() {
            return Err(Error::InvalidCatalog("empty sku".to_string()));
        }
        if !skus.insert(product.sku.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate sku: {}",
                product.sku
            )));
        }
        ensure_non_negative(product.price, || format!("price of {}", product.sku))?;
    }

    let mut ingredients = BTreeSet::new();
    for ingredient in &catalog.ingredients {
        if !ingredients.insert(ingredient.name.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate ingredient: {}",
                ingredient.name
            )));
        }
        ensure_non_negative(ingredient.unit_cost, || {
            format!("unit cost of {}", ingredient.name)
        })?;
    }

    let mut recipes = BTreeSet::new();
    for recipe in &catalog.recipes {
        if !skus.contains(recipe.sku.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "recipe references unknown sku: {}",
                recipe.sku
            )));
        }
        if !recipes.insert(recipe.sku.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate recipe for sku: {}",
                recipe.sku
            )));
        }
        for component in &recipe.components {
            if !ingredients.contains(component.ingredient.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "recipe {} references unknown ingredient: {}",
                    recipe.sku, component.ingredient
                )));
            }
            ensure_non_negative(component.quantity, || {
                format!("quantity of {} in {}", component.ingredient, recipe.sku)
            })?;
        }
    }

    Ok(())
}

fn ensure_non_negative(value: f64, what: impl FnOnce() -> String) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidCatalog(format!(
            "{} must be a non-negative number, got {value}",
            what()
        )))
    }
}
