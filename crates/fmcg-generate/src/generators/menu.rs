use fmcg_core::{Catalog, MenuPrice};

/// One row per product at its catalog price.
pub fn menu_pricing(catalog: &Catalog) -> impl Iterator<Item = MenuPrice> + '_ {
    catalog.products.iter().map(|product| MenuPrice {
        sku: product.sku.clone(),
        selling_price: product.price,
    })
}
