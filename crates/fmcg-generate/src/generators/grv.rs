use rand::Rng;

use fmcg_core::{Catalog, GrvInvoice};

use super::sampling::pick;

/// Goods-received vouchers generated per SKU.
pub const GRV_PER_SKU: usize = 40;
/// Invoice minus received quantity; zero is twice as likely as the others.
pub const INVOICE_PERTURBATIONS: [i64; 5] = [0, 0, 5, -5, 10];
const RECEIVED_MIN: u32 = 500;
const RECEIVED_MAX: u32 = 900;

/// Lazily build `GRV_PER_SKU` voucher/invoice pairs for every product.
pub fn grv_invoices<'a, R: Rng>(
    catalog: &'a Catalog,
    rng: &'a mut R,
) -> impl Iterator<Item = GrvInvoice> + 'a {
    catalog
        .products
        .iter()
        .flat_map(|product| (0..GRV_PER_SKU).map(move |index| (product, index)))
        .map(move |(product, index)| {
            let grv_quantity = rng.random_range(RECEIVED_MIN..=RECEIVED_MAX);
            let delta = pick(&mut *rng, &INVOICE_PERTURBATIONS);
            let invoice_quantity = (i64::from(grv_quantity) + delta).max(0) as u32;

            GrvInvoice {
                grv_id: grv_id(&product.sku, index),
                sku: product.sku.clone(),
                grv_quantity,
                invoice_quantity,
                difference: i64::from(invoice_quantity) - i64::from(grv_quantity),
            }
        })
}

fn grv_id(sku: &str, index: usize) -> String {
    let prefix: String = sku.chars().take(3).collect();
    format!("GRV-{prefix}-{index}")
}
