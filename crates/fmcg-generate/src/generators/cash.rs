use rand::Rng;

use fmcg_core::{CashSpotCheck, Catalog};

use super::date_store;
use super::sampling::pick;

/// Actual minus expected cash; zero is twice as likely as the others.
pub const CASH_PERTURBATIONS: [i64; 6] = [0, 0, -20, -10, 10, 15];
const EXPECTED_MIN: u32 = 800;
const EXPECTED_MAX: u32 = 2000;

/// Lazily build one spot check per (date, store).
pub fn cash_spotchecks<'a, R: Rng>(
    catalog: &'a Catalog,
    rng: &'a mut R,
) -> impl Iterator<Item = CashSpotCheck> + 'a {
    date_store(catalog).map(move |(date, store)| {
        let expected = i64::from(rng.random_range(EXPECTED_MIN..=EXPECTED_MAX));
        let actual = expected + pick(&mut *rng, &CASH_PERTURBATIONS);

        CashSpotCheck {
            date,
            store: store.to_string(),
            expected_cash: expected as f64,
            actual_cash: actual as f64,
            variance: (actual - expected) as f64,
        }
    })
}
