use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;

use fmcg_core::{Catalog, DailySale};

use super::date_store_sku;
use super::sampling::{poisson, round_to};
use crate::errors::GenerationError;

/// Demand multiplier applied on Saturdays and Sundays.
pub const WEEKEND_UPLIFT: f64 = 1.3;
const BASE_DEMAND_MIN: u32 = 80;
const BASE_DEMAND_MAX: u32 = 200;

/// Lazily build one sales row per (date, store, sku).
///
/// A base demand is drawn uniformly, lifted on weekends, and the sold
/// quantity is a Poisson draw around it.
pub fn daily_sales<'a, R: Rng>(
    catalog: &'a Catalog,
    rng: &'a mut R,
) -> impl Iterator<Item = Result<DailySale, GenerationError>> + 'a {
    date_store_sku(catalog).map(move |(date, store, product)| {
        let mut base = rng.random_range(BASE_DEMAND_MIN..=BASE_DEMAND_MAX);
        if is_weekend(date) {
            base = (f64::from(base) * WEEKEND_UPLIFT) as u32;
        }
        let quantity_sold = poisson(&mut *rng, f64::from(base))?;

        Ok(DailySale {
            date,
            store: store.to_string(),
            sku: product.sku.clone(),
            quantity_sold,
            unit_price: product.price,
            sales_amount: round_to(f64::from(quantity_sold) * product.price, 2),
        })
    })
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn first_row_is_bread_standard_at_harare_main() {
        let catalog = Catalog::bakery();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let first = daily_sales(&catalog, &mut rng)
            .next()
            .expect("at least one row")
            .expect("valid row");
        assert_eq!(first.date, catalog.start_date);
        assert_eq!(first.store, "Harare_Main");
        assert_eq!(first.sku, "Bread_Standard");
        assert_eq!(first.unit_price, 1.00);
    }

    #[test]
    fn sales_amount_is_rounded_product_of_quantity_and_price() {
        let catalog = Catalog::bakery();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for row in daily_sales(&catalog, &mut rng) {
            let row = row.expect("valid row");
            assert_eq!(
                row.sales_amount,
                round_to(f64::from(row.quantity_sold) * row.unit_price, 2)
            );
        }
    }

    #[test]
    fn weekends_are_saturday_and_sunday() {
        let saturday = NaiveDate::from_ymd_opt(2025, 1, 4).expect("date");
        let sunday = NaiveDate::from_ymd_opt(2025, 1, 5).expect("date");
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6).expect("date");
        assert!(is_weekend(saturday));
        assert!(is_weekend(sunday));
        assert!(!is_weekend(monday));
    }

    #[test]
    fn weekend_demand_runs_higher_on_average() {
        let catalog = Catalog::bakery();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let (mut weekend, mut weekday) = (Vec::new(), Vec::new());
        for row in daily_sales(&catalog, &mut rng) {
            let row = row.expect("valid row");
            if is_weekend(row.date) {
                weekend.push(f64::from(row.quantity_sold));
            } else {
                weekday.push(f64::from(row.quantity_sold));
            }
        }
        let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
        assert!(mean(&weekend) > mean(&weekday) * 1.15);
    }
}
