use rand::Rng;
use rand_distr::{Distribution, Poisson};

use crate::errors::GenerationError;

/// Draw a Poisson variate with the given mean.
pub(crate) fn poisson<R: Rng>(rng: &mut R, mean: f64) -> Result<u32, GenerationError> {
    let dist = Poisson::new(mean)
        .map_err(|err| GenerationError::Distribution(format!("poisson({mean}): {err}")))?;
    let draw: f64 = dist.sample(rng);
    Ok(draw as u32)
}

/// Pick one value uniformly; repeated entries weight the draw.
pub(crate) fn pick<R: Rng>(rng: &mut R, values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    values[rng.random_range(0..values.len())]
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
