use super::Error;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a code point is drawn from the configured `[min, max]` bounds
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RangeMode {
    /// `floor(u * (min - max) + max)`, skewed toward `max` (which is only hit
    /// when `u == 0`)
    #[default]
    Inverted,
    /// Uniform over the inclusive range `min..=max`
    Standard,
}

/// Computes `floor(u * (min - max) + max)` with `u` uniform in `[0, 1)`.
///
/// Note the bounds are deliberately subtracted in inverted order: for
/// `min < max` the result lies in `[min, max]` and equals `max` only when the
/// drawn `u` is exactly zero. No validation is performed on the bounds.
pub fn bounded_random<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let u: f64 = rng.gen();
    (u * (min - max) + max).floor()
}

/// Draw a single integer code point candidate between `min` and `max`.
/// Fails with [`Error::InvalidRange`] when `min > max`
pub fn sample_code_point<R: Rng + ?Sized>(
    rng: &mut R,
    min: u32,
    max: u32,
    mode: RangeMode,
) -> Result<u32, Error> {
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }
    Ok(match mode {
        RangeMode::Inverted => bounded_random(rng, min as f64, max as f64) as u32,
        RangeMode::Standard => rng.gen_range(min..=max),
    })
}
