//! Argument synthesis.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snap_core::{GeneratedArgument, ParameterDescriptor};

/// Every synthesized numeric argument falls in this range.
pub const NUMERIC_RANGE: RangeInclusive<i64> = 1..=100;

/// Produces one argument per parameter: a random integer for `number`
/// parameters, [`GeneratedArgument::Omitted`] for everything else.
#[derive(Debug)]
pub struct ArgumentSynthesizer<R> {
    rng: R,
}

impl ArgumentSynthesizer<StdRng> {
    /// Reproducible synthesis from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ArgumentSynthesizer<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn synthesize(&mut self, parameters: &[ParameterDescriptor]) -> Vec<GeneratedArgument> {
        parameters
            .iter()
            .map(|param| {
                if param.is_numeric() {
                    GeneratedArgument::Numeric(self.rng.gen_range(NUMERIC_RANGE))
                } else {
                    GeneratedArgument::Omitted
                }
            })
            .collect()
    }
}
