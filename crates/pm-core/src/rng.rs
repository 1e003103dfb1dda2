//! Deterministic RNG wrapper for fixture generation.
//!
//! # Determinism scope
//!
//! A `FixtureRng` built from the same seed yields the same sequence within
//! one build of this crate.  Nothing promises the sequence matches another
//! `rand` version, platform, or language runtime, so equivalence tests never
//! assert on generated values — they only compare two algorithms run on the
//! same generated input.  Cross-implementation fixtures are literal or CSV.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Seeded RNG for benchmark and test fixtures.
///
/// Implements [`RngCore`], so it can be passed anywhere a `rand::Rng` is
/// expected, including [`generate_scenario`](crate::generate_scenario).
pub struct FixtureRng(SmallRng);

impl FixtureRng {
    pub fn new(seed: u64) -> Self {
        FixtureRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

impl RngCore for FixtureRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
