//! Deterministic reading RNG.
//!
//! `SimRng` wraps a `SmallRng` seeded from `SimConfig::seed`, so two panels
//! built from the same config generate identical reading sequences.  It is an
//! `RngCore`, which is all a generator asks of its random source.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Seeded random source owned by a single generator.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RngCore for SimRng {
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
