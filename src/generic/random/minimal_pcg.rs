//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] trait.
//!
//! Each output of the generator is 32 bits, and 64 bit outputs are built from two consecutive 32 bit outputs.
//! As the generator is seeded from a `u64`, any run may be repeated by reusing the seed.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Any odd increment gives a full period.
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn repeatable() {
        let mut one = MinimalPCG32::from_seed(73_u64.to_le_bytes());
        let mut two = MinimalPCG32::from_seed(73_u64.to_le_bytes());

        for _ in 0..1000 {
            assert_eq!(one.next_u32(), two.next_u32());
        }
    }

    #[test]
    fn seeds_diverge() {
        let mut two_seed = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut seventy_three_seed = MinimalPCG32::from_seed(73_u64.to_le_bytes());

        let two_outputs = (0..16).map(|_| two_seed.next_u32()).collect::<Vec<_>>();
        let seventy_three_outputs = (0..16)
            .map(|_| seventy_three_seed.next_u32())
            .collect::<Vec<_>>();

        assert_ne!(two_outputs, seventy_three_outputs);
    }

    #[test]
    fn wide_output_uses_both_halves() {
        let mut narrow = MinimalPCG32::from_seed(11_u64.to_le_bytes());
        let mut wide = MinimalPCG32::from_seed(11_u64.to_le_bytes());

        let low = narrow.next_u32() as u64;
        let high = narrow.next_u32() as u64;

        assert_eq!(wide.next_u64(), (high << 32) | low);
    }
}
