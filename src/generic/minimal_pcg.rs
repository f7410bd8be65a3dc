//! A simple pseudorandom number generator.
//!
//! Specifically, PCG32 (XSH RR) as given in the minimal C implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] trait.
//!
//! Each [context](crate::context) owns a source of rng, used for random decisions and random polarities.
//! The generic context is paramaterised to anything which satisfies [Rng](rand::Rng), though the [Context](crate::context::Context) fixes [MinimalPCG32], seeded with zero, so solves are deterministic.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment.
#[derive(Default, Clone)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc | 1);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
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
        const INCREMENT: u64 = 1442695040888963407;
        let mut pcg = Self {
            state: 0,
            inc: INCREMENT,
        };
        pcg.next_u32();
        pcg.state = pcg.state.wrapping_add(u64::from_le_bytes(seed));
        pcg.next_u32();
        pcg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn deterministic() {
        let mut a = MinimalPCG32::from_seed(2u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(2u64.to_le_bytes());
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seeds_differ() {
        let mut a = MinimalPCG32::from_seed(2u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(73u64.to_le_bytes());
        let a_values = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b_values = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a_values, b_values);
    }

    #[test]
    fn rough_balance() {
        let mut rng = MinimalPCG32::from_seed(0u64.to_le_bytes());
        let trues = (0..10_000).filter(|_| rng.gen_bool(0.5)).count();
        assert!((4_000..6_000).contains(&trues));
    }
}
