//! Sources of randomness.
//!
//! Anything which implements [Rng](rand::Rng) may be used to [generate](crate::generator::generate) an instance.
//! Though, [MinimalPCG32] is used by default, seeded either explicitly or from the [clock](seed_from_clock).

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;

use rand::SeedableRng;

/// A [MinimalPCG32] seeded from the nanoseconds since the unix epoch.
///
/// Returns the seed used alongside the source, so a run may be repeated.
pub fn seed_from_clock() -> (u64, MinimalPCG32) {
    let seed = match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
        Ok(duration) => duration.as_nanos() as u64,
        Err(_) => 0,
    };
    (seed, MinimalPCG32::from_seed(seed.to_le_bytes()))
}
