//! Seed derivation for per-family random streams.
//!
//! Each family draws from its own generator seeded from the run's base seed, so
//! enabling or disabling one family never changes the output of another.
use rand::Rng as RngCore;

use crate::config::Family;

/// Creates a deterministic seed for a family from a base seed.
pub fn seed_for_family(base_seed: u64, family: Family) -> u64 {
    let index = family as u64 + 1;
    mix_u64(base_seed ^ index.wrapping_mul(0x9E3779B97F4A7C15))
}

/// Draws a base seed from the thread-local generator for runs without an explicit seed.
pub fn fresh_seed() -> u64 {
    rand::rng().next_u64()
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}
