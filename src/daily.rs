//! # Daily Selector
//!
//! Maps a calendar day to one deterministic index into the question store,
//! so every request on the same day sees the same question.
//!
//! The draw has to be reproducible across runs and across implementations,
//! so the scheme is pinned down exactly: format the date as `YYYY-MM-DD`,
//! copy those bytes into a zeroed 32-byte seed, key a ChaCha8 stream cipher
//! RNG with it, take one 64-bit output, and reduce it modulo the store size.
//!
//! The selector owns its own generator, seeded fresh on every call. The
//! random endpoint draws from the thread RNG instead, so neither endpoint
//! can perturb the other's sequence.

use chrono::NaiveDate;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{RngCore, SeedableRng},
};

use crate::error::AppError;

/// Returns today's index into a store of `store_size` records.
///
/// Same `date` always yields the same index; the result is always in
/// `[0, store_size)`. A zero-sized store is rejected rather than sampled.
pub fn daily_index(date: NaiveDate, store_size: usize) -> Result<usize, AppError> {
    if store_size == 0 {
        return Err(AppError::EmptyStore);
    }

    let seed_string = date.format("%Y-%m-%d").to_string();

    let mut seed = [0u8; 32];
    seed[..seed_string.len()].copy_from_slice(seed_string.as_bytes());

    let mut rng = ChaCha8Rng::from_seed(seed);

    Ok((rng.next_u64() % store_size as u64) as usize)
}
