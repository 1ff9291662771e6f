//! Draws from a cryptographically secure random source.
//!
//! Every draw goes through `try_fill_bytes` so that an entropy failure
//! surfaces as [`GameError::RandomnessUnavailable`] instead of a panic.

use crate::error::{GameError, Result};
use rand::{CryptoRng, RngCore};

/// Fill a fresh 256-bit key from `rng`.
pub fn fill_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<[u8; 32]> {
    let mut bytes = [0u8; 32];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Draw an index uniformly from `[0, n)` by rejection sampling.
///
/// Candidates at or above the largest multiple of `n` that fits in a `u64`
/// are discarded, so every index is equally likely.
pub fn uniform_index<R: RngCore + CryptoRng>(rng: &mut R, n: usize) -> Result<usize> {
    if n == 0 {
        return Err(GameError::IndexOutOfRange { index: 0, len: 0 });
    }
    let n = n as u64;
    let zone = u64::MAX - (u64::MAX % n);
    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)?;
        let candidate = u64::from_le_bytes(buf);
        if candidate < zone {
            return Ok((candidate % n) as usize);
        }
    }
}

/// RNG whose entropy source always fails
#[cfg(test)]
pub(crate) struct FailingRng;

#[cfg(test)]
impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        unreachable!("only try_fill_bytes is used")
    }

    fn next_u64(&mut self) -> u64 {
        unreachable!("only try_fill_bytes is used")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unreachable!("only try_fill_bytes is used")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        Err(rand::Error::new("entropy source offline"))
    }
}

#[cfg(test)]
impl CryptoRng for FailingRng {}
