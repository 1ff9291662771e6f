//! Cryptographic primitives for the fair game protocol.
//!
//! This module provides:
//! - SecretKey and MoveDigest for the keyed-hash commitment
//! - DigestAlgorithm to pick the hash behind the HMAC
//! - Unbiased draws from a cryptographically secure source

mod commitment;
mod hex_bytes;
mod random;

pub use commitment::{DigestAlgorithm, MoveDigest, SecretKey, KEY_LEN};
pub use random::{fill_key, uniform_index};

#[cfg(test)]
pub(crate) use random::FailingRng;
