//! SecretKey and MoveDigest for the keyed-hash commit-reveal scheme.

use crate::error::{GameError, Result};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::Sha3_256;
use std::fmt;
use std::str::FromStr;

/// Length in bytes of both the secret key and the digest
pub const KEY_LEN: usize = 32;

/// Hash function behind the HMAC commitment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    #[default]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[serde(rename = "sha256")]
    Sha256,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha3_256 => "sha3-256",
            DigestAlgorithm::Sha256 => "sha256",
        }
    }

    fn mac(&self, key: &[u8], message: &[u8]) -> [u8; KEY_LEN] {
        match self {
            DigestAlgorithm::Sha3_256 => {
                let mut mac = Hmac::<Sha3_256>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(message);
                mac.finalize().into_bytes().into()
            }
            DigestAlgorithm::Sha256 => {
                let mut mac =
                    Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts keys of any length");
                mac.update(message);
                mac.finalize().into_bytes().into()
            }
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha3-256" | "sha3" => Ok(DigestAlgorithm::Sha3_256),
            "sha256" | "sha-256" | "sha2" => Ok(DigestAlgorithm::Sha256),
            other => Err(GameError::InvalidEncoding(format!(
                "unknown digest algorithm {other:?}"
            ))),
        }
    }
}

/// 256-bit HMAC key drawn once per session
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(#[serde(with = "crate::crypto::hex_bytes")] [u8; KEY_LEN]);

impl SecretKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Canonical lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex key
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex32(s).map(Self)
    }
}

// Only a short prefix, so a stray debug log never leaks the whole key
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

/// Digest = HMAC(key, move label)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveDigest(#[serde(with = "crate::crypto::hex_bytes")] [u8; KEY_LEN]);

impl MoveDigest {
    /// Compute the digest binding `label` under `key`
    pub fn new(algorithm: DigestAlgorithm, key: &SecretKey, label: &str) -> Self {
        Self(algorithm.mac(key.as_bytes(), label.as_bytes()))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Canonical lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex digest
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex32(s).map(Self)
    }

    /// Verify that the given key and label produce this digest.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, algorithm: DigestAlgorithm, key: &SecretKey, label: &str) -> bool {
        match algorithm {
            DigestAlgorithm::Sha3_256 => {
                let mut mac = Hmac::<Sha3_256>::new_from_slice(key.as_bytes())
                    .expect("HMAC accepts keys of any length");
                mac.update(label.as_bytes());
                mac.verify_slice(&self.0).is_ok()
            }
            DigestAlgorithm::Sha256 => {
                let mut mac = Hmac::<Sha256>::new_from_slice(key.as_bytes())
                    .expect("HMAC accepts keys of any length");
                mac.update(label.as_bytes());
                mac.verify_slice(&self.0).is_ok()
            }
        }
    }
}

impl fmt::Debug for MoveDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for MoveDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

fn decode_hex32(s: &str) -> Result<[u8; KEY_LEN]> {
    let s = s.trim();
    if s.len() != KEY_LEN * 2 {
        return Err(GameError::InvalidEncoding(format!(
            "expected {} hex characters, got {}",
            KEY_LEN * 2,
            s.len()
        )));
    }
    let mut bytes = [0u8; KEY_LEN];
    hex::decode_to_slice(s, &mut bytes)?;
    Ok(bytes)
}
