//! Serde helper that writes fixed-size byte arrays as lowercase hex.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
    hex::encode(bytes).serialize(s)
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
    let s = String::deserialize(d)?;
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&s, &mut bytes).map_err(serde::de::Error::custom)?;
    Ok(bytes)
}
