//! Verifiably fair opponent move.
//!
//! [`FairChoice::initialize`] draws a key and a move, then binds them in an
//! HMAC digest before anything else can happen. Only the digest is readable
//! until [`FairChoice::reveal`] consumes the choice and hands out the key and
//! move, so the move cannot be swapped once the digest has been shown.

use crate::crypto::{fill_key, uniform_index, DigestAlgorithm, MoveDigest, SecretKey};
use crate::error::Result;
use crate::games::MoveSet;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// Committed opponent move
#[derive(Debug)]
pub struct FairChoice {
    algorithm: DigestAlgorithm,
    key: SecretKey,
    move_index: usize,
    move_label: String,
    digest: MoveDigest,
}

impl FairChoice {
    /// Commit to a move drawn from the operating system's entropy source
    pub fn initialize(moves: &MoveSet, algorithm: DigestAlgorithm) -> Result<Self> {
        Self::initialize_with_rng(moves, algorithm, &mut OsRng)
    }

    /// Commit to a move drawn from `rng`.
    ///
    /// Fails with `RandomnessUnavailable` if `rng` cannot supply entropy;
    /// there is no fallback source.
    pub fn initialize_with_rng<R: RngCore + CryptoRng>(
        moves: &MoveSet,
        algorithm: DigestAlgorithm,
        rng: &mut R,
    ) -> Result<Self> {
        let key = SecretKey::from_bytes(fill_key(rng)?);
        let move_index = uniform_index(rng, moves.len())?;
        let move_label = moves.labels()[move_index].clone();
        let digest = MoveDigest::new(algorithm, &key, &move_label);

        Ok(Self {
            algorithm,
            key,
            move_index,
            move_label,
            digest,
        })
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn digest(&self) -> &MoveDigest {
        &self.digest
    }

    /// Digest as 64 lowercase hex characters
    pub fn publish_digest(&self) -> String {
        self.digest.to_hex()
    }

    pub(crate) fn move_index(&self) -> usize {
        self.move_index
    }

    /// Give up the key and the committed move for verification
    pub fn reveal(self) -> Reveal {
        Reveal {
            algorithm: self.algorithm,
            key: self.key,
            move_index: self.move_index,
            move_label: self.move_label,
        }
    }
}

/// Key and move released after the round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub algorithm: DigestAlgorithm,
    pub key: SecretKey,
    pub move_index: usize,
    pub move_label: String,
}

impl Reveal {
    /// Key as 64 lowercase hex characters
    pub fn key_hex(&self) -> String {
        self.key.to_hex()
    }

    /// Check the revealed key and move against a previously published digest
    pub fn verify(&self, digest: &MoveDigest) -> bool {
        digest.verify(self.algorithm, &self.key, &self.move_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::FailingRng;
    use crate::error::GameError;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rpsls() -> MoveSet {
        MoveSet::new(["rock", "paper", "scissors", "lizard", "Spock"]).unwrap()
    }

    #[test]
    fn test_reveal_matches_published_digest() {
        let moves = rpsls();
        let choice = FairChoice::initialize(&moves, DigestAlgorithm::Sha3_256).unwrap();
        let published = MoveDigest::from_hex(&choice.publish_digest()).unwrap();

        let reveal = choice.reveal();
        assert!(reveal.verify(&published));
        assert_eq!(moves.label(reveal.move_index), Some(reveal.move_label.as_str()));
        assert_eq!(reveal.key_hex().len(), 64);
    }

    #[test]
    fn test_published_digest_is_canonical_hex() {
        let choice = FairChoice::initialize(&rpsls(), DigestAlgorithm::Sha256).unwrap();
        let hex = choice.publish_digest();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hex, choice.digest().to_string());
    }

    #[test]
    fn test_same_seed_same_commitment() {
        let moves = rpsls();
        let a = FairChoice::initialize_with_rng(
            &moves,
            DigestAlgorithm::Sha3_256,
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        let b = FairChoice::initialize_with_rng(
            &moves,
            DigestAlgorithm::Sha3_256,
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.reveal(), b.reveal());
    }

    #[test]
    fn test_tampered_move_fails_verification() {
        let moves = rpsls();
        let choice = FairChoice::initialize_with_rng(
            &moves,
            DigestAlgorithm::Sha3_256,
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
        let digest = *choice.digest();
        let honest = choice.reveal();

        for label in moves.iter().filter(|l| *l != honest.move_label) {
            let forged = Reveal {
                move_label: label.to_string(),
                ..honest.clone()
            };
            assert!(!forged.verify(&digest));
        }
    }

    #[test]
    fn test_tampered_key_fails_verification() {
        let choice = FairChoice::initialize(&rpsls(), DigestAlgorithm::Sha3_256).unwrap();
        let digest = *choice.digest();
        let mut reveal = choice.reveal();

        let mut bytes = *reveal.key.as_bytes();
        bytes[0] ^= 0x01;
        reveal.key = SecretKey::from_bytes(bytes);
        assert!(!reveal.verify(&digest));
    }

    #[test]
    fn test_failing_rng_is_fatal() {
        let err = FairChoice::initialize_with_rng(
            &rpsls(),
            DigestAlgorithm::Sha3_256,
            &mut FailingRng,
        )
        .unwrap_err();
        assert!(matches!(err, GameError::RandomnessUnavailable(_)));
    }

    #[test]
    fn test_every_move_can_be_chosen() {
        let moves = rpsls();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [false; 5];
        for _ in 0..200 {
            let choice =
                FairChoice::initialize_with_rng(&moves, DigestAlgorithm::Sha3_256, &mut rng)
                    .unwrap();
            seen[choice.move_index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_reveal_serializes_key_as_hex() {
        let reveal = FairChoice::initialize(&rpsls(), DigestAlgorithm::Sha3_256)
            .unwrap()
            .reveal();
        let json = serde_json::to_value(&reveal).unwrap();
        assert_eq!(json["key"], reveal.key_hex());
        assert_eq!(json["algorithm"], "sha3-256");

        let back: Reveal = serde_json::from_value(json).unwrap();
        assert_eq!(back, reveal);
    }

    proptest! {
        #[test]
        fn prop_single_char_mutation_changes_digest(
            key in any::<[u8; 32]>(),
            label in "[a-zA-Z]{1,12}",
            pos in any::<prop::sample::Index>(),
            replacement in proptest::char::range('a', 'z'),
        ) {
            let key = SecretKey::from_bytes(key);
            let digest = MoveDigest::new(DigestAlgorithm::Sha3_256, &key, &label);

            let mut chars: Vec<char> = label.chars().collect();
            let i = pos.index(chars.len());
            prop_assume!(chars[i] != replacement);
            chars[i] = replacement;
            let mutated: String = chars.into_iter().collect();

            prop_assert!(digest.verify(DigestAlgorithm::Sha3_256, &key, &label));
            prop_assert!(!digest.verify(DigestAlgorithm::Sha3_256, &key, &mutated));
        }
    }
}
