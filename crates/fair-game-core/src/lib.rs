//! Fair Game Core Library
//!
//! This crate provides the commit-reveal protocol, the generalized outcome
//! rule, and the session type for a provably fair simultaneous-choice game
//! over any odd-sized set of distinct moves.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{DigestAlgorithm, MoveDigest, SecretKey};
pub use error::{GameError, InvalidMoveSet, Result};
pub use games::{MoveSet, Outcome, OutcomeMatrix, OutcomeResolver};
pub use protocol::{FairChoice, GameConfig, GameSession, Reveal, RoundReport, SessionId};
