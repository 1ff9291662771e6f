//! Single-round game session.

use super::{FairChoice, Reveal};
use crate::crypto::{DigestAlgorithm, MoveDigest};
use crate::error::{GameError, Result};
use crate::games::{MoveSet, Outcome, OutcomeMatrix, OutcomeResolver};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

/// Unique session identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hash function behind the HMAC commitment
    pub algorithm: DigestAlgorithm,
}

/// Everything a player needs after the round: both moves, the outcome, and
/// the material to check the commitment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub session_id: SessionId,
    pub human_index: usize,
    pub human_move: String,
    pub opponent_index: usize,
    pub opponent_move: String,
    /// From the human's point of view
    pub outcome: Outcome,
    pub digest: MoveDigest,
    pub reveal: Reveal,
}

impl RoundReport {
    /// Recheck the reveal against the digest published at session start
    pub fn verify(&self) -> bool {
        self.reveal.verify(&self.digest)
    }
}

/// One game: a move set, the committed opponent move, and a single round.
///
/// The commitment is made in the constructor, so the digest exists before
/// any caller can ask for a human move. [`GameSession::play`] consumes the
/// session; a round cannot be replayed against the same commitment.
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    moves: MoveSet,
    resolver: OutcomeResolver,
    choice: FairChoice,
    matrix: OnceCell<OutcomeMatrix>,
}

impl GameSession {
    /// Start a session with a commitment drawn from OS entropy
    pub fn new(moves: MoveSet, config: &GameConfig) -> Result<Self> {
        let choice = FairChoice::initialize(&moves, config.algorithm)?;
        Ok(Self::from_parts(moves, choice))
    }

    /// Start a session with a commitment drawn from `rng`
    pub fn with_rng<R: RngCore + CryptoRng>(
        moves: MoveSet,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let choice = FairChoice::initialize_with_rng(&moves, config.algorithm, rng)?;
        Ok(Self::from_parts(moves, choice))
    }

    fn from_parts(moves: MoveSet, choice: FairChoice) -> Self {
        let id = SessionId::new();
        let resolver = OutcomeResolver::new(&moves);
        info!(
            session = %id,
            moves = moves.len(),
            half_span = resolver.half_span(),
            algorithm = %choice.algorithm(),
            "Session started"
        );

        Self {
            id,
            moves,
            resolver,
            choice,
            matrix: OnceCell::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn half_span(&self) -> usize {
        self.resolver.half_span()
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.choice.algorithm()
    }

    pub fn digest(&self) -> &MoveDigest {
        self.choice.digest()
    }

    /// Digest as hex, for display before the human moves
    pub fn publish_digest(&self) -> String {
        debug!(session = %self.id, "Digest published");
        self.choice.publish_digest()
    }

    /// Help table, built on first use
    pub fn help_matrix(&self) -> &OutcomeMatrix {
        self.matrix.get_or_init(|| self.resolver.build_matrix())
    }

    /// Play the human's move (0-based) against the committed move and reveal.
    pub fn play(self, human_index: usize) -> Result<RoundReport> {
        let human_move = self
            .moves
            .label(human_index)
            .ok_or(GameError::IndexOutOfRange {
                index: human_index,
                len: self.moves.len(),
            })?
            .to_string();

        let opponent_index = self.choice.move_index();
        let outcome = self.resolver.resolve(human_index, opponent_index)?;
        let digest = *self.choice.digest();
        let reveal = self.choice.reveal();

        info!(
            session = %self.id,
            human = %human_move,
            opponent = %reveal.move_label,
            %outcome,
            "Round resolved"
        );

        Ok(RoundReport {
            session_id: self.id,
            human_index,
            human_move,
            opponent_index,
            opponent_move: reveal.move_label.clone(),
            outcome,
            digest,
            reveal,
        })
    }
}
