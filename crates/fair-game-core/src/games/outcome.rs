//! Generalized outcome rule for any odd number of moves.
//!
//! Moves sit on a ring in [`MoveSet`] order. A move beats the `half_span`
//! moves that precede it and loses to the `half_span` moves that follow it,
//! where `half_span = (len - 1) / 2`. With `rock, paper, scissors` this is
//! the classic game: paper covers rock, scissors cut paper, rock (wrapping
//! back from index 0) crushes scissors. Round resolution and the help matrix
//! both go through [`circular_outcome`], so they cannot disagree.

use super::MoveSet;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome from the actor's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// The same pairing seen from the opponent's side
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Circular distance rule. Indices must already be in `[0, len)`.
fn circular_outcome(len: usize, half_span: usize, actor: usize, opponent: usize) -> Outcome {
    if actor == opponent {
        return Outcome::Draw;
    }
    // Steps back around the ring from actor to opponent
    let distance = (actor + len - opponent) % len;
    if distance <= half_span {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Decides rounds and builds the help matrix for one move set
#[derive(Clone, Debug)]
pub struct OutcomeResolver {
    labels: Vec<String>,
    half_span: usize,
}

impl OutcomeResolver {
    pub fn new(moves: &MoveSet) -> Self {
        Self {
            labels: moves.labels().to_vec(),
            half_span: (moves.len() - 1) / 2,
        }
    }

    /// Number of moves each move defeats
    pub fn half_span(&self) -> usize {
        self.half_span
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Outcome for the move at `actor` played against the move at `opponent`.
    ///
    /// Fails with [`GameError::IndexOutOfRange`] if either index is outside
    /// the move set.
    pub fn resolve(&self, actor: usize, opponent: usize) -> Result<Outcome> {
        let len = self.len();
        for index in [actor, opponent] {
            if index >= len {
                return Err(GameError::IndexOutOfRange { index, len });
            }
        }
        Ok(circular_outcome(len, self.half_span, actor, opponent))
    }

    /// Full pairwise table; cell `(i, j)` is the outcome for row move `i`
    /// against column move `j`.
    pub fn build_matrix(&self) -> OutcomeMatrix {
        let len = self.len();
        let cells = (0..len)
            .map(|i| {
                (0..len)
                    .map(|j| circular_outcome(len, self.half_span, i, j))
                    .collect()
            })
            .collect();

        OutcomeMatrix {
            labels: self.labels.clone(),
            cells,
        }
    }
}

/// N×N outcome table for help display
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<Outcome>>,
}

impl OutcomeMatrix {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Outcome> {
        self.cells.get(row)?.get(column).copied()
    }

    /// Rows paired with their labels, in move order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}
