//! Validated, ordered set of move labels.

use crate::error::InvalidMoveSet;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Ordered list of distinct move labels with an odd length of at least 3.
///
/// The ordering defines the ring the outcome rule walks: each move beats the
/// `(len - 1) / 2` moves that precede it, wrapping from the first label back
/// to the last, and loses to the rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet {
    labels: Vec<String>,
}

impl MoveSet {
    /// Validate `labels` and build a move set.
    ///
    /// Labels are compared exactly, so `Rock` and `rock` are distinct moves.
    pub fn new<I, S>(labels: I) -> Result<Self, InvalidMoveSet>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let count = labels.len();

        if count < 3 {
            return Err(InvalidMoveSet::TooFew { count });
        }
        if count % 2 == 0 {
            return Err(InvalidMoveSet::EvenCount { count });
        }

        let mut seen = HashSet::with_capacity(count);
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(InvalidMoveSet::EmptyLabel { position: i + 1 });
            }
            if !seen.insert(label.as_str()) {
                return Err(InvalidMoveSet::Duplicate {
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels })
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false: a valid move set has at least 3 moves
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `index`, if in range
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Index of `label`, if present
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(", "))
    }
}
