//! Game definitions and logic.

mod moves;
mod outcome;

pub use moves::MoveSet;
pub use outcome::{Outcome, OutcomeMatrix, OutcomeResolver};
