//! Commit-reveal protocol and game sessions.

mod fair_choice;
mod session;

pub use fair_choice::{FairChoice, Reveal};
pub use session::{GameConfig, GameSession, RoundReport, SessionId};
