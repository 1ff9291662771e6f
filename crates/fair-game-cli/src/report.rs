//! Round announcement and reveal output.

use anyhow::Result;
use clap::ValueEnum;
use fair_game_core::{Outcome, RoundReport};
use std::io::Write;

/// How the round result is printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain lines, one fact per line
    #[default]
    Text,
    /// Single JSON document with the full reveal
    Json,
}

fn verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You win!",
        Outcome::Lose => "You lose!",
        Outcome::Draw => "Draw!",
    }
}

/// Announce the round and reveal the key
pub fn write_report<W: Write>(out: &mut W, report: &RoundReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Your move: {}", report.human_move)?;
            writeln!(out, "Computer move: {}", report.opponent_move)?;
            writeln!(out, "{}", verdict(report.outcome))?;
            writeln!(out, "HMAC key: {}", report.reveal.key_hex())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_game_core::{GameConfig, GameSession, MoveSet};

    fn play_rock() -> RoundReport {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        GameSession::new(moves, &GameConfig::default())
            .unwrap()
            .play(0)
            .unwrap()
    }

    #[test]
    fn test_text_report_lines() {
        let report = play_rock();
        let mut out = Vec::new();
        write_report(&mut out, &report, OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Your move: rock");
        assert_eq!(lines[1], format!("Computer move: {}", report.opponent_move));
        assert_eq!(lines[2], verdict(report.outcome));
        assert_eq!(lines[3], format!("HMAC key: {}", report.reveal.key_hex()));
    }

    #[test]
    fn test_json_report_parses_back() {
        let report = play_rock();
        let mut out = Vec::new();
        write_report(&mut out, &report, OutputFormat::Json).unwrap();

        let back: RoundReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, report);
    }
}
