//! Interactive move prompt.

use crate::help;
use crate::report::{write_report, OutputFormat};
use anyhow::Result;
use fair_game_core::{GameSession, MoveSet, RoundReport};
use std::io::{BufRead, Write};
use tracing::debug;

/// One parsed line of user input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Help,
    /// 0-based move index
    Move(usize),
}

impl MenuChoice {
    /// Parse a prompt answer: `0` exits, `?` asks for help, `1..=len` picks
    /// a move. Anything else is `None`.
    pub fn parse(input: &str, len: usize) -> Option<MenuChoice> {
        match input.trim() {
            "0" => Some(MenuChoice::Exit),
            "?" => Some(MenuChoice::Help),
            other => match other.parse::<usize>() {
                Ok(n) if (1..=len).contains(&n) => Some(MenuChoice::Move(n - 1)),
                _ => None,
            },
        }
    }
}

fn write_moves<W: Write>(out: &mut W, moves: &MoveSet) -> Result<()> {
    writeln!(out, "Available moves:")?;
    for (i, label) in moves.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, label)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")?;
    write!(out, "Enter your move: ")?;
    out.flush()?;
    Ok(())
}

/// Run the prompt until the user plays a move or leaves.
///
/// The HMAC line is written before the first prompt. Returns `None` when the
/// user exits or input ends without a move.
pub fn run<R: BufRead, W: Write>(
    session: GameSession,
    mut input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<Option<RoundReport>> {
    writeln!(out, "HMAC: {}", session.publish_digest())?;

    let mut line = String::new();
    loop {
        write_moves(out, session.moves())?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "Exiting...")?;
            return Ok(None);
        }

        match MenuChoice::parse(&line, session.moves().len()) {
            Some(MenuChoice::Exit) => {
                writeln!(out, "Exiting...")?;
                return Ok(None);
            }
            Some(MenuChoice::Help) => {
                writeln!(out, "Help:")?;
                writeln!(out, "{}", help::render(session.help_matrix()))?;
            }
            Some(MenuChoice::Move(index)) => {
                let report = session.play(index)?;
                write_report(out, &report, format)?;
                return Ok(Some(report));
            }
            None => {
                debug!(input = %line.trim(), "Rejected menu input");
                writeln!(out, "Error: Invalid move.")?;
            }
        }
    }
}
