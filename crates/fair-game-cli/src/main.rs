//! Fair Game CLI
//!
//! Provably fair rock-paper-scissors generalized to any odd number of moves.
//!
//! Commands:
//! - `play <MOVES>...` - commit to a computer move, prompt for yours, reveal
//! - `verify` - check a revealed key and move against a published HMAC

mod help;
mod menu;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fair_game_core::{DigestAlgorithm, GameConfig, GameSession, MoveDigest, MoveSet, SecretKey};
use report::OutputFormat;
use std::io;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE_EXAMPLE: &str = "Example: fair-game play rock paper scissors lizard Spock";

#[derive(Parser)]
#[command(
    name = "fair-game",
    about = "Provably fair rock-paper-scissors for any odd number of moves"
)]
struct Cli {
    /// Hash function behind the HMAC commitment
    #[arg(long, env = "FAIR_GAME_HASH", default_value = "sha3-256", global = true)]
    hash: DigestAlgorithm,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one round against the computer
    Play {
        /// How the result and reveal are printed
        #[arg(long, env = "FAIR_GAME_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Move labels in ring order: odd count, at least 3, no repeats
        moves: Vec<String>,
    },

    /// Check a revealed key and move against a published HMAC
    Verify {
        /// HMAC key printed after the round
        #[arg(long)]
        key: String,

        /// Computer move printed after the round
        #[arg(long = "move")]
        move_label: String,

        /// HMAC printed before the round
        #[arg(long)]
        hmac: String,
    },
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

/// Exit status: bad move list
const EXIT_INVALID_ARGS: u8 = 1;
/// Exit status: HMAC does not match the revealed key and move
const EXIT_MISMATCH: u8 = 2;

fn play(labels: Vec<String>, algorithm: DigestAlgorithm, format: OutputFormat) -> Result<u8> {
    let moves = match MoveSet::new(labels) {
        Ok(moves) => moves,
        Err(err) => {
            warn!(%err, "Rejected move list");
            println!("Error: {err}.");
            println!("{USAGE_EXAMPLE}");
            return Ok(EXIT_INVALID_ARGS);
        }
    };

    let session = GameSession::new(moves, &GameConfig { algorithm })
        .context("failed to commit to a computer move")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    menu::run(session, stdin.lock(), &mut stdout, format)?;
    Ok(0)
}

fn verify(key: &str, move_label: &str, hmac: &str, algorithm: DigestAlgorithm) -> Result<u8> {
    let key = SecretKey::from_hex(key).context("invalid --key")?;
    let digest = MoveDigest::from_hex(hmac).context("invalid --hmac")?;

    if digest.verify(algorithm, &key, move_label) {
        info!(%algorithm, "Commitment verified");
        println!("Verified: HMAC-{algorithm} matches move {move_label:?}");
        Ok(0)
    } else {
        println!("Mismatch: HMAC-{algorithm} does not match move {move_label:?}");
        Ok(EXIT_MISMATCH)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing() {
        eprintln!("Warning: {err:#}");
    }

    let result = match cli.command {
        Command::Play { format, moves } => play(moves, cli.hash, format),
        Command::Verify {
            key,
            move_label,
            hmac,
        } => verify(&key, &move_label, &hmac, cli.hash),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play_with_defaults() {
        let cli = Cli::try_parse_from(["fair-game", "play", "rock", "paper", "scissors"]).unwrap();
        assert_eq!(cli.hash, DigestAlgorithm::Sha3_256);
        match cli.command {
            Command::Play { format, moves } => {
                assert_eq!(format, OutputFormat::Text);
                assert_eq!(moves, vec!["rock", "paper", "scissors"]);
            }
            Command::Verify { .. } => panic!("expected play"),
        }
    }

    #[test]
    fn test_parse_hash_and_format() {
        let cli = Cli::try_parse_from([
            "fair-game", "play", "--hash", "sha256", "--format", "json", "a", "b", "c",
        ])
        .unwrap();
        assert_eq!(cli.hash, DigestAlgorithm::Sha256);
        assert!(matches!(
            cli.command,
            Command::Play {
                format: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_hash_rejected() {
        assert!(Cli::try_parse_from(["fair-game", "--hash", "md5", "play", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_verify_command_exit_codes() {
        let key = SecretKey::from_bytes([3; 32]);
        let digest = MoveDigest::new(DigestAlgorithm::Sha3_256, &key, "rock");

        let ok = verify(&key.to_hex(), "rock", &digest.to_hex(), DigestAlgorithm::Sha3_256).unwrap();
        assert_eq!(ok, 0);

        let bad = verify(&key.to_hex(), "paper", &digest.to_hex(), DigestAlgorithm::Sha3_256).unwrap();
        assert_eq!(bad, EXIT_MISMATCH);

        assert!(verify("nothex", "rock", &digest.to_hex(), DigestAlgorithm::Sha3_256).is_err());
    }

    #[test]
    fn test_invalid_move_list_exits_nonzero() {
        let code = play(
            vec!["rock".into(), "paper".into()],
            DigestAlgorithm::Sha3_256,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(code, EXIT_INVALID_ARGS);
    }
}
