//! Headless autoplay runner (default binary).
//!
//! Plays one game with the built-in placement search and prints the final
//! board. Useful for smoke-testing the rules and for profiling.
//!
//! Usage: `blockfall [--seed N] [--pieces N] [--json]`

use anyhow::{anyhow, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::engine::{apply_place, best_placement, Session, SessionConfig};

const DEFAULT_PIECES: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    seed: Option<u64>,
    pieces: u32,
    json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pieces: DEFAULT_PIECES,
            json: false,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let session = run(&config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        print!("{}", session.board());
        println!(
            "score {}  lines {}  level {}  pieces {}{}",
            session.score(),
            session.lines(),
            session.level(),
            session.pieces_locked(),
            if session.game_over() { "  (game over)" } else { "" }
        );
    }
    Ok(())
}

fn run(config: &RunConfig) -> Result<Session> {
    let mut session = Session::new(SessionConfig { seed: config.seed });
    info!(seed = ?config.seed, pieces = config.pieces, "autoplay started");

    while !session.game_over() && session.pieces_locked() < config.pieces {
        let Some(piece) = session.active().copied() else {
            break;
        };
        let Some(placement) = best_placement(session.board(), &piece) else {
            break;
        };
        apply_place(&mut session, placement.x, placement.rotations)?;
    }

    info!(
        score = session.score(),
        lines = session.lines(),
        level = session.level(),
        "autoplay finished"
    );
    Ok(session)
}

/// Parse command-line flags. `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<RunConfig>> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--pieces" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pieces"))?;
                config.pieces = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --pieces value: {}", v))?;
            }
            "--json" => config.json = true,
            "-h" | "--help" => return Ok(None),
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn print_usage() {
    println!("usage: blockfall [--seed N] [--pieces N] [--json]");
    println!();
    println!("  --seed N     seed for the piece sequence (random if omitted)");
    println!("  --pieces N   stop after N pieces lock (default {})", DEFAULT_PIECES);
    println!("  --json       print the final game snapshot as JSON");
}
