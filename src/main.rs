//! Headless runner (default binary).
//!
//! Plays a seeded game with a greedy bot: each turn it takes the drop that
//! clears the most lines, falling back to the first legal spot. Useful for
//! checking a config and for eyeballing scores without a frontend.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use block_blast::core::{legal_origins, preview, EngineConfig};
use block_blast::engine::GameSession;
use block_blast::types::GridPos;

#[derive(Parser, Debug)]
#[command(name = "block-blast")]
struct Args {
    /// JSON engine config; environment overrides apply on top.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the piece supply.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Stop after this many drops even if the game is still going.
    #[arg(long, default_value_t = 1000)]
    turns: u32,

    /// Print the final session snapshot as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    }
    .with_env_overrides();

    let mut session = GameSession::new(&config, args.seed).context("invalid engine config")?;
    session.start();

    while !session.game_over() && session.turns() < args.turns {
        let Some((slot, origin)) = choose_drop(&session) else {
            break;
        };
        let outcome = session
            .place(slot, origin)
            .with_context(|| format!("bot picked an illegal drop: slot {slot} at {origin}"))?;
        if let Some(callout) = outcome.clear.callout() {
            log::info!(
                "turn {}: {} x{} (+{})",
                session.turns(),
                callout.as_str(),
                outcome.clear.lines_cleared,
                outcome.clear.score_delta
            );
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&session.snapshot())
            .context("serializing session snapshot")?;
        println!("{json}");
        return Ok(());
    }

    print!("{}", session.board());
    println!(
        "turns: {}  score: {}  status: {}",
        session.turns(),
        session.score().total(),
        session.status().as_str()
    );
    Ok(())
}

/// Best drop for the current tray: most lines cleared, then earliest slot and origin.
fn choose_drop(session: &GameSession) -> Option<(usize, GridPos)> {
    let board = session.board();
    let mut best: Option<(usize, usize, GridPos)> = None;
    for (slot, piece) in session.tray().iter().enumerate() {
        let Some(piece) = piece else {
            continue;
        };
        for origin in legal_origins(board, piece) {
            let lines = preview(board, piece, origin).lines.lines();
            if best.is_none_or(|(best_lines, _, _)| lines > best_lines) {
                best = Some((lines, slot, origin));
            }
        }
    }
    best.map(|(_, slot, origin)| (slot, origin))
}
