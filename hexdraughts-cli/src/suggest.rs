//! Suggest command - one-shot move selection for a saved position

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use hexdraughts_core::{Board, Player};
use hexdraughts_search::{MinimaxAi, SearchError, DEFAULT_DEPTH};

#[derive(Args)]
pub struct SuggestArgs {
    /// Board position JSON file
    #[arg(long, value_name = "FILE")]
    pub board: PathBuf,

    /// Side to move
    #[arg(long, value_enum)]
    pub side: Side,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u32,

    /// Tie-break seed
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Player {
    fn from(side: Side) -> Player {
        match side {
            Side::White => Player::White,
            Side::Black => Player::Black,
        }
    }
}

pub fn run(args: SuggestArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.board)
        .with_context(|| format!("reading board file {}", args.board.display()))?;
    let board: Board = serde_json::from_str(&text)
        .with_context(|| format!("parsing board file {}", args.board.display()))?;

    let mut ai = match args.seed {
        Some(seed) => MinimaxAi::with_seed(args.depth, seed),
        None => MinimaxAi::new(args.depth),
    };

    match ai.choose_move(&board, args.side.into()) {
        Ok(mv) => println!("{}", serde_json::to_string_pretty(&mv)?),
        Err(SearchError::NoLegalMoves(side)) => {
            println!("no legal moves for {side}; the game is over");
        }
    }

    Ok(())
}
