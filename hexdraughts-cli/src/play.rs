//! Play command - AI vs AI self play

use anyhow::Result;
use clap::Args;
use hexdraughts_core::{Game, GameResult, Move, Player};
use hexdraughts_search::{MinimaxAi, SearchError, DEFAULT_DEPTH};

#[derive(Args)]
pub struct PlayArgs {
    /// Board width
    #[arg(long, default_value = "9")]
    pub width: i32,

    /// Board height
    #[arg(long, default_value = "9")]
    pub height: i32,

    /// Rows of men per side at the start
    #[arg(long, default_value = "2")]
    pub rows: i32,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u32,

    /// Tie-break seed (omit for unpredictable play)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many half-moves
    #[arg(long, default_value = "200")]
    pub max_turns: u32,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let mut game = Game::standard(args.width, args.height, args.rows);
    let (mut white, mut black) = make_players(args.depth, args.seed);

    println!("{}", game.board());

    let mut turns = 0;
    while game.result() == GameResult::Ongoing && turns < args.max_turns {
        let side = game.to_move();
        let ai = match side {
            Player::White => &mut white,
            Player::Black => &mut black,
        };

        let Some(mv) = next_move(&game, ai)? else {
            break;
        };
        tracing::info!(%side, %mv, turn = turns, "playing");
        game.play(mv)?;
        turns += 1;
    }

    println!("{}", game.board());
    match game.result() {
        GameResult::WhiteWins => println!("White wins after {turns} half-moves"),
        GameResult::BlackWins => println!("Black wins after {turns} half-moves"),
        GameResult::Ongoing => println!("Stopped after {turns} half-moves"),
    }

    Ok(())
}

fn make_players(depth: u32, seed: Option<u64>) -> (MinimaxAi, MinimaxAi) {
    match seed {
        Some(s) => (
            MinimaxAi::with_seed(depth, s),
            MinimaxAi::with_seed(depth, s.wrapping_add(1)),
        ),
        None => (MinimaxAi::new(depth), MinimaxAi::new(depth)),
    }
}

/// One move for the side on turn: a chain continuation while a multi-jump
/// is open, otherwise a full search.
fn next_move(game: &Game, ai: &mut MinimaxAi) -> Result<Option<Move>> {
    if game.chain().is_some() {
        return Ok(ai.continue_chain(&game.legal_moves()));
    }
    match ai.choose_move(game.board(), game.to_move()) {
        Ok(mv) => Ok(Some(mv)),
        Err(SearchError::NoLegalMoves(_)) => Ok(None),
    }
}
