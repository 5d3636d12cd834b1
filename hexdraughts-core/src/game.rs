//! Authoritative game state and turn orchestration
//!
//! Owns the real board between turns: validates moves, promotes men on the
//! back rank, keeps a capture chain on the same piece, and detects the end
//! of the game. Search operates on cloned boards and never touches this
//! state directly.

use crate::board::{Board, Player};
use crate::grid::Tile;
use crate::moves::{all_moves, allowed_moves, Move, MoveList};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("move {0} is not legal in this position")]
    IllegalMove(Move),
    #[error("the game is already decided")]
    GameOver,
}

/// Authoritative game state
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    /// While a multi-jump is in progress, the tile of the piece that must
    /// keep capturing.
    chain: Option<Tile>,
    result: GameResult,
}

impl Game {
    pub fn new(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            to_move,
            chain: None,
            result: GameResult::Ongoing,
        };
        game.update_result();
        game
    }

    /// New game on the standard starting layout.
    pub fn standard(width: i32, height: i32, initial_rows: i32) -> Self {
        Self::new(Board::standard(width, height, initial_rows), Player::White)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Tile of the piece that must continue capturing, if a chain is open.
    pub fn chain(&self) -> Option<Tile> {
        self.chain
    }

    /// Legal moves for the side to move.
    ///
    /// During a capture chain only the chaining piece's captures are legal;
    /// otherwise the board-wide mandatory-capture rule applies.
    pub fn legal_moves(&self) -> MoveList {
        if self.result != GameResult::Ongoing {
            return MoveList::default();
        }
        match self.chain {
            Some(tile) => allowed_moves(&self.board, tile, self.to_move),
            None => all_moves(&self.board, self.to_move),
        }
    }

    /// Play one move for the side to move.
    ///
    /// After a capture, the turn stays with the same side while the moved
    /// piece has further captures available. Promotion ends the chain.
    pub fn play(&mut self, mv: Move) -> Result<(), RulesError> {
        if self.result != GameResult::Ongoing {
            return Err(RulesError::GameOver);
        }
        if !self.legal_moves().contains(&mv) {
            return Err(RulesError::IllegalMove(mv));
        }

        self.board.apply_in_place(&mv);
        let promoted = self.board.promote_if_back_rank(mv.dest);

        if mv.is_capture()
            && !promoted
            && allowed_moves(&self.board, mv.dest, self.to_move).mandatory
        {
            self.chain = Some(mv.dest);
            return Ok(());
        }

        self.chain = None;
        self.to_move = self.to_move.opponent();
        self.update_result();
        Ok(())
    }

    /// Mark the game decided when the side to move has no pieces or no
    /// legal moves.
    fn update_result(&mut self) {
        if self.result != GameResult::Ongoing {
            return;
        }
        if self.board.count(self.to_move) == 0
            || all_moves(&self.board, self.to_move).is_empty()
        {
            self.result = match self.to_move {
                Player::White => GameResult::BlackWins,
                Player::Black => GameResult::WhiteWins,
            };
        }
    }
}
