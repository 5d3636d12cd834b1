//! HEXDRAUGHTS search - depth-limited minimax opponent
//!
//! Builds a bounded game tree over the core move generator, folds minimax
//! values bottom-up, and picks uniformly among the equally best root moves.
//! One invocation owns its whole tree; the caller's board is cloned, never
//! mutated.

use hexdraughts_core::{Board, Move, MoveList, Player};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

pub mod search;
pub mod tree;

pub use search::{best_moves, minimax, DEFAULT_DEPTH};
pub use tree::{GameTree, NodeId, SearchNode};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The side to move has no legal moves. A terminal-game condition, not
    /// an engine fault; the caller should declare the game over.
    #[error("no legal moves for {0}")]
    NoLegalMoves(Player),
}

/// Minimax AI player
pub struct MinimaxAi {
    pub depth: u32,
    rng: ChaCha8Rng,
}

impl MinimaxAi {
    /// AI with an entropy-seeded tie-break, for unpredictable play.
    pub fn new(depth: u32) -> Self {
        Self::with_seed(depth, rand::random())
    }

    /// AI with a fixed tie-break seed, for reproducible games.
    pub fn with_seed(depth: u32, seed: u64) -> Self {
        Self {
            depth,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick a move for `to_move` on `board`.
    ///
    /// Expands the tree to the configured depth, runs minimax, and selects
    /// uniformly at random among the root moves sharing the best value.
    pub fn choose_move(&mut self, board: &Board, to_move: Player) -> Result<Move, SearchError> {
        let mut tree = GameTree::new(board.clone(), to_move);
        // At least one ply: the no-move check reads the root's children.
        tree.expand_to_depth(self.depth.max(1));

        if tree.get(NodeId::ROOT).children.is_empty() {
            return Err(SearchError::NoLegalMoves(to_move));
        }

        let value = search::minimax(&mut tree);
        let best = search::best_moves(&tree);
        tracing::debug!(
            nodes = tree.len(),
            value,
            candidates = best.len(),
            "search complete"
        );

        Ok(best[self.rng.gen_range(0..best.len())])
    }

    /// Uniform pick among the mandatory continuations of a capture chain.
    ///
    /// Chain continuation is the authoritative board's concern; no tree is
    /// built for it.
    pub fn continue_chain(&mut self, list: &MoveList) -> Option<Move> {
        if !list.mandatory || list.is_empty() {
            return None;
        }
        Some(list.moves[self.rng.gen_range(0..list.moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexdraughts_core::{all_moves, allowed_moves, Piece, Tile};

    #[test]
    fn test_ai_takes_forced_capture() {
        let mut board = Board::new(5, 5);
        board.set(Tile::new(2, 0), Some(Piece::man(Player::White)));
        board.set(Tile::new(2, 1), Some(Piece::man(Player::Black)));

        for seed in 0..4 {
            let mut ai = MinimaxAi::with_seed(DEFAULT_DEPTH, seed);
            let mv = ai.choose_move(&board, Player::White).unwrap();
            assert_eq!(mv, Move::jump(Tile::new(2, 0), Tile::new(3, 2), Tile::new(2, 1)));
        }
    }

    #[test]
    fn test_depth_zero_still_finds_a_move() {
        let board = Board::standard(5, 5, 1);
        assert!(!all_moves(&board, Player::White).is_empty());

        let mut ai = MinimaxAi::with_seed(0, 1);
        let mv = ai.choose_move(&board, Player::White).unwrap();
        assert!(all_moves(&board, Player::White).contains(&mv));
    }

    #[test]
    fn test_no_legal_moves_is_reported() {
        let mut board = Board::new(5, 5);
        board.set(Tile::new(0, 4), Some(Piece::man(Player::Black)));

        let mut ai = MinimaxAi::with_seed(DEFAULT_DEPTH, 7);
        assert_eq!(
            ai.choose_move(&board, Player::White),
            Err(SearchError::NoLegalMoves(Player::White))
        );
    }

    #[test]
    fn test_tie_break_stays_within_optimal_set() {
        // All safe destinations tie; the square that loses the piece never
        // gets picked, whatever the seed.
        let mut board = Board::new(5, 5);
        board.set(Tile::new(1, 1), Some(Piece::man(Player::White)));
        board.set(Tile::new(2, 3), Some(Piece::man(Player::Black)));

        for seed in 0..16 {
            let mut ai = MinimaxAi::with_seed(2, seed);
            let mv = ai.choose_move(&board, Player::White).unwrap();
            assert_ne!(mv.dest, Tile::new(2, 2), "seed {seed} chose the losing square");
        }
    }

    #[test]
    fn test_seeded_search_is_reproducible() {
        let board = Board::standard(5, 5, 1);
        let mv_a = MinimaxAi::with_seed(2, 99)
            .choose_move(&board, Player::White)
            .unwrap();
        let mv_b = MinimaxAi::with_seed(2, 99)
            .choose_move(&board, Player::White)
            .unwrap();
        assert_eq!(mv_a, mv_b);
    }

    #[test]
    fn test_continue_chain_picks_a_capture() {
        let mut board = Board::new(5, 5);
        board.set(Tile::new(3, 2), Some(Piece::man(Player::White)));
        board.set(Tile::new(3, 3), Some(Piece::man(Player::Black)));

        let list = allowed_moves(&board, Tile::new(3, 2), Player::White);
        assert!(list.mandatory);

        let mut ai = MinimaxAi::with_seed(DEFAULT_DEPTH, 1);
        let mv = ai.continue_chain(&list).unwrap();
        assert!(mv.is_capture());
        assert!(list.contains(&mv));

        // Non-mandatory lists are not chain continuations
        let open = allowed_moves(&board, Tile::new(3, 2), Player::White);
        let simple = MoveList { moves: open.moves, mandatory: false };
        assert_eq!(ai.continue_chain(&simple), None);
    }
}
