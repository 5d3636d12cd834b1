//! HEXDRAUGHTS core - rules engine for hex checkers
//!
//! This crate provides the engine-independent decision layer:
//! - Offset hex grid geometry (row-parity dependent adjacency)
//! - Board occupation model with men and kings
//! - Legal move generation with mandatory captures
//! - Static material evaluation
//! - Authoritative game state (capture chains, promotion, win detection)

pub mod board;
pub mod eval;
pub mod game;
pub mod grid;
pub mod moves;

// Re-exports for convenient access
pub use board::{Board, Piece, Player};
pub use eval::{evaluate, evaluate_terminal, WIN_VALUE};
pub use game::{Game, GameResult, RulesError};
pub use grid::{Direction, Tile};
pub use moves::{all_moves, allowed_moves, Move, MoveList};
