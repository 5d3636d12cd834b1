//! Static position evaluation
//!
//! Sign convention: positive favors White, negative favors Black.

use crate::board::{Board, Player};

/// Score of a decided position (effectively infinite).
pub const WIN_VALUE: i32 = 100_000;

const MAN_VALUE: i32 = 10;
const KING_VALUE: i32 = 25;

/// Evaluate a board in a single scan.
///
/// A board with no Black pieces scores `WIN_VALUE`, one with no White
/// pieces `-WIN_VALUE`; otherwise the score is pure material. An empty
/// board is neutral.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    let mut white = 0usize;
    let mut black = 0usize;

    for (_, piece) in board.pieces() {
        let value = if piece.king { KING_VALUE } else { MAN_VALUE };
        match piece.owner {
            Player::White => {
                white += 1;
                score += value;
            }
            Player::Black => {
                black += 1;
                score -= value;
            }
        }
    }

    if black == 0 && white > 0 {
        return WIN_VALUE;
    }
    if white == 0 && black > 0 {
        return -WIN_VALUE;
    }
    score
}

/// Evaluate a position in which `to_move` has no legal moves.
///
/// Usually one side has been wiped out; a blocked board with pieces on both
/// sides is a loss for the side that cannot move.
pub fn evaluate_terminal(board: &Board, to_move: Player) -> i32 {
    let white = board.count(Player::White);
    let black = board.count(Player::Black);
    if black == 0 && white > 0 {
        return WIN_VALUE;
    }
    if white == 0 && black > 0 {
        return -WIN_VALUE;
    }
    if white == 0 && black == 0 {
        return 0;
    }
    match to_move {
        Player::White => -WIN_VALUE,
        Player::Black => WIN_VALUE,
    }
}
