//! Legal move generation with mandatory captures

use crate::board::{Board, Player};
use crate::grid::{Direction, Tile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One atomic relocation of a piece.
///
/// `capture` holds the tile of the piece jumped over, present exactly for
/// capture moves; it always lies one hex step from `origin` along the move's
/// direction, with `dest` one further step in the same direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub origin: Tile,
    pub dest: Tile,
    pub capture: Option<Tile>,
}

impl Move {
    pub const fn slide(origin: Tile, dest: Tile) -> Self {
        Self { origin, dest, capture: None }
    }

    pub const fn jump(origin: Tile, dest: Tile, capture: Tile) -> Self {
        Self { origin, dest, capture: Some(capture) }
    }

    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.capture {
            Some(captured) => write!(f, "{} x{} -> {}", self.origin, captured, self.dest),
            None => write!(f, "{} -> {}", self.origin, self.dest),
        }
    }
}

/// Moves available to one piece or one side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    pub moves: Vec<Move>,
    /// True when the moves are captures and therefore the only legal choices.
    pub mandatory: bool,
}

impl MoveList {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

/// In-bounds neighbors the piece at `origin` is permitted to move toward,
/// tagged with their direction. Empty when the cell is unoccupied.
pub fn adjacent_tiles(board: &Board, origin: Tile) -> Vec<(Tile, Direction)> {
    let Some(piece) = board.get(origin) else {
        return Vec::new();
    };
    Direction::ALL
        .into_iter()
        .filter(|&dir| piece.may_move(dir))
        .map(|dir| (origin.step(dir), dir))
        .filter(|&(tile, _)| board.in_bounds(tile))
        .collect()
}

/// Legal moves for the piece of `side` standing on `origin`.
///
/// If any capture is available the returned list holds only captures and is
/// flagged mandatory; simple moves are discarded, not deprioritized. An
/// empty or opposing origin cell yields no moves.
pub fn allowed_moves(board: &Board, origin: Tile, side: Player) -> MoveList {
    match board.get(origin) {
        Some(piece) if piece.owner == side => {}
        _ => return MoveList::default(),
    }

    let mut simple = Vec::new();
    let mut captures = Vec::new();

    for (tile, dir) in adjacent_tiles(board, origin) {
        match board.get(tile) {
            None => simple.push(Move::slide(origin, tile)),
            Some(other) if other.owner != side => {
                // Jump: the cell one step beyond the enemy piece, in the
                // same direction, must be on the board and empty.
                let landing = tile.step(dir);
                if board.in_bounds(landing) && board.get(landing).is_none() {
                    captures.push(Move::jump(origin, landing, tile));
                }
            }
            Some(_) => {}
        }
    }

    if captures.is_empty() {
        MoveList { moves: simple, mandatory: false }
    } else {
        MoveList { moves: captures, mandatory: true }
    }
}

/// Legal moves for every piece of `side`, under the global mandatory-capture
/// rule: if any piece can capture, only capture moves are legal this turn.
pub fn all_moves(board: &Board, side: Player) -> MoveList {
    let mut simple = Vec::new();
    let mut captures = Vec::new();

    for (tile, piece) in board.pieces() {
        if piece.owner != side {
            continue;
        }
        let list = allowed_moves(board, tile, side);
        if list.mandatory {
            captures.extend(list.moves);
        } else {
            simple.extend(list.moves);
        }
    }

    if captures.is_empty() {
        MoveList { moves: simple, mandatory: false }
    } else {
        MoveList { moves: captures, mandatory: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn board_5x5(pieces: &[(Tile, Piece)]) -> Board {
        let mut board = Board::new(5, 5);
        for &(tile, piece) in pieces {
            board.set(tile, Some(piece));
        }
        board
    }

    #[test]
    fn test_empty_origin_yields_no_moves() {
        let board = Board::new(5, 5);
        assert!(allowed_moves(&board, Tile::new(2, 2), Player::White).is_empty());
        assert!(adjacent_tiles(&board, Tile::new(2, 2)).is_empty());
    }

    #[test]
    fn test_white_man_never_moves_backward() {
        let board = board_5x5(&[(Tile::new(2, 2), Piece::man(Player::White))]);
        let list = allowed_moves(&board, Tile::new(2, 2), Player::White);
        assert!(!list.mandatory);
        for mv in &list.moves {
            assert!(mv.dest.y >= mv.origin.y, "white man moved backward: {mv}");
        }
        // Left, Right, TopLeft, TopRight
        assert_eq!(list.moves.len(), 4);
    }

    #[test]
    fn test_black_man_never_moves_forward() {
        let board = board_5x5(&[(Tile::new(2, 2), Piece::man(Player::Black))]);
        let list = allowed_moves(&board, Tile::new(2, 2), Player::Black);
        for mv in &list.moves {
            assert!(mv.dest.y <= mv.origin.y, "black man moved forward: {mv}");
        }
        assert_eq!(list.moves.len(), 4);
    }

    #[test]
    fn test_king_uses_all_six_directions() {
        let board = board_5x5(&[(Tile::new(2, 2), Piece::king(Player::White))]);
        let list = allowed_moves(&board, Tile::new(2, 2), Player::White);
        assert_eq!(list.moves.len(), 6);
    }

    #[test]
    fn test_forced_capture_is_the_only_move() {
        // White on (2,0); Black adjacent on its top-right. The landing one
        // further step in the same direction is (3,2) and must be empty.
        let board = board_5x5(&[
            (Tile::new(2, 0), Piece::man(Player::White)),
            (Tile::new(2, 1), Piece::man(Player::Black)),
        ]);
        let list = all_moves(&board, Player::White);
        assert!(list.mandatory);
        assert_eq!(
            list.moves,
            vec![Move::jump(Tile::new(2, 0), Tile::new(3, 2), Tile::new(2, 1))]
        );
    }

    #[test]
    fn test_capture_geometry_is_collinear() {
        // For every capture, the captured tile is one step from the origin
        // and the destination one further step in the same direction.
        let board = board_5x5(&[
            (Tile::new(2, 2), Piece::king(Player::White)),
            (Tile::new(1, 2), Piece::man(Player::Black)),
            (Tile::new(2, 3), Piece::man(Player::Black)),
            (Tile::new(2, 1), Piece::man(Player::Black)),
        ]);
        let list = all_moves(&board, Player::White);
        assert!(list.mandatory);
        assert!(!list.is_empty());
        for mv in &list.moves {
            let captured = mv.capture.expect("mandatory list holds captures only");
            let dir = Direction::ALL
                .into_iter()
                .find(|&d| mv.origin.step(d) == captured)
                .expect("captured tile adjacent to origin");
            assert_eq!(captured.step(dir), mv.dest);
            assert_eq!(board.get(captured).map(|p| p.owner), Some(Player::Black));
            assert!(board.get(mv.dest).is_none());
        }
    }

    #[test]
    fn test_no_capture_when_landing_occupied_or_off_board() {
        // Black piece against the left edge: jumping over it would land
        // off-board, so White only has its simple moves.
        let board = board_5x5(&[
            (Tile::new(1, 2), Piece::man(Player::White)),
            (Tile::new(0, 2), Piece::man(Player::Black)),
        ]);
        let list = allowed_moves(&board, Tile::new(1, 2), Player::White);
        assert!(!list.mandatory);
        assert!(list.moves.iter().all(|m| !m.is_capture()));

        // Same, but the landing cell is occupied by a second black piece.
        let board = board_5x5(&[
            (Tile::new(3, 2), Piece::man(Player::White)),
            (Tile::new(2, 2), Piece::man(Player::Black)),
            (Tile::new(1, 2), Piece::man(Player::Black)),
        ]);
        let list = allowed_moves(&board, Tile::new(3, 2), Player::White);
        assert!(!list.mandatory);
    }

    #[test]
    fn test_man_cannot_capture_backward() {
        // The black piece sits behind the white man; a king could jump it
        // but a man's capture directions match its movement directions.
        let board = board_5x5(&[
            (Tile::new(2, 2), Piece::man(Player::White)),
            (Tile::new(2, 1), Piece::man(Player::Black)),
        ]);
        let list = allowed_moves(&board, Tile::new(2, 2), Player::White);
        assert!(!list.mandatory);
        assert!(list.moves.iter().all(|m| !m.is_capture()));

        let board = board_5x5(&[
            (Tile::new(2, 2), Piece::king(Player::White)),
            (Tile::new(2, 1), Piece::man(Player::Black)),
        ]);
        let list = allowed_moves(&board, Tile::new(2, 2), Player::White);
        assert!(list.mandatory, "king captures backward");
    }

    #[test]
    fn test_global_mandatory_capture_suppresses_other_pieces() {
        // One white piece has a capture; another only has simple moves.
        // The board-wide list must contain captures only.
        let board = board_5x5(&[
            (Tile::new(2, 0), Piece::man(Player::White)),
            (Tile::new(2, 1), Piece::man(Player::Black)),
            (Tile::new(0, 4), Piece::man(Player::White)),
        ]);
        let list = all_moves(&board, Player::White);
        assert!(list.mandatory);
        assert!(list.moves.iter().all(Move::is_capture));
        assert!(list.moves.iter().all(|m| m.origin == Tile::new(2, 0)));
    }

    #[test]
    fn test_own_piece_blocks_direction() {
        let board = board_5x5(&[
            (Tile::new(2, 2), Piece::man(Player::White)),
            (Tile::new(3, 2), Piece::man(Player::White)),
        ]);
        let list = allowed_moves(&board, Tile::new(2, 2), Player::White);
        assert!(list.moves.iter().all(|m| m.dest != Tile::new(3, 2)));
        assert!(list.moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_side_mismatch_yields_no_moves() {
        let board = board_5x5(&[(Tile::new(2, 2), Piece::man(Player::Black))]);
        assert!(allowed_moves(&board, Tile::new(2, 2), Player::White).is_empty());
    }
}
