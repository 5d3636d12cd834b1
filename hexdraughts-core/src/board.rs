//! Board state: a fixed-size grid of occupied cells

use crate::grid::{Direction, Tile};
use crate::moves::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player color. White moves toward increasing y and maximizes the
/// evaluation; Black moves the other way and minimizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

/// A piece on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub king: bool,
}

impl Piece {
    pub const fn man(owner: Player) -> Self {
        Self { owner, king: false }
    }

    pub const fn king(owner: Player) -> Self {
        Self { owner, king: true }
    }

    /// Whether this piece may move (and capture) in `direction`.
    ///
    /// Men only advance: White uses the top diagonals, Black the bottom
    /// ones, both may slide sideways. Kings use all six directions.
    pub fn may_move(&self, direction: Direction) -> bool {
        if self.king {
            return true;
        }
        match direction {
            Direction::Left | Direction::Right => true,
            Direction::TopLeft | Direction::TopRight => self.owner == Player::White,
            Direction::BottomRight | Direction::BottomLeft => self.owner == Player::Black,
        }
    }
}

/// A rectangular offset-hex board. Dimensions are fixed at construction.
///
/// Cheap to clone; hypothetical moves during search always operate on a
/// clone, never on the caller's board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create an empty board. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    /// Standard starting layout: `initial_rows` rows of White men at the
    /// bottom, the same number of Black men at the top, skipping odd
    /// columns on the first and last row of the grid.
    pub fn standard(width: i32, height: i32, initial_rows: i32) -> Self {
        let mut board = Board::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if x % 2 != 0 && (y == 0 || y == height - 1) {
                    continue;
                }
                let piece = if y < initial_rows {
                    Some(Piece::man(Player::White))
                } else if y > height - (initial_rows + 1) {
                    Some(Piece::man(Player::Black))
                } else {
                    None
                };
                if piece.is_some() {
                    board.set(Tile::new(x, y), piece);
                }
            }
        }
        board
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, tile: Tile) -> bool {
        tile.x >= 0 && tile.x < self.width && tile.y >= 0 && tile.y < self.height
    }

    fn index(&self, tile: Tile) -> Option<usize> {
        self.in_bounds(tile)
            .then(|| (tile.y * self.width + tile.x) as usize)
    }

    /// Piece at `tile`, or `None` if the cell is empty or off-board.
    pub fn get(&self, tile: Tile) -> Option<Piece> {
        self.index(tile).and_then(|i| self.cells[i])
    }

    /// Place or clear a cell. Panics on off-board tiles.
    pub fn set(&mut self, tile: Tile, piece: Option<Piece>) {
        let i = self.index(tile).expect("tile off board");
        self.cells[i] = piece;
    }

    /// All tiles of the grid, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Tile::new(x, y)))
    }

    /// Occupied cells with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Tile, Piece)> + '_ {
        self.tiles().filter_map(move |t| self.get(t).map(|p| (t, p)))
    }

    /// Number of pieces owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.pieces().filter(|(_, p)| p.owner == player).count()
    }

    /// Apply a move to a clone of this board.
    pub fn apply(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.apply_in_place(mv);
        next
    }

    /// Move the occupant of `origin` to `dest`, clearing the captured cell
    /// for capture moves. Occupation counts are conserved except for the
    /// single captured piece.
    pub fn apply_in_place(&mut self, mv: &Move) {
        let piece = self.get(mv.origin).expect("no piece at move origin");
        self.set(mv.origin, None);
        if let Some(captured) = mv.capture {
            self.set(captured, None);
        }
        self.set(mv.dest, Some(piece));
    }

    /// Promote the piece at `tile` if it is a man standing on its own back
    /// rank (the far edge of the board). Returns true if a promotion
    /// happened.
    pub fn promote_if_back_rank(&mut self, tile: Tile) -> bool {
        let Some(piece) = self.get(tile) else {
            return false;
        };
        if piece.king {
            return false;
        }
        let back_rank = match piece.owner {
            Player::White => self.height - 1,
            Player::Black => 0,
        };
        if tile.y == back_rank {
            self.set(tile, Some(Piece::king(piece.owner)));
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            if y % 2 != 0 {
                write!(f, " ")?;
            }
            for x in 0..self.width {
                let c = match self.get(Tile::new(x, y)) {
                    None => '.',
                    Some(Piece { owner: Player::White, king: false }) => 'w',
                    Some(Piece { owner: Player::White, king: true }) => 'W',
                    Some(Piece { owner: Player::Black, king: false }) => 'b',
                    Some(Piece { owner: Player::Black, king: true }) => 'B',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
