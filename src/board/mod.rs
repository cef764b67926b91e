pub mod error;
pub mod piece;
pub mod square;

mod display;


use std::str::FromStr;

use error::BoardError;
pub use piece::Piece;
pub use square::{Square, BOARD_SIZE, SQUARE_COUNT};

/// Number of pieces each side brings into the game.
pub const PIECES_PER_SIDE: usize = 4;

/// Which kind of move a side makes next, derived from how many of its pieces are placed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// The side still has pieces in hand and drops one on any empty cell.
    Placement,
    /// All four pieces are on the board; one moves to an adjacent empty cell.
    Relocation,
}

/// Represents the state of a Teeko board: 25 cells, each empty or holding a piece.
/// Piece counts are never stored, they are recomputed from the cells when needed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Board {
    cells: [Option<Piece>; SQUARE_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if !self.is_empty(square) {
            return Err(BoardError::SquareOccupied { square });
        }
        self.cells[square.index()] = Some(piece);
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(piece)).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Squares holding `piece`, in row-major order.
    pub fn squares_of(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&square| self.get(square) == Some(piece))
    }

    /// Empty squares in row-major order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&square| self.is_empty(square))
    }

    /// A side places pieces until it has four on the board, regardless of the opponent.
    pub fn phase(&self, piece: Piece) -> Phase {
        if self.count(piece) < PIECES_PER_SIDE {
            Phase::Placement
        } else {
            Phase::Relocation
        }
    }

    /// Rejects positions where a side has more than four pieces. Parsing accepts
    /// them, so boards read from user input are checked separately.
    pub fn check_piece_limits(&self) -> Result<(), BoardError> {
        for &piece in Piece::ALL.iter() {
            let count = self.count(piece);
            if count > PIECES_PER_SIDE {
                return Err(BoardError::TooManyPieces { piece, count });
            }
        }
        Ok(())
    }
}

/// Parses 25 cells of `b`, `r` or `.` in row-major order. Whitespace and `/` row
/// separators are ignored, so both `"b..../...../..."` and a five-line grid work.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = position
            .chars()
            .filter(|&c| !c.is_whitespace() && c != '/')
            .collect();

        if cells.len() != SQUARE_COUNT {
            return Err(BoardError::InvalidCellCount {
                expected: SQUARE_COUNT,
                actual: cells.len(),
            });
        }

        let mut board = Board::new();
        for (index, &c) in cells.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).ok_or(BoardError::InvalidCellCharacter { found: c })?;
            board.cells[index] = Some(piece);
        }
        Ok(board)
    }
}
