use core::fmt;

use crate::board::{error::BoardError, Board, Phase, Piece, Square};

/// A single Teeko move. During placement a piece is dropped on an empty cell; during
/// relocation one of the mover's pieces slides to an adjacent empty cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TeekoMove {
    Place { to: Square },
    Relocate { from: Square, to: Square },
}

impl TeekoMove {
    pub fn place(to: Square) -> Self {
        TeekoMove::Place { to }
    }

    pub fn relocate(from: Square, to: Square) -> Self {
        TeekoMove::Relocate { from, to }
    }

    pub fn to_square(&self) -> Square {
        match *self {
            TeekoMove::Place { to } | TeekoMove::Relocate { to, .. } => to,
        }
    }

    pub fn from_square(&self) -> Option<Square> {
        match *self {
            TeekoMove::Place { .. } => None,
            TeekoMove::Relocate { from, .. } => Some(from),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            TeekoMove::Place { .. } => Phase::Placement,
            TeekoMove::Relocate { .. } => Phase::Relocation,
        }
    }

    /// Checks every rule for `piece` making this move on `board` without touching it.
    pub fn validate(&self, board: &Board, piece: Piece) -> Result<(), BoardError> {
        let to = self.to_square();
        if !board.is_empty(to) {
            return Err(BoardError::SquareOccupied { square: to });
        }

        let phase = board.phase(piece);
        if self.phase() != phase {
            return Err(match phase {
                Phase::Placement => BoardError::RelocationBeforeAllPlaced { piece },
                Phase::Relocation => BoardError::PlacementPhaseOver { piece },
            });
        }

        if let TeekoMove::Relocate { from, to } = *self {
            if board.get(from) != Some(piece) {
                return Err(BoardError::SourceNotOwned {
                    square: from,
                    piece,
                });
            }
            if !from.is_adjacent(to) {
                return Err(BoardError::NotAdjacent { from, to });
            }
        }
        Ok(())
    }

    /// Validates, then clears the source (if any) and sets the destination. On error the
    /// board is left exactly as it was.
    #[must_use = "move application may fail"]
    pub fn apply(&self, board: &mut Board, piece: Piece) -> Result<(), BoardError> {
        self.validate(board, piece)?;
        if let TeekoMove::Relocate { from, .. } = *self {
            board.remove(from);
        }
        board.put(self.to_square(), piece)
    }

    /// Reverts a previously applied move of `piece`.
    #[must_use = "move undo may fail"]
    pub fn undo(&self, board: &mut Board, piece: Piece) -> Result<(), BoardError> {
        let to = self.to_square();
        if board.get(to) != Some(piece) {
            return Err(BoardError::UndoMismatch { square: to, piece });
        }
        if let TeekoMove::Relocate { from, .. } = *self {
            board.put(from, piece)?;
        }
        board.remove(to);
        Ok(())
    }
}

impl fmt::Display for TeekoMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeekoMove::Place { to } => write!(f, "{}", to),
            TeekoMove::Relocate { from, to } => write!(f, "{} {}", from, to),
        }
    }
}

#[macro_export]
macro_rules! place {
    ($row:expr, $col:expr) => {
        $crate::teeko_move::TeekoMove::place(
            $crate::board::Square::new($row, $col).expect("square on the board"),
        )
    };
}

#[macro_export]
macro_rules! relocate {
    (($from_row:expr, $from_col:expr), ($to_row:expr, $to_col:expr)) => {
        $crate::teeko_move::TeekoMove::relocate(
            $crate::board::Square::new($from_row, $from_col).expect("square on the board"),
            $crate::board::Square::new($to_row, $to_col).expect("square on the board"),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teeko_position;

    #[test]
    fn test_place_then_undo_restores_board() {
        let mut board = Board::new();
        let original = board;
        let teeko_move = place!(2, 2);

        teeko_move.apply(&mut board, Piece::Black).unwrap();
        assert_eq!(board.get(teeko_move.to_square()), Some(Piece::Black));

        teeko_move.undo(&mut board, Piece::Black).unwrap();
        assert_eq!(board, original);
    }

    #[test]
    fn test_relocate_clears_source() {
        let mut board = teeko_position! {
            b b b b .
            r r r r .
            . . . . .
            . . . . .
            . . . . .
        };
        let original = board;
        let teeko_move = relocate!((0, 3), (0, 4));

        teeko_move.apply(&mut board, Piece::Black).unwrap();
        assert_eq!(board.get(Square::new(0, 3).unwrap()), None);
        assert_eq!(board.get(Square::new(0, 4).unwrap()), Some(Piece::Black));
        assert_eq!(board.count(Piece::Black), 4);

        teeko_move.undo(&mut board, Piece::Black).unwrap();
        assert_eq!(board, original);
    }

    #[test]
    fn test_relocate_rejects_non_adjacent_destination() {
        let mut board = teeko_position! {
            b b b b .
            r r r r .
            . . . . .
            . . . . .
            . . . . .
        };
        let original = board;
        let result = relocate!((0, 0), (2, 2)).apply(&mut board, Piece::Black);
        assert_eq!(
            result,
            Err(BoardError::NotAdjacent {
                from: Square::new(0, 0).unwrap(),
                to: Square::new(2, 2).unwrap(),
            })
        );
        assert_eq!(board, original);
    }

    #[test]
    fn test_relocate_rejects_opponent_source() {
        let mut board = teeko_position! {
            b b b b .
            r r r r .
            . . . . .
            . . . . .
            . . . . .
        };
        let result = relocate!((1, 0), (2, 0)).apply(&mut board, Piece::Black);
        assert_eq!(
            result,
            Err(BoardError::SourceNotOwned {
                square: Square::new(1, 0).unwrap(),
                piece: Piece::Black,
            })
        );
    }

    #[test]
    fn test_phase_mismatch_is_rejected() {
        let mut board = teeko_position! {
            b b b b .
            r . . . .
            . . . . .
            . . . . .
            . . . . .
        };
        assert_eq!(
            place!(4, 4).apply(&mut board, Piece::Black),
            Err(BoardError::PlacementPhaseOver {
                piece: Piece::Black
            })
        );
        assert_eq!(
            relocate!((1, 0), (2, 0)).apply(&mut board, Piece::Red),
            Err(BoardError::RelocationBeforeAllPlaced { piece: Piece::Red })
        );
    }

    #[test]
    fn test_move_phase_matches_side_phase() {
        let board = teeko_position! {
            b b b b .
            r . . . .
            . . . . .
            . . . . .
            . . . . .
        };
        assert_eq!(place!(4, 4).phase(), board.phase(Piece::Red));
        assert_eq!(relocate!((0, 3), (0, 4)).phase(), board.phase(Piece::Black));
        assert_eq!(
            relocate!((0, 3), (0, 4)).validate(&board, Piece::Black),
            Ok(())
        );
    }

    #[test]
    fn test_undo_rejects_mismatched_board() {
        let mut board = Board::new();
        let result = place!(0, 0).undo(&mut board, Piece::Red);
        assert_eq!(
            result,
            Err(BoardError::UndoMismatch {
                square: Square::new(0, 0).unwrap(),
                piece: Piece::Red,
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(place!(3, 1).to_string(), "B3");
        assert_eq!(relocate!((3, 1), (2, 2)).to_string(), "B3 C2");
    }
}
