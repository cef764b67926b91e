use thiserror::Error;

use super::piece::Piece;
use super::square::Square;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, it is already occupied")]
    SquareOccupied { square: Square },
    #[error("Cannot move from {square}, it does not hold a {piece} piece")]
    SourceNotOwned { square: Square, piece: Piece },
    #[error("Illegal move: can only move from {from} to an adjacent space, not {to}")]
    NotAdjacent { from: Square, to: Square },
    #[error("All four {piece} pieces are on the board, a piece must be moved instead")]
    PlacementPhaseOver { piece: Piece },
    #[error("Cannot move a {piece} piece until all four have been placed")]
    RelocationBeforeAllPlaced { piece: Piece },
    #[error("Cannot undo move, {square} does not hold the moved {piece} piece")]
    UndoMismatch { square: Square, piece: Piece },
    #[error("Invalid board: {piece} has {count} pieces, at most four are allowed")]
    TooManyPieces { piece: Piece, count: usize },
    #[error("Invalid board: expected {expected} cells, got {actual}")]
    InvalidCellCount { expected: usize, actual: usize },
    #[error("Invalid board: unexpected character {found:?}, cells must be one of 'b', 'r', '.'")]
    InvalidCellCharacter { found: char },
}
