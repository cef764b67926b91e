use log::debug;

use crate::board::{error::BoardError, Board, Piece};

use super::TeekoMove;

/// Applies `teeko_move` for `piece` and returns the resulting board.
///
/// The input board is never modified: a rejected move leaves the caller's board exactly as
/// it was, and a legal move changes the returned copy by one cell transition (the source
/// is cleared when relocating and the destination receives `piece`).
pub fn apply_move(board: &Board, teeko_move: &TeekoMove, piece: Piece) -> Result<Board, BoardError> {
    let mut next = *board;
    teeko_move.apply(&mut next, piece)?;
    debug!("applied {} for {}", teeko_move, piece);
    Ok(next)
}
