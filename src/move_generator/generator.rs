//! Move generation implementation.
//!
//! The phase is read from the mover's own piece count: fewer than four pieces on the
//! board means every empty cell is a placement, otherwise each piece may slide to any
//! empty neighbour. Moves come out in a fixed order (row-major destinations for
//! placement, row-major sources then row-major neighbour offsets for relocation) so
//! search results are reproducible.

use smallvec::SmallVec;

use crate::board::{Board, Phase, Piece, SQUARE_COUNT};
use crate::teeko_move::{apply_move, TeekoMove};

/// A list of moves sized for the placement phase on an empty board.
pub type TeekoMoveList = SmallVec<[TeekoMove; SQUARE_COUNT]>;

/// Generates all legal moves for a given board state.
#[derive(Clone, Copy, Default, Debug)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_moves(&self, board: &Board, player: Piece) -> TeekoMoveList {
        match board.phase(player) {
            Phase::Placement => generate_placements(board),
            Phase::Relocation => generate_relocations(board, player),
        }
    }
}

fn generate_placements(board: &Board) -> TeekoMoveList {
    board.empty_squares().map(TeekoMove::place).collect()
}

fn generate_relocations(board: &Board, player: Piece) -> TeekoMoveList {
    let mut moves = TeekoMoveList::new();
    for from in board.squares_of(player) {
        for to in from.neighbors() {
            if board.is_empty(to) {
                moves.push(TeekoMove::relocate(from, to));
            }
        }
    }
    moves
}

/// Every board reachable by one legal move of `player`, in generator order.
pub fn successors(board: &Board, player: Piece) -> Vec<Board> {
    MoveGenerator::new()
        .generate_moves(board, player)
        .iter()
        .filter_map(|teeko_move| apply_move(board, teeko_move, player).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::{place, relocate, teeko_position};

    #[test]
    fn test_empty_board_has_25_placements() {
        let board = Board::new();
        let moves = MoveGenerator::new().generate_moves(&board, Piece::Black);
        assert_eq!(moves.len(), 25);
        assert_eq!(successors(&board, Piece::Red).len(), 25);
        assert_eq!(moves[0], place!(0, 0));
        assert_eq!(moves[24], place!(4, 4));
    }

    #[test]
    fn test_placement_skips_occupied_cells() {
        let board = teeko_position! {
            b . . . .
            . r . . .
            . . b . .
            . . . r .
            . . . . .
        };
        let moves = MoveGenerator::new().generate_moves(&board, Piece::Black);
        assert_eq!(moves.len(), 21);
        assert!(moves.iter().all(|m| board.is_empty(m.to_square())));
    }

    #[test]
    fn test_placement_ignores_opponent_count() {
        let board = teeko_position! {
            r r . r .
            . . r . .
            b . . . .
            . . . . .
            . . . . .
        };
        let moves = MoveGenerator::new().generate_moves(&board, Piece::Black);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| m.from_square().is_none()));
    }

    #[test]
    fn test_relocation_fixture_has_six_successors() {
        let board = teeko_position! {
            b r b r b
            r b r b r
            b r b . .
            r b r . .
            b r b . .
        };
        let moves = MoveGenerator::new().generate_moves(&board, Piece::Black);
        let expected = vec![
            relocate!((1, 3), (2, 3)),
            relocate!((1, 3), (2, 4)),
            relocate!((2, 2), (2, 3)),
            relocate!((2, 2), (3, 3)),
            relocate!((4, 2), (3, 3)),
            relocate!((4, 2), (4, 3)),
        ];
        assert_eq!(moves.to_vec(), expected);
        assert_eq!(successors(&board, Piece::Black).len(), 6);
    }

    #[test]
    fn test_relocation_successors_keep_piece_count() {
        let board = teeko_position! {
            . b . . .
            . r b . .
            . r b . .
            . r . b .
            r . . . .
        };
        let next_boards = successors(&board, Piece::Black);
        assert!(!next_boards.is_empty());
        for next in next_boards {
            assert_eq!(next.count(Piece::Black), 4);
            assert_eq!(next.count(Piece::Red), 4);
            let changed = Square::all()
                .filter(|&square| board.get(square) != next.get(square))
                .count();
            assert_eq!(changed, 2);
        }
    }

    #[test]
    fn test_blocked_piece_contributes_no_moves() {
        let board = teeko_position! {
            b r . . .
            r r . . .
            . . . . .
            . . . b b
            . . . b .
        };
        let moves = MoveGenerator::new().generate_moves(&board, Piece::Black);
        assert!(moves
            .iter()
            .all(|m| m.from_square() != Some(Square::new(0, 0).unwrap())));
        // (3,3): 6 empty neighbours, (3,4): 3, (4,3): 3.
        assert_eq!(moves.len(), 12);
    }
}
