//! Teeko-specific trait implementations for the alpha-beta search.

use crate::alpha_beta_searcher::{
    alpha_beta_search, minimax_value, Evaluator, GameMove, GameState, MoveGenerator, Score,
    SearchContext, SearchError,
};
use crate::board::{error::BoardError, Board, Piece};
use crate::evaluate;
use crate::move_generator::{MoveGenerator as TeekoMoveGen, TeekoMoveList};
use crate::teeko_move::TeekoMove;

/// A board together with the side to move. This is the state the search walks; the
/// board alone does not know whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub turn: Piece,
}

impl Position {
    pub fn new(board: Board, turn: Piece) -> Self {
        Self { board, turn }
    }
}

impl GameState for Position {
    #[inline]
    fn toggle_turn(&mut self) {
        self.turn = self.turn.opposite();
    }
}

impl GameMove for TeekoMove {
    type State = Position;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &mut Position) -> Result<(), BoardError> {
        TeekoMove::apply(self, &mut state.board, state.turn)
    }

    #[inline]
    fn undo(&self, state: &mut Position) -> Result<(), BoardError> {
        TeekoMove::undo(self, &mut state.board, state.turn)
    }
}

#[derive(Clone, Copy, Default)]
pub struct TeekoMoveGenerator {
    inner: TeekoMoveGen,
}

impl TeekoMoveGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveGenerator<Position> for TeekoMoveGenerator {
    type Move = TeekoMove;
    type MoveList = TeekoMoveList;

    #[inline]
    fn generate_moves(&self, state: &Position) -> TeekoMoveList {
        self.inner.generate_moves(&state.board, state.turn)
    }
}

/// Scores positions for `engine_piece`, which must be the side to move at the root.
#[derive(Clone, Copy)]
pub struct TeekoEvaluator {
    engine_piece: Piece,
}

impl TeekoEvaluator {
    pub fn new(engine_piece: Piece) -> Self {
        Self { engine_piece }
    }
}

impl Evaluator<Position> for TeekoEvaluator {
    #[inline]
    fn terminal_score(&self, state: &Position) -> Option<Score> {
        evaluate::outcome(&state.board, self.engine_piece).score()
    }

    #[inline]
    fn evaluate(&self, state: &Position) -> Score {
        evaluate::score(&state.board, self.engine_piece)
    }
}

/// Searches for the best move for `engine_piece` on `board`.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext,
    board: &Board,
    engine_piece: Piece,
) -> Result<TeekoMove, SearchError> {
    let mut position = Position::new(*board, engine_piece);
    let move_generator = TeekoMoveGenerator::new();
    let evaluator = TeekoEvaluator::new(engine_piece);

    alpha_beta_search(context, &mut position, &move_generator, &evaluator)
}

/// Minimax value of `board` for `engine_piece` to move, without choosing a move.
pub fn position_value(
    context: &mut SearchContext,
    board: &Board,
    engine_piece: Piece,
) -> Result<Score, SearchError> {
    let mut position = Position::new(*board, engine_piece);
    let move_generator = TeekoMoveGenerator::new();
    let evaluator = TeekoEvaluator::new(engine_piece);

    minimax_value(context, &mut position, &move_generator, &evaluator)
}
