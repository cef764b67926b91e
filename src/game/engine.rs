use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchContext, SearchError};
use crate::board::error::BoardError;
use crate::board::{Board, Piece};
use crate::evaluate::{self, GameOutcome};
use crate::teeko_move::{apply_move, TeekoMove};
use crate::teeko_search::search_best_move;

/// Engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub piece: Piece,
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            piece: Piece::Black,
            parallel: false,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

/// Decision engine bound to one piece for its lifetime. It holds no board: callers
/// pass the current position in and get new positions back.
pub struct Engine {
    piece: Piece,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            piece: config.piece,
            search_context: SearchContext::with_parallel(config.search_depth, config.parallel),
        }
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn opponent(&self) -> Piece {
        self.piece.opposite()
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.search_context.set_search_depth(depth);
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.search_context.set_parallel(parallel);
    }

    /// Searches `board` for the engine's best move. Must only be called on the engine's turn.
    pub fn choose_move(&mut self, board: &Board) -> Result<TeekoMove, EngineError> {
        let best_move = search_best_move(&mut self.search_context, board, self.piece)
            .map_err(|error| EngineError::SearchError { error })?;

        info!(
            "{} chose {} (score {:?}, {} positions)",
            self.piece,
            best_move,
            self.search_context.last_score(),
            self.search_context.searched_position_count()
        );
        Ok(best_move)
    }

    /// Chooses a move and applies it, returning both.
    pub fn make_best_move(&mut self, board: &Board) -> Result<(TeekoMove, Board), EngineError> {
        let best_move = self.choose_move(board)?;
        let next = self.apply_move(board, &best_move)?;
        Ok((best_move, next))
    }

    /// Applies a move of the engine's own piece.
    pub fn apply_move(&self, board: &Board, teeko_move: &TeekoMove) -> Result<Board, EngineError> {
        apply_move(board, teeko_move, self.piece).map_err(|error| EngineError::BoardError { error })
    }

    /// Validates and applies a move supplied for the opponent.
    pub fn opponent_move(
        &self,
        board: &Board,
        teeko_move: &TeekoMove,
    ) -> Result<Board, EngineError> {
        apply_move(board, teeko_move, self.opponent())
            .map_err(|error| EngineError::BoardError { error })
    }

    pub fn evaluate(&self, board: &Board) -> GameOutcome {
        evaluate::outcome(board, self.piece)
    }

    pub fn heuristic_game_value(&self, board: &Board) -> f32 {
        evaluate::score(board, self.piece)
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            depth: self.search_context.search_depth(),
            cutoffs: self.search_context.cutoff_count(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub depth: u8,
    pub cutoffs: usize,
    pub last_score: Option<f32>,
    pub last_search_duration: Option<Duration>,
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::{place, relocate, teeko_position};

    fn engine(piece: Piece, search_depth: u8) -> Engine {
        Engine::with_config(EngineConfig {
            search_depth,
            piece,
            parallel: false,
        })
    }

    #[test]
    fn test_default_config() {
        let engine = Engine::new();
        assert_eq!(engine.piece(), Piece::Black);
        assert_eq!(engine.opponent(), Piece::Red);
        assert_eq!(engine.get_search_stats().depth, 3);
    }

    #[test]
    fn test_search_depth_and_parallelism_can_change() {
        let mut engine = engine(Piece::Black, 1);
        engine.choose_move(&Board::new()).unwrap();
        let shallow = engine.get_search_stats();
        assert_eq!(shallow.depth, 1);
        assert_eq!(shallow.positions_searched, 26);
        assert_eq!(shallow.cutoffs, 0);

        engine.set_search_depth(2);
        engine.set_parallel(true);
        let deeper_move = engine.choose_move(&Board::new()).unwrap();
        let deeper = engine.get_search_stats();
        assert_eq!(deeper.depth, 2);
        assert!(deeper.positions_searched > shallow.positions_searched);

        engine.set_parallel(false);
        assert_eq!(engine.choose_move(&Board::new()).unwrap(), deeper_move);
        assert!(engine.get_search_stats().cutoffs > 0);
    }

    #[test]
    fn test_choose_move_takes_the_win() {
        let board = teeko_position! {
            . . . . .
            r . b . .
            r . . b .
            r . . . .
            . . . . b
        };
        let mut engine = engine(Piece::Red, 3);

        let (teeko_move, next) = engine.make_best_move(&board).unwrap();

        assert_eq!(teeko_move, place!(0, 0));
        assert_eq!(engine.evaluate(&next), GameOutcome::EngineWins);
        assert_eq!(engine.get_search_stats().last_score, Some(1.0));
    }

    #[test]
    fn test_choose_move_on_won_board_is_an_error() {
        let board = teeko_position! {
            b b b b .
            . . . . .
            r r r . .
            . . . . .
            . . . . .
        };
        let mut engine = engine(Piece::Red, 2);

        assert_eq!(engine.evaluate(&board), GameOutcome::OpponentWins);
        assert_eq!(engine.heuristic_game_value(&board), -1.0);
        assert_eq!(
            engine.choose_move(&board),
            Err(EngineError::SearchError {
                error: SearchError::GameOver { score: -1.0 }
            })
        );
    }

    #[test]
    fn test_opponent_move_is_validated() {
        let board = teeko_position! {
            b . . . .
            . r . . .
            . . . . .
            . . . . .
            . . . . .
        };
        let engine = engine(Piece::Black, 2);

        // The opponent cannot play onto the engine's piece.
        assert!(matches!(
            engine.opponent_move(&board, &place!(0, 0)),
            Err(EngineError::BoardError {
                error: BoardError::SquareOccupied { .. }
            })
        ));

        let next = engine.opponent_move(&board, &place!(2, 2)).unwrap();
        assert_eq!(next.count(Piece::Red), 2);
        assert_eq!(next.count(Piece::Black), 1);
    }

    #[test]
    fn test_opponent_cannot_relocate_engine_piece() {
        let board = teeko_position! {
            b . b . .
            . b . . .
            b . . . .
            r . r . .
            . r . . r
        };
        let engine = engine(Piece::Black, 2);

        let result = engine.opponent_move(&board, &relocate!((0, 2), (0, 3)));
        assert!(matches!(
            result,
            Err(EngineError::BoardError {
                error: BoardError::SourceNotOwned { .. }
            })
        ));

        let next = engine
            .opponent_move(&board, &relocate!((3, 2), (2, 2)))
            .unwrap();
        assert_eq!(next.get(Square::new(2, 2).unwrap()), Some(Piece::Red));
        assert!(next.is_empty(Square::new(3, 2).unwrap()));
    }
}
