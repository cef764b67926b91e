use log::{error, info, warn};

use crate::board::{Board, Piece};
use crate::evaluate;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, EngineError, SearchStats};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::{InputError, MoveInput};
use crate::teeko_move::{apply_move, TeekoMove};

/// How a game run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(Piece),
    MoveLimitReached,
    Quit,
    Aborted,
}

/// Alternates turns from an empty board, Black first, until someone wins.
pub struct GameLoop<I: InputSource, R: GameRenderer> {
    board: Board,
    turn: Piece,
    black: Engine,
    red: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
    last_move: Option<(Piece, TeekoMove)>,
    last_stats: Option<SearchStats>,
    last_error: Option<String>,
    move_count: usize,
    max_moves: Option<usize>,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    /// `config` supplies the depth and parallelism of both engines; its piece is ignored.
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            turn: Piece::Black,
            black: Engine::with_config(EngineConfig {
                piece: Piece::Black,
                ..config.clone()
            }),
            red: Engine::with_config(EngineConfig {
                piece: Piece::Red,
                ..config
            }),
            ui: GameDisplay::new(),
            input_source,
            renderer,
            last_move: None,
            last_stats: None,
            last_error: None,
            move_count: 0,
            max_moves: None,
        }
    }

    /// Stops the game after `max_moves` plies without a winner.
    pub fn with_move_limit(mut self, max_moves: usize) -> Self {
        self.max_moves = Some(max_moves);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<(Piece, TeekoMove)> {
        self.last_move
    }

    /// Why the last input was rejected, shown in the next frame.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn run(&mut self) -> GameResult {
        loop {
            if let Some(winner) = evaluate::winner(&self.board) {
                self.render();
                println!("{} wins!", winner);
                info!("{} wins after {} moves", winner, self.move_count);
                return GameResult::Winner(winner);
            }

            if self.max_moves.map_or(false, |max| self.move_count >= max) {
                self.render();
                println!("No winner after {} moves.", self.move_count);
                return GameResult::MoveLimitReached;
            }

            self.render();

            let input = match self.input_source.get_move(self.turn) {
                Ok(Some(input)) => input,
                Ok(None) => {
                    self.last_error = Some("Invalid input".to_string());
                    continue;
                }
                Err(InputError::UserExit) => {
                    info!("game exited by user");
                    return GameResult::Quit;
                }
                Err(error) => {
                    warn!("failed to read input: {}", error);
                    println!("error: {}", error);
                    return GameResult::Aborted;
                }
            };

            match self.step(input) {
                Ok(_) => {
                    self.last_error = None;
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Err(EngineError::BoardError { error }) => {
                    warn!("rejected move for {}: {}", self.turn, error);
                    self.last_error = Some(format!("error: {}", error));
                }
                Err(EngineError::SearchError { error }) => {
                    error!("engine failed to move for {}: {}", self.turn, error);
                    println!("error: {}", error);
                    return GameResult::Aborted;
                }
            }
        }
    }

    /// Plays one move for the side to move. A typed move is validated first; on any
    /// error the board and turn are left untouched.
    pub fn step(&mut self, input: MoveInput) -> Result<TeekoMove, EngineError> {
        let mover = self.turn;
        let teeko_move = match input.to_move() {
            Some(teeko_move) => teeko_move,
            None => {
                let board = self.board;
                let engine = self.engine_mut(mover);
                let teeko_move = engine.choose_move(&board)?;
                let stats = engine.get_search_stats();
                self.last_stats = Some(stats);
                teeko_move
            }
        };

        self.board = apply_move(&self.board, &teeko_move, mover)
            .map_err(|error| EngineError::BoardError { error })?;
        info!("{} plays {}", mover, teeko_move);

        self.last_move = Some((mover, teeko_move));
        self.turn = mover.opposite();
        self.move_count += 1;
        Ok(teeko_move)
    }

    fn engine_mut(&mut self, piece: Piece) -> &mut Engine {
        match piece {
            Piece::Black => &mut self.black,
            Piece::Red => &mut self.red,
        }
    }

    fn render(&mut self) {
        let last_move = self.last_move.as_ref().map(|(piece, m)| (*piece, m));
        self.renderer.render(
            &mut self.ui,
            &self.board,
            self.turn,
            last_move,
            self.last_stats.as_ref(),
            self.last_error.as_deref(),
        );
    }
}
