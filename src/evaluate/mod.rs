use crate::board::{Board, Piece};

pub mod patterns;

use self::patterns::{NEAR_WIN_PATTERNS, WIN_PATTERNS};

/// Score of a position the engine has won. Horizon scores never exceed it.
pub const ENGINE_WINS: f32 = 1.0;
/// Score of a position the opponent has won.
pub const OPPONENT_WINS: f32 = -1.0;

/// Each fully owned three-cell near-win pattern is worth this much to its owner.
const NEAR_WIN_BONUS: f32 = 0.5;

/// Terminal status of a board, relative to the side doing the evaluating.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameOutcome {
    EngineWins,
    OpponentWins,
    NoWinnerYet,
}

impl GameOutcome {
    pub fn is_decided(&self) -> bool {
        *self != GameOutcome::NoWinnerYet
    }

    /// `+1`/`-1` for decided games.
    pub fn score(&self) -> Option<f32> {
        match self {
            GameOutcome::EngineWins => Some(ENGINE_WINS),
            GameOutcome::OpponentWins => Some(OPPONENT_WINS),
            GameOutcome::NoWinnerYet => None,
        }
    }
}

/// Returns the piece owning a complete four-cell pattern, scanning the whole board.
///
/// Patterns are tried in family order (horizontal, vertical, `\`, `/`, box), and each
/// candidate stops at its first empty anchor or mismatching cell. Boards reached through
/// legal play can have at most one winner; for hand-built boards with two, the first
/// match in that order is reported.
pub fn winner(board: &Board) -> Option<Piece> {
    WIN_PATTERNS.iter().find_map(|pattern| {
        let anchor = board.get(pattern.squares[0])?;
        pattern.squares[1..]
            .iter()
            .all(|&square| board.get(square) == Some(anchor))
            .then(|| anchor)
    })
}

/// Terminal evaluation of `board` from `engine_piece`'s point of view.
pub fn outcome(board: &Board, engine_piece: Piece) -> GameOutcome {
    match winner(board) {
        Some(piece) if piece == engine_piece => GameOutcome::EngineWins,
        Some(_) => GameOutcome::OpponentWins,
        None => GameOutcome::NoWinnerYet,
    }
}

/// Sum of near-win bonuses for `piece`: every fully owned length-3 row window, length-3
/// column window and box triangle adds 0.5. The two triangles of a box are counted
/// independently.
pub fn near_win_tally(board: &Board, piece: Piece) -> f32 {
    NEAR_WIN_PATTERNS
        .iter()
        .filter(|cells| cells.iter().all(|&square| board.get(square) == Some(piece)))
        .count() as f32
        * NEAR_WIN_BONUS
}

/// Static value of `board` for `engine_piece`, in `[-1, 1]`.
///
/// Decided boards score exactly `+1` or `-1`, agreeing with [`outcome`]. Otherwise the
/// score is the engine's near-win tally minus the opponent's, clamped to `[-1, 1]`.
pub fn score(board: &Board, engine_piece: Piece) -> f32 {
    if let Some(terminal) = outcome(board, engine_piece).score() {
        return terminal;
    }

    let engine_tally = near_win_tally(board, engine_piece);
    let opponent_tally = near_win_tally(board, engine_piece.opposite());
    (engine_tally - opponent_tally).max(OPPONENT_WINS).min(ENGINE_WINS)
}
