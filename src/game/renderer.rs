use std::time::Duration;

use crate::board::{Board, Piece};
use crate::game::display::GameDisplay;
use crate::game::engine::SearchStats;
use crate::teeko_move::TeekoMove;

pub trait GameRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        board: &Board,
        current_turn: Piece,
        last_move: Option<(Piece, &TeekoMove)>,
        stats: Option<&SearchStats>,
        error: Option<&str>,
    );
    fn frame_delay(&self) -> Option<Duration>;
}

fn format_stats(stats: &SearchStats) -> String {
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {}, cutoffs: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth,
        stats.cutoffs,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

/// Renders every frame with the last engine search statistics.
pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        board: &Board,
        current_turn: Piece,
        last_move: Option<(Piece, &TeekoMove)>,
        stats: Option<&SearchStats>,
        error: Option<&str>,
    ) {
        let stats_display = stats.map(format_stats);
        ui.render_game_state(
            board,
            current_turn,
            last_move,
            stats_display.as_deref(),
            error,
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// Like `StatsRenderer`, but prompts when it is the human's turn.
pub struct ConditionalStatsRenderer {
    pub human_piece: Piece,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        board: &Board,
        current_turn: Piece,
        last_move: Option<(Piece, &TeekoMove)>,
        stats: Option<&SearchStats>,
        error: Option<&str>,
    ) {
        let stats_display = stats.map(format_stats);
        ui.render_game_state(
            board,
            current_turn,
            last_move,
            stats_display.as_deref(),
            error,
        );
        if current_turn == self.human_piece {
            println!("Enter your move (e.g. `C2` to place, `B1 C2` to relocate, `quit` to exit):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
