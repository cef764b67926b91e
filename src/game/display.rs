use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::{Board, Piece};
use crate::teeko_move::TeekoMove;

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    /// Builds the frame for the current position.
    pub fn draw_game_state(
        &mut self,
        board: &Board,
        current_turn: Piece,
        last_move: Option<(Piece, &TeekoMove)>,
        stats: Option<&str>,
        error: Option<&str>,
    ) {
        self.clear();

        let _ = writeln!(self.buffer, "{}\n", board);
        let _ = writeln!(self.buffer, "Turn: {}", current_turn);

        if let Some((piece, teeko_move)) = last_move {
            let _ = writeln!(self.buffer, "Last move: {} {}", piece, teeko_move);
        }

        if let Some(stats) = stats {
            let _ = writeln!(self.buffer, "\n{}", stats);
        }

        if let Some(error) = error {
            let _ = writeln!(self.buffer, "\n{}", error);
        }
    }

    /// Draws the frame and prints it.
    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Piece,
        last_move: Option<(Piece, &TeekoMove)>,
        stats: Option<&str>,
        error: Option<&str>,
    ) {
        self.draw_game_state(board, current_turn, last_move, stats, error);
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place;

    #[test]
    fn test_frame_contains_board_turn_and_last_move() {
        let mut board = Board::new();
        let teeko_move = place!(2, 1);
        teeko_move.apply(&mut board, Piece::Black).unwrap();

        let mut display = GameDisplay::new();
        display.draw_game_state(
            &board,
            Piece::Red,
            Some((Piece::Black, &teeko_move)),
            Some("* Score: 0"),
            None,
        );
        let frame = display.buffer();

        assert!(frame.contains("2: . b . . . "));
        assert!(frame.contains("   A B C D E"));
        assert!(frame.contains("Turn: red"));
        assert!(frame.contains("Last move: black B2"));
        assert!(frame.contains("* Score: 0"));
    }

    #[test]
    fn test_frame_shows_error_after_clearing() {
        let mut display = GameDisplay::new();
        display.draw_game_state(
            &Board::new(),
            Piece::Black,
            None,
            None,
            Some("error: Cannot put a piece on A0, it is already occupied"),
        );
        let frame = display.buffer();

        let cleared_at = frame.find(&clear::All.to_string()).unwrap();
        let error_at = frame.find("error: Cannot put a piece on A0").unwrap();
        assert!(error_at > cleared_at);
    }
}
