//! Cell groups scanned by the terminal and heuristic evaluators.
//!
//! The tables are built once and iterated in a fixed order so win detection and
//! scoring are deterministic.

use once_cell::sync::Lazy;

use crate::board::{Square, BOARD_SIZE};

const LAST: u8 = BOARD_SIZE - 1;

/// The five shapes that win the game when all four cells hold the same piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PatternFamily {
    Horizontal,
    Vertical,
    /// Runs down and to the right.
    BackslashDiagonal,
    /// Runs down and to the left.
    SlashDiagonal,
    Box,
}

impl PatternFamily {
    pub const ALL: [PatternFamily; 5] = [
        PatternFamily::Horizontal,
        PatternFamily::Vertical,
        PatternFamily::BackslashDiagonal,
        PatternFamily::SlashDiagonal,
        PatternFamily::Box,
    ];
}

#[derive(Clone, Copy, Debug)]
pub struct WinPattern {
    pub family: PatternFamily,
    pub squares: [Square; 4],
}

/// Every four-cell winning placement: 10 horizontal, 10 vertical, 4 of each diagonal
/// and 16 boxes.
pub static WIN_PATTERNS: Lazy<Vec<WinPattern>> = Lazy::new(|| {
    let mut patterns = Vec::with_capacity(44);
    let line = |family, row: u8, col: u8, d_row: i8, d_col: i8| {
        let mut squares = [Square::at(row, col); 4];
        for (i, square) in squares.iter_mut().enumerate() {
            let i = i as i8;
            *square = Square::at((row as i8 + d_row * i) as u8, (col as i8 + d_col * i) as u8);
        }
        WinPattern { family, squares }
    };

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE - 3 {
            patterns.push(line(PatternFamily::Horizontal, row, col, 0, 1));
        }
    }
    for col in 0..BOARD_SIZE {
        for row in 0..BOARD_SIZE - 3 {
            patterns.push(line(PatternFamily::Vertical, row, col, 1, 0));
        }
    }
    for row in 0..BOARD_SIZE - 3 {
        for col in 0..BOARD_SIZE - 3 {
            patterns.push(line(PatternFamily::BackslashDiagonal, row, col, 1, 1));
        }
    }
    for row in 0..BOARD_SIZE - 3 {
        for col in 3..BOARD_SIZE {
            patterns.push(line(PatternFamily::SlashDiagonal, row, col, 1, -1));
        }
    }
    for row in 0..LAST {
        for col in 0..LAST {
            patterns.push(WinPattern {
                family: PatternFamily::Box,
                squares: [
                    Square::at(row, col),
                    Square::at(row, col + 1),
                    Square::at(row + 1, col),
                    Square::at(row + 1, col + 1),
                ],
            });
        }
    }

    patterns
});

/// Three-cell groups that count toward a side's near-win tally: every length-3
/// horizontal and vertical window, plus two triangles per 2x2 box (the box missing its
/// bottom-right cell and the box missing its top-left cell).
pub static NEAR_WIN_PATTERNS: Lazy<Vec<[Square; 3]>> = Lazy::new(|| {
    let mut patterns = Vec::with_capacity(62);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE - 2 {
            patterns.push([
                Square::at(row, col),
                Square::at(row, col + 1),
                Square::at(row, col + 2),
            ]);
        }
    }
    for col in 0..BOARD_SIZE {
        for row in 0..BOARD_SIZE - 2 {
            patterns.push([
                Square::at(row, col),
                Square::at(row + 1, col),
                Square::at(row + 2, col),
            ]);
        }
    }
    for row in 0..LAST {
        for col in 0..LAST {
            patterns.push([
                Square::at(row, col),
                Square::at(row + 1, col),
                Square::at(row, col + 1),
            ]);
            patterns.push([
                Square::at(row, col + 1),
                Square::at(row + 1, col + 1),
                Square::at(row + 1, col),
            ]);
        }
    }

    patterns
});
