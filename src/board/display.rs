use super::{Board, Square, BOARD_SIZE};
use std::fmt;

impl Board {
    /// Compact single-line form accepted by `Board::from_str`, e.g. `b..../...../.....`.
    pub fn to_position_string(&self) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE as usize);
        for row in 0..BOARD_SIZE {
            let line: String = (0..BOARD_SIZE)
                .map(|col| match self.get(Square::at(row, col)) {
                    Some(piece) => piece.to_char(),
                    None => '.',
                })
                .collect();
            rows.push(line);
        }
        rows.join("/")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{}: ", row)?;
            for col in 0..BOARD_SIZE {
                let cell = match self.get(Square::at(row, col)) {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "   A B C D E")
    }
}

#[macro_export]
macro_rules! teeko_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: String = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(
            cells.chars().count(),
            25,
            "Invalid number of cells. Expected 25, got {}",
            cells.chars().count()
        );
        cells
            .parse::<$crate::board::Board>()
            .expect("Invalid character in teeko position")
    }};
}
