use std::fmt;

/// Width and height of the Teeko board.
pub const BOARD_SIZE: u8 = 5;

/// Number of cells on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// King-move offsets in row-major order. Successor generation relies on this order.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const COLUMN_CHARS: [char; BOARD_SIZE as usize] = ['A', 'B', 'C', 'D', 'E'];

/// A cell on the 5x5 board, addressed by row (0 at the top) and column (0 at the left).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Only for coordinates already known to be on the board.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Some(Self::at((index / size) as u8, (index % size) as u8))
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// All squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).map(|index| {
            let size = BOARD_SIZE as usize;
            Square::at((index / size) as u8, (index % size) as u8)
        })
    }

    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// The up-to-eight cells sharing an edge or corner with this one, clipped at the
    /// board edges, in row-major offset order.
    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| self.offset(d_row, d_col))
    }

    pub fn is_adjacent(&self, other: Square) -> bool {
        let d_row = (self.row as i8 - other.row as i8).abs();
        let d_col = (self.col as i8 - other.col as i8).abs();
        d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
    }

    /// Parses a column letter followed by a row digit, e.g. `B3` or `b3`.
    pub fn from_algebraic(algebraic: &str) -> Option<Square> {
        let mut chars = algebraic.trim().chars();
        let col_char = chars.next()?.to_ascii_uppercase();
        let row_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let col = COLUMN_CHARS.iter().position(|&c| c == col_char)? as u8;
        let row = row_char.to_digit(10)? as u8;
        Square::new(row, col)
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", COLUMN_CHARS[self.col as usize], self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_rejected() {
        assert!(Square::new(5, 0).is_none());
        assert!(Square::new(0, 5).is_none());
        assert!(Square::new(4, 4).is_some());
    }

    #[test]
    fn test_all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), SQUARE_COUNT);
        for (index, square) in squares.iter().enumerate() {
            assert_eq!(square.index(), index);
            assert_eq!(Square::from_index(index), Some(*square));
        }
    }

    #[test]
    fn test_neighbor_counts() {
        assert_eq!(Square::at(0, 0).neighbors().count(), 3);
        assert_eq!(Square::at(0, 2).neighbors().count(), 5);
        assert_eq!(Square::at(2, 2).neighbors().count(), 8);
        assert_eq!(Square::at(4, 4).neighbors().count(), 3);
    }

    #[test]
    fn test_neighbors_are_in_offset_order() {
        let neighbors: Vec<Square> = Square::at(1, 1).neighbors().collect();
        assert_eq!(
            neighbors,
            vec![
                Square::at(0, 0),
                Square::at(0, 1),
                Square::at(0, 2),
                Square::at(1, 0),
                Square::at(1, 2),
                Square::at(2, 0),
                Square::at(2, 1),
                Square::at(2, 2),
            ]
        );
    }

    #[test]
    fn test_adjacency_does_not_wrap() {
        assert!(Square::at(2, 2).is_adjacent(Square::at(3, 3)));
        assert!(!Square::at(2, 2).is_adjacent(Square::at(2, 2)));
        assert!(!Square::at(0, 4).is_adjacent(Square::at(1, 0)));
        assert!(!Square::at(0, 0).is_adjacent(Square::at(0, 2)));
    }

    #[test]
    fn test_algebraic() {
        assert_eq!(Square::from_algebraic("B3"), Some(Square::at(3, 1)));
        assert_eq!(Square::from_algebraic("e0"), Some(Square::at(0, 4)));
        assert_eq!(Square::from_algebraic("F1"), None);
        assert_eq!(Square::from_algebraic("A5"), None);
        assert_eq!(Square::from_algebraic("A12"), None);
        assert_eq!(Square::at(3, 1).to_algebraic(), "B3");
    }
}
