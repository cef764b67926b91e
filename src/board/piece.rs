use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two Teeko piece colors. Black always moves first.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Piece {
    Black = 0,
    Red = 1,
}

impl Piece {
    pub const ALL: [Piece; 2] = [Piece::Black, Piece::Red];

    pub fn opposite(&self) -> Self {
        match self {
            Piece::Black => Piece::Red,
            Piece::Red => Piece::Black,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Piece::Black)
    }

    pub fn to_char(&self) -> char {
        match self {
            Piece::Black => 'b',
            Piece::Red => 'r',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Piece::Black),
            'r' => Some(Piece::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece_str = match self {
            Piece::Black => "black",
            Piece::Red => "red",
        };
        write!(f, "{}", piece_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Piece {
    type Err = ParseError;
    fn from_str(piece: &str) -> Result<Self, Self::Err> {
        match piece {
            "black" | "b" => Ok(Piece::Black),
            "red" | "r" => Ok(Piece::Red),
            "random" => Ok(Piece::random()),
            _ => Err("invalid color; options are: black, red, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Piece::ALL.contains(&Piece::random()));
    }

    #[test]
    fn test_parse_black() {
        assert_eq!(Piece::Black, Piece::from_str("black").unwrap());
        assert_eq!(Piece::Black, Piece::from_str("b").unwrap());
    }

    #[test]
    fn test_parse_red() {
        assert_eq!(Piece::Red, Piece::from_str("red").unwrap());
        assert_eq!(Piece::Red, Piece::from_str("r").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Piece::from_str("white").is_err());
    }

    #[test]
    fn test_opposite_is_involution() {
        for piece in Piece::ALL.iter() {
            assert_ne!(piece.opposite(), *piece);
            assert_eq!(piece.opposite().opposite(), *piece);
        }
    }

    #[test]
    fn test_char_round_trip() {
        assert_eq!(Piece::from_char(Piece::Black.to_char()), Some(Piece::Black));
        assert_eq!(Piece::from_char(Piece::Red.to_char()), Some(Piece::Red));
        assert_eq!(Piece::from_char('.'), None);
    }
}
