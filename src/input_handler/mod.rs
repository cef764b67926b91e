//! Move input parsing for the interactive game.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Square;
use crate::teeko_move::TeekoMove;

static PLACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-eA-E][0-4])$").expect("PLACE_RE regex should be valid"));
static RELOCATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-eA-E][0-4])\s+([a-eA-E][0-4])$").expect("RELOCATE_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveInput {
    Place { to: Square },
    Relocate { from: Square, to: Square },
    UseEngine,
}

impl MoveInput {
    /// The move typed by a human, or `None` when the engine should choose.
    pub fn to_move(&self) -> Option<TeekoMove> {
        match *self {
            MoveInput::Place { to } => Some(TeekoMove::place(to)),
            MoveInput::Relocate { from, to } => Some(TeekoMove::relocate(from, to)),
            MoveInput::UseEngine => None,
        }
    }
}

fn parse_square(input: &str, algebraic: &str) -> Result<Square, InputError> {
    Square::from_algebraic(algebraic).ok_or_else(|| InputError::InvalidInput {
        input: input.to_string(),
    })
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" | "q" => return Err(InputError::UserExit),
            _ => {}
        }

        if let Some(caps) = PLACE_RE.captures(trimmed) {
            return Ok(MoveInput::Place {
                to: parse_square(input, &caps[1])?,
            });
        }

        if let Some(caps) = RELOCATE_RE.captures(trimmed) {
            return Ok(MoveInput::Relocate {
                from: parse_square(input, &caps[1])?,
                to: parse_square(input, &caps[2])?,
            });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one line from stdin and parses it as a move.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    // EOF behaves like quitting.
    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}
