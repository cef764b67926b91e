use crate::board::Piece;
use crate::input_handler::{parse_move_input, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&self, current_turn: Piece) -> Result<Option<MoveInput>, InputError>;
}

fn read_human_move() -> Result<Option<MoveInput>, InputError> {
    match parse_move_input() {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::UserExit) => Err(InputError::UserExit),
        Err(InputError::IOError { error }) => Err(InputError::IOError { error }),
        Err(_) => Ok(None), // Other errors treated as invalid input
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _current_turn: Piece) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

pub struct ConditionalInput {
    pub human_piece: Piece,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_turn: Piece) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_piece {
            read_human_move()
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }
}
