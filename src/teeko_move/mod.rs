//! Teeko moves and the move applier that validates them against a board.

pub mod applier;
pub mod teeko_move;

pub use applier::apply_move;
pub use teeko_move::TeekoMove;
