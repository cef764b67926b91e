//! Teeko-specific implementation of the alpha-beta search traits.

pub mod implementation;


pub use implementation::{
    position_value, search_best_move, Position, TeekoEvaluator, TeekoMoveGenerator,
};
