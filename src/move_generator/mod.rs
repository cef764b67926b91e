//! Teeko successor generation.

pub mod generator;

pub use generator::{successors, MoveGenerator, TeekoMoveList};
