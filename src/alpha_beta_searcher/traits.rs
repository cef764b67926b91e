//! Core traits for generic minimax search.

use std::fmt::Debug;

/// Scores are reals in `[-1, 1]`, always from the point of view of the side to move at
/// the root of the search (the maximizer).
pub type Score = f32;

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone + Send + Sync {
    /// Switches to the next player's turn.
    fn toggle_turn(&mut self);
}

/// Represents an action that can be applied to and undone from a game state.
pub trait GameMove: Clone + Send + Sync + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Applies this move for the player to move in the given state.
    fn apply(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Undoes this move on the given state. Called once the turn has been toggled back,
    /// so the mover is the side to move again.
    fn undo(&self, state: &mut Self::State) -> Result<(), Self::Error>;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState>: Clone + Send + Sync {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the current player, in a deterministic order.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Evaluates a game position from the maximizer's point of view.
pub trait Evaluator<S: GameState>: Clone + Send + Sync {
    /// `Some(score)` when the game is already decided in `state`. Terminal scores end the
    /// search at that node regardless of the remaining depth.
    fn terminal_score(&self, state: &S) -> Option<Score>;

    /// Static score of a horizon node. Must agree with `terminal_score` on decided states.
    fn evaluate(&self, state: &S) -> Score;
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> + Send {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M: Send> MoveCollection<M> for Vec<M> {}

impl<A> MoveCollection<A::Item> for smallvec::SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Send,
{
}
