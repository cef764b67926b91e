//! Generic depth-limited minimax search with alpha-beta pruning.
//!
//! The searcher knows nothing about any particular game: it drives the
//! [`MoveGenerator`] and [`Evaluator`] traits over a [`GameState`]. Game-specific
//! implementations live elsewhere (see `teeko_search`).

mod search;
mod traits;


pub use search::{alpha_beta_search, minimax_value, SearchContext, SearchError};
pub use traits::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, Score};
