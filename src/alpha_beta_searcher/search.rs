//! Minimax search implementation.
//!
//! # Core Algorithm
//!
//! The side to move at the root is the maximizer; its opponent is the minimizer, and
//! every score is read from the maximizer's point of view. A node first asks the
//! evaluator whether the game is already decided: terminal scores end the line
//! immediately, whatever depth remains. Nodes at the depth limit (horizon nodes) return
//! the evaluator's static score. Every other node takes the maximum (or minimum) over
//! the scores of its successors, one ply deeper.
//!
//! Depth counts plies already descended from the root, which sits at depth 0. The root
//! is special: it has to remember which move produced the best score, so each root move
//! is searched as a minimizer node at depth 1 and the first move with the highest score,
//! in generator order, is returned.
//!
//! # Alpha-Beta Pruning
//!
//! Inner nodes keep a window `[alpha, beta]` of scores that can still affect the parent
//! and stop expanding once the window closes. Pruning never changes the root score or
//! the chosen move: a pruned child can only report a bound that does not beat the move
//! already held, and ties keep the earlier move.
//!
//! # Parallel Search
//!
//! Root moves can be searched in parallel with rayon. Each root move gets its own clone
//! of the state and a full window, and the results are reduced in generator order, so a
//! parallel search returns exactly what the sequential one does.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::{debug, error};
use rayon::prelude::*;
use thiserror::Error;

use super::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, Score};

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves in an undecided position at depth {depth}")]
    NoAvailableMoves { depth: u8 },
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("the game is already decided (score {score})")]
    GameOver { score: Score },
    #[error("failed to apply or undo a generated move: {reason}")]
    MoveApplication { reason: String },
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
    parallel: bool,
}

impl SearchConfig {
    fn new(depth: u8, parallel: bool) -> Self {
        Self { depth, parallel }
    }
}

/// Statistics collected during search.
struct SearchStats {
    position_count: AtomicUsize,
    terminal_nodes: AtomicUsize,
    horizon_nodes: AtomicUsize,
    cutoffs: AtomicUsize,
    last_score: Option<Score>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: AtomicUsize::new(0),
            terminal_nodes: AtomicUsize::new(0),
            horizon_nodes: AtomicUsize::new(0),
            cutoffs: AtomicUsize::new(0),
            last_score: None,
            last_duration: None,
        }
    }

    fn reset(&mut self) {
        self.last_score = None;
        self.last_duration = None;
        self.position_count.store(0, Ordering::SeqCst);
        self.terminal_nodes.store(0, Ordering::SeqCst);
        self.horizon_nodes.store(0, Ordering::SeqCst);
        self.cutoffs.store(0, Ordering::SeqCst);
    }

    fn record_result(&mut self, score: Score, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

/// Owns the depth limit, the parallelism switch and the statistics of the last search.
/// Holds no game state.
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self::with_parallel(depth, false)
    }

    pub fn with_parallel(depth: u8, parallel: bool) -> Self {
        Self {
            config: SearchConfig::new(depth, parallel),
            stats: SearchStats::new(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count.load(Ordering::SeqCst)
    }

    pub fn terminal_node_count(&self) -> usize {
        self.stats.terminal_nodes.load(Ordering::SeqCst)
    }

    pub fn horizon_node_count(&self) -> usize {
        self.stats.horizon_nodes.load(Ordering::SeqCst)
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs.load(Ordering::SeqCst)
    }

    /// Score of the root position found by the last search.
    pub fn last_score(&self) -> Option<Score> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    fn increment_position_count(&self) {
        self.stats.position_count.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_terminal_nodes(&self) {
        self.stats.terminal_nodes.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_horizon_nodes(&self) {
        self.stats.horizon_nodes.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_cutoffs(&self) {
        self.stats.cutoffs.fetch_add(1, Ordering::SeqCst);
    }
}

/// Applies a move, executes a closure with the new state, then undoes the move.
/// Handles turn toggling automatically.
fn with_move_applied<S, M, F, R>(game_move: &M, state: &mut S, f: F) -> Result<R, SearchError>
where
    S: GameState,
    M: GameMove<State = S>,
    F: FnOnce(&mut S) -> Result<R, SearchError>,
{
    game_move
        .apply(state)
        .map_err(|err| SearchError::MoveApplication {
            reason: format!("{:?}", err),
        })?;
    state.toggle_turn();

    let result = f(state);

    state.toggle_turn();
    game_move
        .undo(state)
        .map_err(|err| SearchError::MoveApplication {
            reason: format!("{:?}", err),
        })?;

    result
}

/// Updates best score and move if new score is strictly better, so the earliest of
/// several equal moves is kept. Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: Score,
    candidate_move: &M,
    best_score: &mut Score,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = score > *best_score || best_move.is_none();
    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

/// Searches for the best move for the side to move in `state`.
///
/// # Returns
///
/// - `Ok(best_move)` - The first move, in generator order, with the highest score
/// - `Err(SearchError::DepthTooLow)` - If the configured depth is < 1
/// - `Err(SearchError::GameOver)` - If `state` is already decided; the terminal score is
///   still recorded as the last score
/// - `Err(SearchError::NoAvailableMoves)` - If any undecided position reached by the
///   search (the root included) has no legal move
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new(3);
/// let best_move = alpha_beta_search(&mut context, &mut position, &move_gen, &evaluator)?;
/// ```
#[must_use = "search returns the best move found"]
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
) -> Result<G::Move, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::MoveList: Sync,
    E: Evaluator<S>,
{
    let depth_limit = context.search_depth();
    debug!("minimax search depth: {}", depth_limit);

    if depth_limit < 1 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();
    context.increment_position_count();

    if let Some(score) = evaluator.terminal_score(state) {
        context.increment_terminal_nodes();
        context.stats.record_result(score, start.elapsed());
        return Err(SearchError::GameOver { score });
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        error!("no legal moves at the root of an undecided position");
        return Err(SearchError::NoAvailableMoves { depth: 0 });
    }

    let (best_score, best_move) = if context.is_parallel() {
        search_root_parallel(
            context,
            state,
            move_generator,
            evaluator,
            &candidates,
            depth_limit,
        )?
    } else {
        search_root_sequential(
            context,
            state,
            move_generator,
            evaluator,
            &candidates,
            depth_limit,
        )?
    };

    let best_move = best_move.ok_or(SearchError::NoAvailableMoves { depth: 0 })?;
    context.stats.record_result(best_score, start.elapsed());
    debug!(
        "best move {:?} with score {} after {} positions",
        best_move,
        best_score,
        context.searched_position_count()
    );

    Ok(best_move)
}

/// Minimax value of `state` as a maximizer node at depth 0, without choosing a move.
/// Decided positions score their terminal value whatever the depth limit.
pub fn minimax_value<S, G, E>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
) -> Result<Score, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    let depth_limit = context.search_depth();
    if depth_limit < 1 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();
    let score = minimax(
        context,
        state,
        move_generator,
        evaluator,
        0,
        depth_limit,
        Score::NEG_INFINITY,
        Score::INFINITY,
        true,
    )?;
    context.stats.record_result(score, start.elapsed());
    Ok(score)
}

fn search_root_sequential<S, G, E, C>(
    context: &SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    candidates: &C,
    depth_limit: u8,
) -> Result<(Score, Option<G::Move>), SearchError>
where
    S: GameState,
    G: MoveGenerator<S, MoveList = C>,
    C: MoveCollection<G::Move>,
    E: Evaluator<S>,
{
    let mut best_score = Score::NEG_INFINITY;
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        let score = with_move_applied(game_move, state, |state| {
            minimax(
                context,
                state,
                move_generator,
                evaluator,
                1,
                depth_limit,
                best_score,
                Score::INFINITY,
                false,
            )
        })?;
        debug!("root move {:?} scored {}", game_move, score);

        update_best(score, game_move, &mut best_score, &mut best_move);
    }

    Ok((best_score, best_move))
}

fn search_root_parallel<S, G, E, C>(
    context: &SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    candidates: &C,
    depth_limit: u8,
) -> Result<(Score, Option<G::Move>), SearchError>
where
    S: GameState,
    G: MoveGenerator<S, MoveList = C>,
    C: MoveCollection<G::Move> + Sync,
    E: Evaluator<S>,
{
    let results: Vec<(Score, G::Move)> = candidates
        .as_ref()
        .par_iter()
        .map(|game_move| {
            let mut cloned_state = state.clone();

            let score = with_move_applied(game_move, &mut cloned_state, |state| {
                minimax(
                    context,
                    state,
                    move_generator,
                    evaluator,
                    1,
                    depth_limit,
                    Score::NEG_INFINITY,
                    Score::INFINITY,
                    false,
                )
            })?;

            Ok((score, game_move.clone()))
        })
        .collect::<Result<Vec<_>, SearchError>>()?;

    let mut best_score = Score::NEG_INFINITY;
    let mut best_move = None;

    // `collect` keeps generator order, so ties still go to the earliest move.
    for (score, game_move) in results {
        update_best(score, &game_move, &mut best_score, &mut best_move);
    }

    Ok((best_score, best_move))
}

/// Scores `state` at `depth` plies below the root.
///
/// Returns a fail-soft value: when the window closes early the result is a bound that
/// the parent is guaranteed not to prefer, otherwise it is the exact minimax score.
#[allow(clippy::too_many_arguments)]
fn minimax<S, G, E>(
    context: &SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    depth: u8,
    depth_limit: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing_player: bool,
) -> Result<Score, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.increment_position_count();

    if let Some(score) = evaluator.terminal_score(state) {
        context.increment_terminal_nodes();
        return Ok(score);
    }

    if depth >= depth_limit {
        context.increment_horizon_nodes();
        return Ok(evaluator.evaluate(state));
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        error!(
            "no legal moves at depth {} of an undecided position, aborting search",
            depth
        );
        return Err(SearchError::NoAvailableMoves { depth });
    }

    let mut best_score = if maximizing_player {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };

    for game_move in candidates.as_ref().iter() {
        let score = with_move_applied(game_move, state, |state| {
            minimax(
                context,
                state,
                move_generator,
                evaluator,
                depth + 1,
                depth_limit,
                alpha,
                beta,
                !maximizing_player,
            )
        })?;

        if maximizing_player {
            best_score = best_score.max(score);
            alpha = alpha.max(best_score);
        } else {
            best_score = best_score.min(score);
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            context.increment_cutoffs();
            break;
        }
    }

    Ok(best_score)
}
