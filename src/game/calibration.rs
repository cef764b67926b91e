//! Depth calibration: time one engine move at increasing depth limits until a depth
//! runs past the time budget.

use std::time::{Duration, Instant};

use crate::board::Board;
use crate::game::engine::{Engine, EngineConfig, EngineError};
use crate::teeko_move::TeekoMove;

/// Time taken to choose a move at one depth limit.
#[derive(Debug, PartialEq)]
pub struct DepthTiming {
    pub depth: u8,
    pub duration: Duration,
    pub result: Result<TeekoMove, EngineError>,
}

impl DepthTiming {
    pub fn over_budget(&self, budget: Duration) -> bool {
        self.duration > budget
    }
}

/// Runs `time_depth` for depths `1..=max_depth` in order. Stops after the first depth
/// that fails or takes longer than `budget`; that depth is still reported.
pub fn calibrate_depths<F>(
    max_depth: u8,
    budget: Duration,
    mut time_depth: F,
) -> Vec<DepthTiming>
where
    F: FnMut(u8) -> DepthTiming,
{
    let mut timings = Vec::new();
    for depth in 1..=max_depth {
        let timing = time_depth(depth);
        let stop = timing.result.is_err() || timing.over_budget(budget);
        timings.push(timing);
        if stop {
            break;
        }
    }
    timings
}

/// Times `Engine::choose_move` on `board` at each depth, reusing one engine.
pub fn time_engine_depths(
    board: &Board,
    config: EngineConfig,
    max_depth: u8,
    budget: Duration,
) -> Vec<DepthTiming> {
    let mut engine = Engine::with_config(config);
    calibrate_depths(max_depth, budget, |depth| {
        engine.set_search_depth(depth);
        let start = Instant::now();
        let result = engine.choose_move(board);
        DepthTiming {
            depth,
            duration: start.elapsed(),
            result,
        }
    })
}

/// Prints the time taken at each depth and the deepest depth that fit in `budget`.
pub fn run_depth_calibration(
    board: &Board,
    config: EngineConfig,
    max_depth: u8,
    budget: Duration,
) {
    println!(
        "Calibrating {} on\n{}\nbudget: {:?}, parallel: {}",
        config.piece, board, budget, config.parallel
    );

    let timings = time_engine_depths(board, config, max_depth, budget);
    for timing in &timings {
        match &timing.result {
            Ok(best_move) => println!(
                "Depth {}: time taken = {:.3}s (best move: {})",
                timing.depth,
                timing.duration.as_secs_f64(),
                best_move
            ),
            Err(err) => println!("Depth {}: search failed: {}", timing.depth, err),
        }
    }

    let deepest = timings
        .iter()
        .filter(|timing| timing.result.is_ok() && !timing.over_budget(budget))
        .map(|timing| timing.depth)
        .max();
    match deepest {
        Some(depth) => println!("Deepest depth within budget: {}", depth),
        None => println!("No depth finished within budget"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha_beta_searcher::SearchError;
    use crate::board::Piece;
    use crate::{place, teeko_position};

    fn fake_timing(depth: u8, millis: u64) -> DepthTiming {
        DepthTiming {
            depth,
            duration: Duration::from_millis(millis),
            result: Ok(place!(0, 0)),
        }
    }

    #[test]
    fn test_stops_after_first_depth_over_budget() {
        let mut requested = Vec::new();
        let timings = calibrate_depths(5, Duration::from_millis(100), |depth| {
            requested.push(depth);
            fake_timing(depth, 10u64.pow(u32::from(depth)))
        });

        // 10ms, 100ms (not over), 1000ms (over): depth 3 is the last one run.
        assert_eq!(requested, vec![1, 2, 3]);
        assert_eq!(timings.len(), 3);
        assert!(!timings[1].over_budget(Duration::from_millis(100)));
        assert!(timings[2].over_budget(Duration::from_millis(100)));
    }

    #[test]
    fn test_runs_every_depth_within_budget() {
        let timings = calibrate_depths(4, Duration::from_secs(5), |depth| fake_timing(depth, 1));

        let depths: Vec<u8> = timings.iter().map(|timing| timing.depth).collect();
        assert_eq!(depths, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_stops_on_search_error() {
        let board = teeko_position! {
            b b b b .
            . . . . .
            r r r . .
            . . . . .
            . . . . .
        };
        let config = EngineConfig {
            search_depth: 1,
            piece: Piece::Red,
            parallel: false,
        };

        let timings = time_engine_depths(&board, config, 5, Duration::from_secs(60));

        assert_eq!(timings.len(), 1);
        assert_eq!(
            timings[0].result,
            Err(EngineError::SearchError {
                error: SearchError::GameOver { score: -1.0 }
            })
        );
    }

    #[test]
    fn test_engine_depths_are_timed_in_order() {
        let timings =
            time_engine_depths(&Board::new(), EngineConfig::default(), 2, Duration::from_secs(60));

        let depths: Vec<u8> = timings.iter().map(|timing| timing.depth).collect();
        assert_eq!(depths, vec![1, 2]);
        assert!(timings.iter().all(|timing| timing.result == Ok(place!(0, 0))));
    }
}
