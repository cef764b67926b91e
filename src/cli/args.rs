//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, calibrate_depth::CalibrateDepthArgs,
    play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "teeko", about = "A Teeko engine implemented in Rust")]
pub enum Teeko {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move using minimax at the given `--depth` (default: 3). Black moves first. Your color will be chosen at random unless you specify with `--color`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 3), until one side wins or `--max-moves` (default: 200) is reached."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move for `--color` (default: black) on a board given with `--board` as five `/`-separated rows of `b`, `r` and `.`, e.g. `b..../.r.../...../...../.....`. The depth of the search can be set with `--depth` (default: 3)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "calibrate-depth",
        about = "Time the computer's move for `--color` (default: black) on `--board` (default: empty) at depths 1 up to `--max-depth` (default: 5). Each depth's time is printed, and calibration stops after the first depth that takes longer than `--budget-ms` (default: 5000)."
    )]
    CalibrateDepth(CalibrateDepthArgs),
}

impl crate::cli::commands::Command for Teeko {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CalibrateDepth(cmd),
        }
    }
}
