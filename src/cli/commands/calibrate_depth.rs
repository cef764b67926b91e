//! Calibrate depth command - time the engine at increasing depths to pick a depth limit.

use std::time::Duration;

use structopt::StructOpt;
use teeko::board::{Board, Piece};
use teeko::evaluate;
use teeko::game::calibration::run_depth_calibration;
use teeko::game::engine::EngineConfig;

use super::Command;

#[derive(StructOpt)]
pub struct CalibrateDepthArgs {
    #[structopt(long = "board", default_value = "...../...../...../...../.....")]
    pub board: Board,
    #[structopt(short = "c", long = "color", default_value = "black")]
    pub color: Piece,
    #[structopt(long = "max-depth", default_value = "5")]
    pub max_depth: u8,
    #[structopt(long = "budget-ms", default_value = "5000")]
    pub budget_ms: u64,
    #[structopt(long, help = "Search candidate moves in parallel")]
    pub parallel: bool,
}

impl Command for CalibrateDepthArgs {
    fn execute(self) {
        if let Err(err) = self.board.check_piece_limits() {
            eprintln!("{}", err);
            return;
        }
        if evaluate::outcome(&self.board, self.color).is_decided() {
            eprintln!("The game on this board is already decided, nothing to search");
            return;
        }

        let config = EngineConfig {
            search_depth: 1,
            piece: self.color,
            parallel: self.parallel,
        };
        run_depth_calibration(
            &self.board,
            config,
            self.max_depth,
            Duration::from_millis(self.budget_ms),
        );
    }
}
