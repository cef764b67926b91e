//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;
use teeko::board::{Board, Piece};
use teeko::game::engine::{Engine, EngineConfig};

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "black")]
    pub color: Piece,
    #[structopt(long = "board")]
    pub board: Board,
    #[structopt(long, help = "Search candidate moves in parallel")]
    pub parallel: bool,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        if let Err(err) = self.board.check_piece_limits() {
            eprintln!("Failed to calculate best move: {}", err);
            return;
        }

        let config = EngineConfig {
            search_depth: self.depth,
            piece: self.color,
            parallel: self.parallel,
        };
        let mut engine = Engine::with_config(config);

        match engine.choose_move(&self.board) {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
