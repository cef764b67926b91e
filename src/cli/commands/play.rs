//! Play command - play a game against the computer.

use structopt::StructOpt;
use teeko::board::Piece;
use teeko::game::input_source::ConditionalInput;
use teeko::game::renderer::ConditionalStatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Piece,
    #[structopt(long, help = "Search the engine's candidate moves in parallel")]
    pub parallel: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.parallel);
        println!("You are playing {}.", self.color);
        run_game_loop(
            ConditionalInput {
                human_piece: self.color,
            },
            ConditionalStatsRenderer {
                human_piece: self.color,
            },
            config,
            None,
        );
    }
}
