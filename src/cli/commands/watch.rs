//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;
use teeko::game::input_source::EngineInput;
use teeko::game::renderer::StatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(
        long = "delay-ms",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(
        long = "max-moves",
        default_value = "200",
        help = "Stop after this many moves without a winner"
    )]
    pub max_moves: usize,
    #[structopt(long, help = "Search candidate moves in parallel")]
    pub parallel: bool,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.parallel);
        let renderer = StatsRenderer {
            delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
        };
        run_game_loop(EngineInput, renderer, config, Some(self.max_moves));
    }
}
