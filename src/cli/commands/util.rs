//! Shared utilities for CLI commands.

use teeko::game::engine::EngineConfig;
use teeko::game::input_source::InputSource;
use teeko::game::r#loop::GameLoop;
use teeko::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(
    input_source: I,
    renderer: R,
    config: EngineConfig,
    max_moves: Option<usize>,
) where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    if let Some(max_moves) = max_moves {
        game = game.with_move_limit(max_moves);
    }
    game.run();
}

pub(crate) fn create_config(depth: u8, parallel: bool) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        parallel,
        ..EngineConfig::default()
    }
}
