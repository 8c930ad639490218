//! Headless runner: plays seeded games with uniformly random moves.
//!
//! Usage: `autoplay [GAMES]` (default 10). Grid size and seed come from the same
//! environment variables as the terminal runner; logs go to stderr (`RUST_LOG`).

use anyhow::{bail, Context, Result};

use tui_2048::core::{GameConfig, GameManager, SimpleRng};
use tui_2048::types::Direction;

/// Upper bound on turns per game, so a pathological source cannot loop forever.
const MAX_TURNS: u32 = 100_000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let games: u32 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("GAMES must be a number, got {arg:?}"))?,
        None => 10,
    };
    if games == 0 {
        bail!("GAMES must be at least 1");
    }

    let config = GameConfig::from_env();
    let mut game = GameManager::from_config(&config)?;
    // A separate stream picks directions so the spawn stream matches the seed alone.
    let mut policy = SimpleRng::new(config.seed.rotate_left(16));

    let mut best = 0u64;
    for i in 0..games {
        if i > 0 {
            game.restart();
        }
        let mut turns = 0;
        while !game.is_game_terminated() && turns < MAX_TURNS {
            let dir = Direction::ALL[policy.next_range(4) as usize];
            game.move_tiles(dir);
            turns += 1;
        }

        best = best.max(game.score());
        println!(
            "game {:>3}: score {:>7} max tile {:>6} moves {:>6}",
            i + 1,
            game.score(),
            game.grid().max_value(),
            game.moves()
        );
    }

    log::info!("played {} games (seed {}), best score {}", games, config.seed, best);
    Ok(())
}
