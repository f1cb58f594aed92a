use std::io::Write;
use std::sync::mpsc::Receiver;
use std::thread;
use std::time::Duration;

use log::info;

use crate::error::Result;
use crate::game::{Game, Outcome, Phase};
use crate::ghost::DirectionSource;
use crate::input::{self, Key};
use crate::render::Renderer;

pub const DEFAULT_TICK_MS: u64 = 200;

/// Runs ticks until the game is over.
///
/// Each tick draws, applies at most one queued key, moves the ghosts, checks
/// collisions and then sleeps for `tick`. Keys beyond the first stay queued
/// for later ticks.
pub fn run<W: Write>(
    game: &mut Game,
    renderer: &mut Renderer<W>,
    keys: &Receiver<Key>,
    dirs: &mut impl DirectionSource,
    tick: Duration,
) -> Result<Outcome> {
    let mut ticks: u64 = 0;
    let outcome = loop {
        renderer.frame(game)?;
        if let Phase::GameOver(outcome) = game.phase() {
            break outcome;
        }

        let key = input::poll(keys);
        ticks += 1;
        if let Phase::GameOver(outcome) = game.tick(key, dirs) {
            renderer.frame(game)?;
            break outcome;
        }
        thread::sleep(tick);
    };

    renderer.game_over(game, outcome)?;
    info!(
        "game over after {ticks} ticks: {outcome:?}, score {}",
        game.score
    );
    Ok(outcome)
}
