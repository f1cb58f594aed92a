use log::{debug, info};

use crate::ghost::{move_ghosts, DirectionSource};
use crate::input::Key;
use crate::level::{Level, Maze, Pos, Tile};
use crate::movement::resolve;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every dot was eaten.
    Cleared,
    /// Caught by a ghost, or the player quit.
    Died,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver(Outcome),
}

/// One game session. Owns the maze and every entity in it; only the loop that
/// holds it mutates anything.
#[derive(Clone, Debug)]
pub struct Game {
    pub maze: Maze,
    pub player: Pos,
    pub ghosts: Vec<Pos>,
    pub score: u32,
    pub dots_left: usize,
    pub lives: u32,
}

impl Game {
    pub fn new(level: Level) -> Self {
        Game {
            maze: level.maze,
            player: level.player,
            ghosts: level.ghosts,
            score: 0,
            dots_left: level.dots,
            lives: 1,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.lives == 0 {
            Phase::GameOver(Outcome::Died)
        } else if self.dots_left == 0 {
            Phase::GameOver(Outcome::Cleared)
        } else {
            Phase::Running
        }
    }

    /// Applies one decoded key. `Esc` ends the game instead of moving.
    pub fn apply_input(&mut self, key: Key) {
        if key == Key::Esc {
            info!("quit requested");
            self.lives = 0;
            return;
        }
        self.move_player(key);
    }

    fn move_player(&mut self, key: Key) {
        self.player = resolve(self.player, key.dir(), &self.maze);
        self.consume_tile();
    }

    fn consume_tile(&mut self) {
        if self.maze.tile(self.player) == Tile::Dot {
            self.maze.remove_dot(self.player);
            self.dots_left = self.dots_left.saturating_sub(1);
            self.score += 1;
            debug!("dot at {:?}, {} left", self.player, self.dots_left);
        }
    }

    pub fn update_ghosts(&mut self, dirs: &mut impl DirectionSource) {
        move_ghosts(&mut self.ghosts, &self.maze, dirs);
    }

    pub fn handle_collisions(&mut self) {
        if self.ghosts.iter().any(|g| *g == self.player) {
            info!("caught by a ghost at {:?}", self.player);
            self.lives = 0;
        }
    }

    /// Runs the update half of a tick: input, ghosts, collisions.
    pub fn tick(&mut self, key: Option<Key>, dirs: &mut impl DirectionSource) -> Phase {
        if let Some(key) = key {
            self.apply_input(key);
        }
        self.update_ghosts(dirs);
        self.handle_collisions();
        self.phase()
    }
}
