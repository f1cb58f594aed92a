use rand::Rng;

use crate::level::{Maze, Pos};
use crate::movement::{resolve, Dir};

/// Where ghosts get their next heading from.
pub trait DirectionSource {
    fn next_dir(&mut self) -> Dir;
}

/// Uniform draw over the four directions, no memory between draws.
pub struct RandomDirections<R>(pub R);

impl<R: Rng> DirectionSource for RandomDirections<R> {
    fn next_dir(&mut self) -> Dir {
        Dir::ALL[self.0.gen_range(0..Dir::ALL.len())]
    }
}

/// Replays a fixed sequence of directions, starting over at the end.
#[derive(Clone, Debug)]
pub struct Scripted {
    dirs: Vec<Dir>,
    next: usize,
}

impl Scripted {
    pub fn new(dirs: Vec<Dir>) -> Self {
        assert!(!dirs.is_empty(), "scripted directions must not be empty");
        Scripted { dirs, next: 0 }
    }
}

impl DirectionSource for Scripted {
    fn next_dir(&mut self) -> Dir {
        let dir = self.dirs[self.next];
        self.next = (self.next + 1) % self.dirs.len();
        dir
    }
}

/// Moves every ghost one step, each with its own draw.
pub fn move_ghosts(ghosts: &mut [Pos], maze: &Maze, dirs: &mut impl DirectionSource) {
    for ghost in ghosts.iter_mut() {
        *ghost = resolve(*ghost, Some(dirs.next_dir()), maze);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn each_ghost_draws_its_own_direction() {
        let level = Level::parse("     \n G P \n G   \n     \n     ").unwrap();
        let mut ghosts = level.ghosts.clone();
        let mut dirs = Scripted::new(vec![Dir::Up, Dir::Right]);
        move_ghosts(&mut ghosts, &level.maze, &mut dirs);
        assert_eq!(ghosts, vec![Pos::new(0, 1), Pos::new(2, 2)]);
    }

    #[test]
    fn ghosts_may_share_a_cell() {
        let level = Level::parse("P   \n G  \n  G \n    ").unwrap();
        let mut ghosts = level.ghosts.clone();
        let mut dirs = Scripted::new(vec![Dir::Right, Dir::Up]);
        move_ghosts(&mut ghosts, &level.maze, &mut dirs);
        assert_eq!(ghosts, vec![Pos::new(1, 2), Pos::new(1, 2)]);
    }

    #[test]
    fn boxed_in_ghost_never_moves() {
        let level = Level::parse("P###\n #G#\n ###\n    ").unwrap();
        let mut ghosts = level.ghosts.clone();
        let mut dirs = RandomDirections(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            move_ghosts(&mut ghosts, &level.maze, &mut dirs);
            assert_eq!(ghosts, vec![Pos::new(1, 2)]);
        }
    }

    #[test]
    fn random_source_covers_all_directions() {
        let mut dirs = RandomDirections(StdRng::seed_from_u64(42));
        let mut seen = [false; 4];
        for _ in 0..200 {
            let dir = dirs.next_dir();
            let idx = Dir::ALL.iter().position(|&d| d == dir).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn scripted_cycles() {
        let mut dirs = Scripted::new(vec![Dir::Left, Dir::Down]);
        let drawn: Vec<Dir> = (0..5).map(|_| dirs.next_dir()).collect();
        assert_eq!(drawn, vec![Dir::Left, Dir::Down, Dir::Left, Dir::Down, Dir::Left]);
    }
}
