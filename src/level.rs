use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Dot,
    Empty,
}

impl Tile {
    fn from_char(c: char) -> Tile {
        match c {
            '#' => Tile::Wall,
            '.' => Tile::Dot,
            _ => Tile::Empty,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

/// Rectangular grid of tiles. Only dots ever change, and only into empty floor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Vec<Vec<Tile>>,
    cols: usize,
}

impl Maze {
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile(&self, pos: Pos) -> Tile {
        self.grid[pos.row][pos.col]
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.tile(pos) == Tile::Wall
    }

    /// Turns a dot into empty floor. Calling it on anything else does nothing.
    pub fn remove_dot(&mut self, pos: Pos) {
        let tile = &mut self.grid[pos.row][pos.col];
        if *tile == Tile::Dot {
            *tile = Tile::Empty;
        }
    }

    pub fn dot_count(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&tile| tile == Tile::Dot)
            .count()
    }

    pub fn row_tiles(&self, row: usize) -> &[Tile] {
        &self.grid[row]
    }
}

/// A parsed maze together with the start markers found while scanning it.
#[derive(Clone, Debug)]
pub struct Level {
    pub maze: Maze,
    pub player: Pos,
    /// Ghost starts in row-major scan order.
    pub ghosts: Vec<Pos>,
    pub dots: usize,
}

impl Level {
    pub fn load(path: impl AsRef<Path>) -> Result<Level> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Level::parse(&text)?;
        info!(
            "loaded maze {} ({}x{}, {} ghosts, {} dots)",
            path.display(),
            level.maze.rows(),
            level.maze.cols(),
            level.ghosts.len(),
            level.dots
        );
        Ok(level)
    }

    pub fn parse(text: &str) -> Result<Level> {
        let lines: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        if lines.is_empty() {
            return Err(Error::Maze("maze source is empty".into()));
        }

        let cols = lines.iter().map(Vec::len).max().unwrap_or(0);
        if lines.iter().any(|line| line.len() != cols) {
            warn!("maze rows have uneven width, padding to {cols} columns");
        }

        let mut player = None;
        let mut ghosts = Vec::new();
        let mut grid = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut tiles = Vec::with_capacity(cols);
            for (col, &c) in line.iter().enumerate() {
                match c {
                    'P' => {
                        if let Some(first) = player.replace(Pos::new(row, col)) {
                            return Err(Error::Maze(format!(
                                "second player marker at {row}:{col} (first at {}:{})",
                                first.row, first.col
                            )));
                        }
                    }
                    'G' => ghosts.push(Pos::new(row, col)),
                    _ => {}
                }
                tiles.push(Tile::from_char(c));
            }
            tiles.resize(cols, Tile::Empty);
            grid.push(tiles);
        }

        let player = player.ok_or_else(|| Error::Maze("no player marker 'P'".into()))?;
        let maze = Maze { grid, cols };
        let dots = maze.dot_count();
        Ok(Level {
            maze,
            player,
            ghosts,
            dots,
        })
    }
}
