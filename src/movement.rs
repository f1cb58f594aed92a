use crate::level::{Maze, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Right, Dir::Left];
}

/// Next position after one step in `dir`, wrapping at the grid edges.
///
/// Walls are checked on the wrapped destination only. A blocked move, or no
/// direction at all, returns `pos` unchanged.
///
/// Going down wraps one row early: stepping onto the last row sends the mover
/// to row 0 instead. The last row is still reachable by wrapping upward off
/// row 0, and stepping down from it also wraps to row 0.
pub fn resolve(pos: Pos, dir: Option<Dir>, maze: &Maze) -> Pos {
    let rows = maze.rows();
    let cols = maze.cols();
    let Some(dir) = dir else {
        return pos;
    };

    let next = match dir {
        Dir::Up => Pos {
            row: pos.row.checked_sub(1).unwrap_or(rows - 1),
            ..pos
        },
        Dir::Down => {
            let row = pos.row + 1;
            Pos {
                row: if row >= rows - 1 { 0 } else { row },
                ..pos
            }
        }
        Dir::Right => {
            let col = pos.col + 1;
            Pos {
                col: if col == cols { 0 } else { col },
                ..pos
            }
        }
        Dir::Left => Pos {
            col: pos.col.checked_sub(1).unwrap_or(cols - 1),
            ..pos
        },
    };

    if maze.is_wall(next) {
        pos
    } else {
        next
    }
}
