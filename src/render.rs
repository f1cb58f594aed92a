use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::game::{Game, Outcome};
use crate::level::{Pos, Tile};

/// Draws whole frames with ANSI cursor addressing onto any writer.
pub struct Renderer<W: Write> {
    out: W,
    config: Config,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, config: Config) -> Self {
        Renderer { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn frame(&mut self, game: &Game) -> io::Result<()> {
        let Renderer { out, config } = self;
        let cell_w = config.cell_width();
        out.queue(Clear(ClearType::All))?;

        for row in 0..game.maze.rows() {
            out.queue(MoveTo(0, to_u16(row)))?;
            for &tile in game.maze.row_tiles(row) {
                let glyph = match tile {
                    Tile::Wall => &config.wall,
                    Tile::Dot => &config.dot,
                    Tile::Empty => &config.space,
                };
                print_cell(out, glyph, cell_w)?;
            }
        }

        draw_at(out, game.player, &config.player, cell_w)?;
        for &pos in &game.ghosts {
            draw_at(out, pos, &config.ghost, cell_w)?;
        }

        let hud = to_u16(game.maze.rows() + 1);
        out.queue(MoveTo(0, hud))?;
        out.queue(Print(format!("Score: {}", game.score)))?;
        out.queue(MoveTo(0, hud + 1))?;
        out.queue(Print(format!("Lives: {}", game.lives)))?;
        out.flush()
    }

    pub fn game_over(&mut self, game: &Game, outcome: Outcome) -> io::Result<()> {
        let Renderer { out, config } = self;
        let below = to_u16(game.maze.rows() + 3);
        let message = match outcome {
            Outcome::Died => {
                draw_at(out, game.player, &config.death, config.cell_width())?;
                format!("GAME OVER - Final Score: {}", game.score)
            }
            Outcome::Cleared => format!("You win! - Final Score: {}", game.score),
        };
        out.queue(MoveTo(0, below))?;
        out.queue(Print(message))?;
        out.queue(MoveTo(0, below + 1))?;
        out.flush()
    }
}

fn draw_at(out: &mut impl Write, pos: Pos, glyph: &str, cell_w: usize) -> io::Result<()> {
    out.queue(MoveTo(to_u16(pos.col * cell_w), to_u16(pos.row)))?;
    print_cell(out, glyph, cell_w)
}

fn print_cell(out: &mut impl Write, glyph: &str, cell_w: usize) -> io::Result<()> {
    out.queue(Print(glyph))?;
    let w = UnicodeWidthStr::width(glyph);
    for _ in w..cell_w {
        out.queue(Print(' '))?;
    }
    Ok(())
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
