use std::{collections::HashSet, fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use super::{Juncture, Maze};

/// What a single maze cell looks like when drawn in the terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    /// A blocked cell.
    Wall,
    /// An open cell, not part of the route.
    Open,
    /// A cell on the solution route.
    Route,
    /// The starting cell of the search.
    Start,
    /// The cell the search is trying to reach.
    End,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const TILE_WIDTH: usize = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "██".with(Color::DarkGrey),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Route => "* ".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::End => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Picks the tile for a juncture given the endpoints and the cells of a route.
pub fn tile_at(
    maze: &Maze,
    juncture: Juncture,
    start: Juncture,
    end: Juncture,
    route: &HashSet<Juncture>,
) -> Tile {
    if juncture == start {
        Tile::Start
    } else if juncture == end {
        Tile::End
    } else if maze.is_wall_at(juncture) {
        Tile::Wall
    } else if route.contains(&juncture) {
        Tile::Route
    } else {
        Tile::Open
    }
}

/// Draws the maze row by row, marking the route and its endpoints.
pub fn draw<W: Write>(
    out: &mut W,
    maze: &Maze,
    start: Juncture,
    end: Juncture,
    path: &[Juncture],
) -> std::io::Result<()> {
    let route = path.iter().copied().collect::<HashSet<_>>();
    for y in 0..maze.height() as i32 {
        for x in 0..maze.width() as i32 {
            let tile = tile_at(maze, Juncture::new(x, y), start, end, &route);
            queue!(out, style::Print(tile))?;
        }
        queue!(out, style::Print("\n"))?;
    }
    out.flush()
}
