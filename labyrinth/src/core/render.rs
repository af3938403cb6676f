//! Plain-text drawing of a grid.

use crate::core::grid::Grid;
use crate::core::types::{Coordinate, Direction};

/// Draw `grid` with `S` on the start room, `T` on the treasure and `@` on the explorer.
///
/// Top and left walls are drawn per room; the bottom edge and right edge come
/// from the last row and column.
pub fn render(grid: &Grid, explorer: Option<Coordinate>) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push('+');
            out.push_str(horizontal(wall(grid, x, y, Direction::Up)));
        }
        out.push_str("+\n");

        for x in 0..grid.width() {
            out.push(vertical(wall(grid, x, y, Direction::Left)));
            out.push(' ');
            out.push(marker(grid, Coordinate::new(x, y), explorer));
            out.push(' ');
        }
        let last = grid.width() - 1;
        out.push(vertical(wall(grid, last, y, Direction::Right)));
        out.push('\n');
    }

    let last = grid.height() - 1;
    for x in 0..grid.width() {
        out.push('+');
        out.push_str(horizontal(wall(grid, x, last, Direction::Down)));
    }
    out.push_str("+\n");
    out
}

fn horizontal(closed: bool) -> &'static str {
    if closed { "---" } else { "   " }
}

fn vertical(closed: bool) -> char {
    if closed { '|' } else { ' ' }
}

fn wall(grid: &Grid, x: usize, y: usize, side: Direction) -> bool {
    let room = grid.room(Coordinate::new(x, y));
    room.map_or(true, |room| room.has_wall(side))
}

fn marker(grid: &Grid, at: Coordinate, explorer: Option<Coordinate>) -> char {
    if explorer == Some(at) {
        return '@';
    }
    match grid.room(at) {
        Ok(room) if room.treasure => 'T',
        Ok(room) if room.start => 'S',
        _ => ' ',
    }
}
