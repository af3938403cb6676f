//! Rectangular room grid with per-side wall state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{Coordinate, Direction, Survey};

/// One grid cell: its walls plus the start/treasure markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub walls: Survey,
    pub start: bool,
    pub treasure: bool,
}

impl Room {
    pub fn has_wall(&self, side: Direction) -> bool {
        self.walls.has_wall(side)
    }

    /// Only this room's side changes; the neighbor's mirrored side is the caller's job.
    pub fn remove_wall(&mut self, side: Direction) {
        self.walls.set_wall(side, false);
    }

    /// Only this room's side changes; the neighbor's mirrored side is the caller's job.
    pub fn add_wall(&mut self, side: Direction) {
        self.walls.set_wall(side, true);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("room {at} is outside the {width}x{height} grid")]
pub struct GridError {
    pub at: Coordinate,
    pub width: usize,
    pub height: usize,
}

/// Fixed-size grid of rooms, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rooms: Vec<Room>,
}

impl Grid {
    /// Grid with every wall standing. Starting point for the carving algorithms.
    pub fn walled(width: usize, height: usize) -> Self {
        let room = Room {
            walls: Survey::WALLED,
            ..Room::default()
        };
        Self {
            width,
            height,
            rooms: vec![room; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        at.x < self.width && at.y < self.height
    }

    pub fn room(&self, at: Coordinate) -> Result<&Room, GridError> {
        let index = self.index(at)?;
        Ok(&self.rooms[index])
    }

    pub fn room_mut(&mut self, at: Coordinate) -> Result<&mut Room, GridError> {
        let index = self.index(at)?;
        Ok(&mut self.rooms[index])
    }

    /// Adjacent coordinate in `direction`, or `None` past the grid edge.
    pub fn neighbor(&self, at: Coordinate, direction: Direction) -> Option<Coordinate> {
        let next = match direction {
            Direction::Up => Coordinate::new(at.x, at.y.checked_sub(1)?),
            Direction::Right => Coordinate::new(at.x + 1, at.y),
            Direction::Down => Coordinate::new(at.x, at.y + 1),
            Direction::Left => Coordinate::new(at.x.checked_sub(1)?, at.y),
        };
        self.contains(next).then_some(next)
    }

    /// Open the passage between `at` and its neighbor in `direction`, on both sides.
    ///
    /// Returns the neighbor's coordinate.
    pub fn carve(&mut self, at: Coordinate, direction: Direction) -> Result<Coordinate, GridError> {
        let next = self.neighbor(at, direction).ok_or(GridError {
            at,
            width: self.width,
            height: self.height,
        })?;
        self.room_mut(at)?.remove_wall(direction);
        self.room_mut(next)?.remove_wall(direction.opposite());
        Ok(next)
    }

    /// Every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let width = self.width;
        (0..self.width * self.height).map(move |i| Coordinate::new(i % width, i / width))
    }

    fn index(&self, at: Coordinate) -> Result<usize, GridError> {
        if !self.contains(at) {
            return Err(GridError {
                at,
                width: self.width,
                height: self.height,
            });
        }
        Ok(at.y * self.width + at.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_lookup_is_bounds_checked() {
        let grid = Grid::walled(3, 2);
        assert!(grid.room(Coordinate::new(2, 1)).is_ok());
        let err = grid.room(Coordinate::new(3, 0)).unwrap_err();
        assert_eq!(err.at, Coordinate::new(3, 0));
        assert!(grid.room(Coordinate::new(0, 2)).is_err());
    }

    #[test]
    fn wall_edits_touch_a_single_side() {
        let mut grid = Grid::walled(2, 2);
        let room = grid.room_mut(Coordinate::new(0, 0)).expect("room");
        room.remove_wall(Direction::Right);
        assert!(!room.has_wall(Direction::Right));
        assert!(room.has_wall(Direction::Down));

        let neighbor = grid.room(Coordinate::new(1, 0)).expect("neighbor");
        assert!(neighbor.has_wall(Direction::Left));

        let room = grid.room_mut(Coordinate::new(0, 0)).expect("room");
        room.add_wall(Direction::Right);
        assert_eq!(room.walls, Survey::WALLED);
    }

    #[test]
    fn carve_opens_both_sides() {
        let mut grid = Grid::walled(2, 2);
        let next = grid.carve(Coordinate::new(1, 1), Direction::Up).expect("carve");
        assert_eq!(next, Coordinate::new(1, 0));
        assert!(!grid.room(Coordinate::new(1, 1)).unwrap().has_wall(Direction::Up));
        assert!(!grid.room(Coordinate::new(1, 0)).unwrap().has_wall(Direction::Down));
    }

    #[test]
    fn carve_refuses_the_perimeter() {
        let mut grid = Grid::walled(2, 2);
        assert!(grid.carve(Coordinate::new(0, 0), Direction::Left).is_err());
        assert!(grid.carve(Coordinate::new(1, 1), Direction::Down).is_err());
        assert_eq!(grid, Grid::walled(2, 2));
    }

    #[test]
    fn coordinates_are_row_major() {
        let grid = Grid::walled(2, 2);
        let coords: Vec<Coordinate> = grid.coordinates().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
            ]
        );
    }
}
