//! A carved grid together with its start and treasure rooms.

use std::fmt;

use thiserror::Error;

use crate::core::grid::{Grid, GridError};
use crate::core::render::render;
use crate::core::types::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("can't start in the treasure room {0}")]
    StartOnTreasure(Coordinate),
    #[error("can't put the treasure in the start room {0}")]
    TreasureOnStart(Coordinate),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Mark `at` as the start room.
pub fn set_start(grid: &mut Grid, at: Coordinate) -> Result<(), PlacementError> {
    let room = grid.room_mut(at)?;
    if room.treasure {
        return Err(PlacementError::StartOnTreasure(at));
    }
    room.start = true;
    Ok(())
}

/// Mark `at` as the treasure room.
pub fn set_treasure(grid: &mut Grid, at: Coordinate) -> Result<(), PlacementError> {
    let room = grid.room_mut(at)?;
    if room.start {
        return Err(PlacementError::TreasureOnStart(at));
    }
    room.treasure = true;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Coordinate,
    treasure: Coordinate,
}

impl Maze {
    /// Place the treasure, then the start, on a carved grid.
    pub fn new(
        mut grid: Grid,
        start: Coordinate,
        treasure: Coordinate,
    ) -> Result<Self, PlacementError> {
        set_treasure(&mut grid, treasure)?;
        set_start(&mut grid, start)?;
        Ok(Self {
            grid,
            start,
            treasure,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn treasure(&self) -> Coordinate {
        self.treasure
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.grid, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_treasure_cannot_share_a_room() {
        let at = Coordinate::new(0, 0);
        let err = Maze::new(Grid::walled(2, 2), at, at).unwrap_err();
        assert_eq!(err, PlacementError::StartOnTreasure(at));

        let mut grid = Grid::walled(2, 2);
        set_start(&mut grid, at).expect("start");
        assert_eq!(
            set_treasure(&mut grid, at),
            Err(PlacementError::TreasureOnStart(at))
        );
    }

    #[test]
    fn placement_outside_the_grid_fails() {
        let err = Maze::new(
            Grid::walled(2, 2),
            Coordinate::new(0, 0),
            Coordinate::new(5, 5),
        )
        .unwrap_err();
        assert!(matches!(err, PlacementError::Grid(_)));
    }

    #[test]
    fn new_marks_both_rooms() {
        let maze = Maze::new(
            Grid::walled(3, 1),
            Coordinate::new(0, 0),
            Coordinate::new(2, 0),
        )
        .expect("maze");
        assert!(maze.grid().room(maze.start()).unwrap().start);
        assert!(maze.grid().room(maze.treasure()).unwrap().treasure);
        assert!(!maze.grid().room(Coordinate::new(1, 0)).unwrap().start);
    }
}
