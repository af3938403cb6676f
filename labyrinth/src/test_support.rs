//! Test-only helpers for hand-built mazes and request-recording explorers.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::grid::Grid;
use crate::core::maze::Maze;
use crate::core::scoreboard::Summary;
use crate::core::session::Session;
use crate::core::types::{Coordinate, Direction};
use crate::navigator::{ExploreError, Explorer, Step};
use crate::protocol::{look_reply, move_reply};

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Walled grid with the listed passages carved.
pub fn maze_with_passages(
    width: usize,
    height: usize,
    passages: &[(Coordinate, Direction)],
    start: Coordinate,
    treasure: Coordinate,
) -> Maze {
    let mut grid = Grid::walled(width, height);
    for (at, direction) in passages {
        grid.carve(*at, *direction).expect("passage inside the grid");
    }
    Maze::new(grid, start, treasure).expect("valid placement")
}

/// Single open column, start at the top, treasure at the bottom.
pub fn column_corridor(height: usize) -> Maze {
    let passages: Vec<(Coordinate, Direction)> = (0..height.saturating_sub(1))
        .map(|y| (Coordinate::new(0, y), Direction::Down))
        .collect();
    maze_with_passages(
        1,
        height,
        &passages,
        Coordinate::new(0, 0),
        Coordinate::new(0, height - 1),
    )
}

/// Explorer over one fixed session that records every move it is asked to make.
pub struct SessionExplorer {
    pub session: Session,
    pub requests: Vec<Direction>,
}

impl SessionExplorer {
    pub fn new(maze: Maze) -> Self {
        Self {
            session: Session::new(maze),
            requests: Vec::new(),
        }
    }
}

impl Explorer for SessionExplorer {
    fn awake(&mut self) -> Result<Step, ExploreError> {
        look_reply(&mut self.session).into_step()
    }

    fn step(&mut self, direction: Direction) -> Result<Step, ExploreError> {
        self.requests.push(direction);
        move_reply(&mut self.session, direction).into_step()
    }

    fn done(&mut self) -> Result<Summary, ExploreError> {
        Ok(Summary {
            attempts: 0,
            mean_steps: None,
        })
    }
}
