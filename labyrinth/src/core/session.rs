//! Explorer position and movement rules for a single solve attempt.

use thiserror::Error;

use crate::core::maze::Maze;
use crate::core::render::render;
use crate::core::types::{Coordinate, Direction, Survey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Victorious,
}

/// What the explorer sees after looking around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Look {
    Survey(Survey),
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("can't walk through the {0} wall")]
    WallBlocked(Direction),
    #[error("moving {direction} from {from} leaves the labyrinth")]
    OutOfBounds { from: Coordinate, direction: Direction },
    #[error("the treasure has already been found")]
    AlreadyFinished,
}

#[derive(Debug, Clone)]
pub struct Session {
    maze: Maze,
    explorer: Coordinate,
    steps_taken: u32,
    state: SessionState,
}

impl Session {
    /// Explorer wakes up in the start room.
    pub fn new(maze: Maze) -> Self {
        let explorer = maze.start();
        Self {
            maze,
            explorer,
            steps_taken: 0,
            state: SessionState::Active,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn explorer(&self) -> Coordinate {
        self.explorer
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Walls of the explorer's room, or victory once standing on the treasure.
    pub fn survey(&mut self) -> Look {
        if self.explorer == self.maze.treasure() {
            self.state = SessionState::Victorious;
            return Look::Victory;
        }
        match self.maze.grid().room(self.explorer) {
            Ok(room) => Look::Survey(room.walls),
            // The explorer only ever lands on in-bounds rooms.
            Err(_) => Look::Survey(Survey::WALLED),
        }
    }

    /// Step one room in `direction`.
    ///
    /// Never reports victory itself; the caller surveys afterwards to find out.
    pub fn move_explorer(&mut self, direction: Direction) -> Result<(), MoveError> {
        if self.state == SessionState::Victorious {
            return Err(MoveError::AlreadyFinished);
        }
        let survey = match self.survey() {
            Look::Victory => return Err(MoveError::AlreadyFinished),
            Look::Survey(survey) => survey,
        };
        if survey.has_wall(direction) {
            return Err(MoveError::WallBlocked(direction));
        }
        let Some(destination) = self.maze.grid().neighbor(self.explorer, direction) else {
            return Err(MoveError::OutOfBounds {
                from: self.explorer,
                direction,
            });
        };
        self.explorer = destination;
        self.steps_taken += 1;
        Ok(())
    }

    /// The maze with the explorer's position marked.
    pub fn render(&self) -> String {
        render(self.maze.grid(), Some(self.explorer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Grid;

    /// 3x1 grid: first two rooms joined, middle room missing its top perimeter wall.
    fn lopsided_corridor() -> Session {
        let (first, middle) = (Coordinate::new(0, 0), Coordinate::new(1, 0));
        let mut grid = Grid::walled(3, 1);
        grid.carve(first, Direction::Right).expect("carve");
        grid.room_mut(middle).expect("room").remove_wall(Direction::Up);
        let maze = Maze::new(grid, Coordinate::new(0, 0), Coordinate::new(2, 0)).expect("maze");
        Session::new(maze)
    }

    /// 2x1 grid joined in the middle: start on the left, treasure on the right.
    fn two_rooms() -> Session {
        let (start, treasure) = (Coordinate::new(0, 0), Coordinate::new(1, 0));
        let mut grid = Grid::walled(2, 1);
        grid.carve(start, Direction::Right).expect("carve");
        Session::new(Maze::new(grid, start, treasure).expect("maze"))
    }

    #[test]
    fn starts_active_at_the_start_room() {
        let mut session = lopsided_corridor();
        assert_eq!(session.explorer(), Coordinate::new(0, 0));
        assert_eq!(session.state(), SessionState::Active);
        assert!(matches!(session.survey(), Look::Survey(_)));
    }

    #[test]
    fn walled_move_changes_nothing() {
        let mut session = lopsided_corridor();
        assert_eq!(
            session.move_explorer(Direction::Down),
            Err(MoveError::WallBlocked(Direction::Down))
        );
        assert_eq!(session.explorer(), Coordinate::new(0, 0));
        assert_eq!(session.steps_taken(), 0);
    }

    #[test]
    fn open_perimeter_side_is_out_of_bounds() {
        let mut session = lopsided_corridor();
        session.move_explorer(Direction::Right).expect("step");
        assert_eq!(session.steps_taken(), 1);

        let err = session.move_explorer(Direction::Up).unwrap_err();
        assert_eq!(
            err,
            MoveError::OutOfBounds {
                from: Coordinate::new(1, 0),
                direction: Direction::Up,
            }
        );
        assert_eq!(session.explorer(), Coordinate::new(1, 0));
        assert_eq!(session.steps_taken(), 1);
    }

    #[test]
    fn victory_is_only_seen_through_survey() {
        let mut session = two_rooms();

        assert_eq!(session.move_explorer(Direction::Right), Ok(()));
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.survey(), Look::Victory);
        assert_eq!(session.state(), SessionState::Victorious);

        assert_eq!(
            session.move_explorer(Direction::Left),
            Err(MoveError::AlreadyFinished)
        );
        assert_eq!(session.steps_taken(), 1);
        assert_eq!(session.explorer(), Coordinate::new(1, 0));
    }

    #[test]
    fn move_from_unsurveyed_treasure_is_already_finished() {
        let mut session = two_rooms();
        session.move_explorer(Direction::Right).expect("step");

        assert_eq!(
            session.move_explorer(Direction::Left),
            Err(MoveError::AlreadyFinished)
        );
        assert_eq!(session.state(), SessionState::Victorious);
        assert_eq!(session.steps_taken(), 1);
    }

    #[test]
    fn render_follows_the_explorer() {
        let mut session = two_rooms();
        assert_eq!(session.render(), "+---+---+\n| @   T |\n+---+---+\n");

        session.move_explorer(Direction::Right).expect("step");
        assert_eq!(session.render(), "+---+---+\n| S   @ |\n+---+---+\n");
    }
}
