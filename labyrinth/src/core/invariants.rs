//! Structural checks a generated maze must pass.

use std::collections::VecDeque;

use crate::core::grid::Grid;
use crate::core::maze::Maze;
use crate::core::types::{Coordinate, Direction};

/// Check maze invariants:
/// - Exactly one start room and one treasure room, in different rooms
/// - Wall symmetry on every shared edge
/// - Perimeter sealed
/// - Treasure reachable from the start
pub fn validate_invariants(maze: &Maze) -> Vec<String> {
    let grid = maze.grid();
    let mut errors = Vec::new();

    let starts: Vec<Coordinate> = grid
        .coordinates()
        .filter(|at| grid.room(*at).is_ok_and(|room| room.start))
        .collect();
    let treasures: Vec<Coordinate> = grid
        .coordinates()
        .filter(|at| grid.room(*at).is_ok_and(|room| room.treasure))
        .collect();
    if starts != [maze.start()] {
        errors.push(format!(
            "expected a single start room at {}, found {:?}",
            maze.start(),
            starts
        ));
    }
    if treasures != [maze.treasure()] {
        errors.push(format!(
            "expected a single treasure room at {}, found {:?}",
            maze.treasure(),
            treasures
        ));
    }
    if maze.start() == maze.treasure() {
        errors.push(format!("start and treasure share room {}", maze.start()));
    }

    errors.extend(asymmetric_walls(grid));
    errors.extend(perimeter_gaps(grid));

    if shortest_path(grid, maze.start(), maze.treasure()).is_none() {
        errors.push(format!(
            "treasure {} unreachable from start {}",
            maze.treasure(),
            maze.start()
        ));
    }
    errors
}

/// Shared edges whose two sides disagree about the wall.
pub fn asymmetric_walls(grid: &Grid) -> Vec<String> {
    let mut errors = Vec::new();
    for at in grid.coordinates() {
        for side in [Direction::Right, Direction::Down] {
            let Some(next) = grid.neighbor(at, side) else {
                continue;
            };
            let (Ok(here), Ok(there)) = (grid.room(at), grid.room(next)) else {
                continue;
            };
            if here.has_wall(side) != there.has_wall(side.opposite()) {
                errors.push(format!("{at}/{next}: {side} wall mismatch"));
            }
        }
    }
    errors
}

fn perimeter_gaps(grid: &Grid) -> Vec<String> {
    let mut errors = Vec::new();
    for at in grid.coordinates() {
        for side in Direction::ALL {
            if grid.neighbor(at, side).is_some() {
                continue;
            }
            if grid.room(at).is_ok_and(|room| !room.has_wall(side)) {
                errors.push(format!("{at}: open {side} side on the perimeter"));
            }
        }
    }
    errors
}

/// Number of moves on the shortest wall-free route, via breadth-first search.
pub fn shortest_path(grid: &Grid, from: Coordinate, to: Coordinate) -> Option<usize> {
    if !grid.contains(from) || !grid.contains(to) {
        return None;
    }
    let width = grid.width();
    let index = |at: Coordinate| at.y * width + at.x;
    let mut distance = vec![None; width * grid.height()];
    distance[index(from)] = Some(0);
    let mut queue = VecDeque::from([from]);

    while let Some(at) = queue.pop_front() {
        let here = distance[index(at)]?;
        if at == to {
            return Some(here);
        }
        for side in Direction::ALL {
            let open = grid.room(at).is_ok_and(|room| !room.has_wall(side));
            if !open {
                continue;
            }
            let Some(next) = grid.neighbor(at, side) else {
                continue;
            };
            if distance[index(next)].is_none() {
                distance[index(next)] = Some(here + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Count of open interior edges; a connected grid with `width * height - 1` of them is a tree.
pub fn passage_count(grid: &Grid) -> usize {
    grid.coordinates()
        .map(|at| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .filter(|side| {
                    grid.neighbor(at, *side).is_some()
                        && grid.room(at).is_ok_and(|room| !room.has_wall(*side))
                })
                .count()
        })
        .sum()
}
