//! Maze generation: fully walled grid, one carving pass, then start/treasure placement.
//!
//! All randomness comes from the caller's generator so a seeded source
//! reproduces the same maze.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::grid::{Grid, GridError};
use crate::core::maze::{Maze, PlacementError};
use crate::core::types::{Coordinate, Direction};

/// Carving strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Binary tree whose per-cell choice may also carve both ways, adding loops.
    BinaryTreeWithHoles,
    /// Spanning tree: every cell opens either south or east.
    BinaryTree,
    /// Frontier-based carve, always extending the newest cell (recursive backtracker).
    GrowingTree,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BinaryTreeWithHoles,
        Algorithm::BinaryTree,
        Algorithm::GrowingTree,
    ];

    /// Weighted 3:1:1 pick across holes, binary tree, growing tree.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..5) {
            0..=2 => Algorithm::BinaryTreeWithHoles,
            3 => Algorithm::BinaryTree,
            _ => Algorithm::GrowingTree,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::BinaryTreeWithHoles => "binary_tree_with_holes",
            Algorithm::BinaryTree => "binary_tree",
            Algorithm::GrowingTree => "growing_tree",
        }
    }

    /// True when the carve never introduces a cycle.
    pub const fn is_perfect(self) -> bool {
        !matches!(self, Algorithm::BinaryTreeWithHoles)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected binary_tree_with_holes, binary_tree or growing_tree)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("a {width}x{height} grid can't hold distinct start and treasure rooms")]
    TooSmall { width: usize, height: usize },
    #[error("a {width}x{height} grid has more rooms than fit in memory")]
    TooLarge { width: usize, height: usize },
    #[error("carve failed: {0}")]
    Carve(#[from] GridError),
    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),
}

/// Build a maze with `algorithm`, or a weighted random pick when `None`.
pub fn generate_maze<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    algorithm: Option<Algorithm>,
    rng: &mut R,
) -> Result<(Maze, Algorithm), GenerateError> {
    let rooms = width
        .checked_mul(height)
        .ok_or(GenerateError::TooLarge { width, height })?;
    if rooms < 2 {
        return Err(GenerateError::TooSmall { width, height });
    }
    let algorithm = algorithm.unwrap_or_else(|| Algorithm::pick(rng));
    let grid = carve(Grid::walled(width, height), algorithm, rng)?;
    let (start, treasure) = pick_start_and_treasure(width, height, rng);
    let maze = Maze::new(grid, start, treasure)?;
    Ok((maze, algorithm))
}

/// Run one carving pass over `grid`.
pub fn carve<R: Rng + ?Sized>(
    mut grid: Grid,
    algorithm: Algorithm,
    rng: &mut R,
) -> Result<Grid, GridError> {
    match algorithm {
        Algorithm::BinaryTreeWithHoles => carve_binary_tree(&mut grid, rng, true)?,
        Algorithm::BinaryTree => carve_binary_tree(&mut grid, rng, false)?,
        Algorithm::GrowingTree => carve_growing_tree(&mut grid, rng)?,
    }
    Ok(grid)
}

fn carve_binary_tree<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    holes: bool,
) -> Result<(), GridError> {
    const EAST: &[Direction] = &[Direction::Right];
    const SOUTH: &[Direction] = &[Direction::Down];
    const BOTH: &[Direction] = &[Direction::Right, Direction::Down];

    let choices = if holes { 3 } else { 2 };
    let (last_x, last_y) = (grid.width() - 1, grid.height() - 1);
    for at in grid.coordinates() {
        let carves = match (at.x == last_x, at.y == last_y) {
            (true, true) => continue,
            (true, false) => SOUTH,
            (false, true) => EAST,
            (false, false) => match rng.gen_range(0..choices) {
                0 => EAST,
                1 => SOUTH,
                _ => BOTH,
            },
        };
        for &direction in carves {
            grid.carve(at, direction)?;
        }
    }
    Ok(())
}

fn carve_growing_tree<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
    let width = grid.width();
    let index = |at: Coordinate| at.y * width + at.x;
    let mut visited = vec![false; width * grid.height()];

    let seed = Coordinate::new(rng.gen_range(0..width), rng.gen_range(0..grid.height()));
    visited[index(seed)] = true;
    let mut frontier = vec![seed];

    while let Some(&active) = frontier.last() {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        let unvisited = directions.into_iter().find_map(|direction| {
            grid.neighbor(active, direction)
                .filter(|next| !visited[index(*next)])
                .map(|_| direction)
        });
        match unvisited {
            Some(direction) => {
                let next = grid.carve(active, direction)?;
                visited[index(next)] = true;
                frontier.push(next);
            }
            None => {
                frontier.pop();
            }
        }
    }
    Ok(())
}

/// Draw treasure then start, resampling start while both share a coordinate sum.
///
/// Rooms in the last row and column never host either marker. On grids too
/// narrow for that restriction to leave two rooms, the whole grid is used.
pub fn pick_start_and_treasure<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> (Coordinate, Coordinate) {
    let (span_x, span_y) = placement_span(width, height);
    let mut draw = || Coordinate::new(rng.gen_range(0..span_x), rng.gen_range(0..span_y));

    let treasure = draw();
    let mut start = draw();
    while start.sum() == treasure.sum() {
        start = draw();
    }
    (start, treasure)
}

fn placement_span(width: usize, height: usize) -> (usize, usize) {
    let span_x = width.saturating_sub(1).max(1);
    let span_y = height.saturating_sub(1).max(1);
    if span_x * span_y >= 2 {
        (span_x, span_y)
    } else {
        (width, height)
    }
}
