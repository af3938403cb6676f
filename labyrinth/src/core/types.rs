//! Shared value types for the labyrinth core.
//!
//! These types cross every boundary in the workspace (generator, session,
//! wire protocol, navigator), so their serialized shapes are stable contracts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Zero-indexed cell position; `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// `x + y`; start/treasure placement keeps these distinct.
    pub const fn sum(self) -> usize {
        self.x + self.y
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A movement direction, which doubles as the name of a room side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Wire token, as used in `move/{direction}`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction '{token}' (expected up, right, down or left)")]
pub struct ParseDirectionError {
    pub token: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Case-sensitive: only the four lowercase tokens are accepted.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            _ => Err(ParseDirectionError {
                token: token.to_string(),
            }),
        }
    }
}

/// Wall visibility from inside a single room; `true` means a wall stands on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Survey {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Survey {
    pub const WALLED: Survey = Survey {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub const OPEN: Survey = Survey {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub const fn has_wall(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    pub fn set_wall(&mut self, side: Direction, present: bool) {
        let slot = match side {
            Direction::Up => &mut self.top,
            Direction::Right => &mut self.right,
            Direction::Down => &mut self.bottom,
            Direction::Left => &mut self.left,
        };
        *slot = present;
    }

    /// Sides without a wall, in `Direction::ALL` order.
    pub fn open_sides(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|side| !self.has_wall(*side))
            .collect()
    }
}
