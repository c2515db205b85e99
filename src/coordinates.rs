//! Grid coordinates and directional movement
//!
//! Coordinates are plain values. Arithmetic on them never clamps: a step
//! past the edge of a table produces a coordinate the table simply does
//! not contain, and bounds are checked by whoever consumes the result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a cell in the grid (x = column, y = row)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Apply a relative offset (no bounds checking)
    pub fn translate(self, delta: CoordinateTranslation) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }

    /// Step one cell in `direction` (no bounds checking)
    pub fn move_in(self, direction: Direction) -> Self {
        self.translate(direction.translation())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A relative (dx, dy) offset between two coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordinateTranslation {
    pub dx: i32,
    pub dy: i32,
}

impl CoordinateTranslation {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Direction for cell selection movement
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

    /// Unit offset for one step in this direction
    pub fn translation(self) -> CoordinateTranslation {
        match self {
            Direction::Up => CoordinateTranslation::new(0, -1),
            Direction::Right => CoordinateTranslation::new(1, 0),
            Direction::Down => CoordinateTranslation::new(0, 1),
            Direction::Left => CoordinateTranslation::new(-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}
