//! Minimal 2-D integer coordinates
//!
//! Just enough geometry to drive grid searches: compass directions,
//! single-step neighbours and Manhattan distance. `y` grows downward, so
//! `row == y` and `column == x`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WayfindError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn inverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    pub fn is_cardinal(self) -> bool {
        Self::CARDINAL.contains(&self)
    }

    fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const ZERO: Coordinate = Coordinate { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn from_row_column(row: i64, column: i64) -> Self {
        Self { x: column, y: row }
    }

    pub fn row(&self) -> i64 {
        self.y
    }

    pub fn column(&self) -> i64 {
        self.x
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn neighbor(&self, direction: Direction) -> Coordinate {
        let (dx, dy) = direction.offset();
        Coordinate::new(self.x + dx, self.y + dy)
    }

    pub fn neighbors(&self, directions: &[Direction]) -> Vec<Coordinate> {
        directions.iter().map(|d| self.neighbor(*d)).collect()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = WayfindError;

    /// Parse `x,y`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| WayfindError::invalid_value("coordinate", s))?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| WayfindError::invalid_value("coordinate", s))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| WayfindError::invalid_value("coordinate", s))?;
        Ok(Coordinate::new(x, y))
    }
}
