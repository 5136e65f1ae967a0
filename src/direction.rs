use crate::direction::Direction::{Across, Down};
use std::fmt;
use std::str::FromStr;

/// The two ways a word can run through the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Fixed row, advancing column.
    Across,
    /// Fixed column, advancing row.
    Down,
}

pub(crate) static DIRECTIONS: [Direction; 2] = [Across, Down];

impl Direction {
    /// `(row, col)` step taken from one letter to the next.
    #[must_use]
    pub fn step(self) -> (usize, usize) {
        match self {
            Across => (0, 1),
            Down => (1, 0),
        }
    }

    /// The direction a crossing word must take.
    #[must_use]
    pub fn perpendicular(self) -> Direction {
        match self {
            Across => Down,
            Down => Across,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "across" | "a" => Ok(Across),
            "down" | "d" => Ok(Down),
            _ => Err(format!("Invalid direction '{s}' (expected: across, down)")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Across => "across",
            Down => "down",
        };
        write!(f, "{s}")
    }
}
