use std::fmt;

/// Character used for empty and blocked cells in the serialized view.
pub const BLANK_CHAR: char = '.';

/// Contents of one grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Blocked,
    Letter(char),
}

impl Cell {
    #[must_use]
    pub fn is_letter(self) -> bool {
        matches!(self, Cell::Letter(_))
    }

    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Letter(c) => Some(c),
            Cell::Empty | Cell::Blocked => None,
        }
    }

    /// Can `c` be written here? Empty cells and matching letters accept it.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Blocked => false,
            Cell::Letter(existing) => existing == c,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Letter(c) => write!(f, "{c}"),
            Cell::Empty | Cell::Blocked => write!(f, "{BLANK_CHAR}"),
        }
    }
}
