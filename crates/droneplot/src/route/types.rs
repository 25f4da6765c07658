use std::fmt;

/// Width and height of the plotting grid.
pub const GRID_SIZE: usize = 12;

/// A position in the external coordinate system.
///
/// Both axes are 1-based, `x` grows to the right and `y` grows upwards. This is the
/// coordinate system used by route files and by everything printed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Convert to internal grid coordinates.
    ///
    /// `col = x - 1`, `row = 12 - y`. Returns `None` when the position lies outside
    /// the grid on either axis.
    pub fn to_cell(self) -> Option<Cell> {
        let size = GRID_SIZE as i64;
        let col = self.x.checked_sub(1)?;
        let row = size.checked_sub(self.y)?;
        if (0..size).contains(&col) && (0..size).contains(&row) {
            Some(Cell {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// Step one unit in the given direction.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Internal grid coordinate: 0-based, row 0 is the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Inverse of [`Position::to_cell`].
    #[cfg(test)]
    pub fn to_position(self) -> Position {
        Position {
            x: self.col as i64 + 1,
            y: GRID_SIZE as i64 - self.row as i64,
        }
    }
}

/// Cardinal direction for a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Parse a route file token. Matching is exact and case-sensitive.
    pub fn from_symbol(token: &str) -> Option<Direction> {
        match token {
            "N" => Some(Direction::North),
            "E" => Some(Direction::East),
            "S" => Some(Direction::South),
            "W" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Unit displacement in external coordinates (y grows upwards).
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed route file: where the drone starts and the raw move tokens.
///
/// Tokens stay unparsed here. An unknown token invalidates the route during
/// plotting rather than making the file malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub start: Position,
    pub instructions: Vec<String>,
}

impl Route {
    pub fn new(start: Position, instructions: Vec<String>) -> Self {
        Self {
            start,
            instructions,
        }
    }
}
