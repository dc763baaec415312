use serde::{Deserialize, Serialize};

/// Grid coordinate. Kept signed so a prospective head one step past the
/// edge is representable before the wall check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    #[must_use]
    pub fn in_bounds(self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// A turn is only legal onto the other axis; reversals and repeats
    /// share an axis with the current heading and are rejected.
    #[must_use]
    pub fn is_orthogonal_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }
}
