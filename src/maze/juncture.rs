use std::fmt;

/// A cell coordinate in the maze, also the vertex type of the maze graph.
///
/// Coordinates are signed so that positions just outside the grid (such as
/// `(-1, 0)`) can be expressed and are simply out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Juncture {
    pub x: i32,
    pub y: i32,
}

impl Juncture {
    pub const fn new(x: i32, y: i32) -> Self {
        Juncture { x, y }
    }

    /// The cell to the right, i.e. `(x + 1, y)`.
    pub fn right(self) -> Self {
        Juncture::new(self.x.saturating_add(1), self.y)
    }

    /// The cell below, i.e. `(x, y + 1)`.
    pub fn down(self) -> Self {
        Juncture::new(self.x, self.y.saturating_add(1))
    }

    /// Two junctures are adjacent if they differ by exactly one step along a single axis.
    pub fn is_adjacent(self, other: Juncture) -> bool {
        let dx = (self.x as i64 - other.x as i64).abs();
        let dy = (self.y as i64 - other.y as i64).abs();
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

impl From<(i32, i32)> for Juncture {
    fn from((x, y): (i32, i32)) -> Self {
        Juncture::new(x, y)
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
