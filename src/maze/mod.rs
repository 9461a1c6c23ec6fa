mod grid;
mod juncture;
pub mod tile;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::error::{Error, Result};
use grid::Grid;
pub use juncture::Juncture;

/// Chance that any given cell is generated as a wall.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// A rectangular maze whose cells each carry a wall flag and a traversal weight.
///
/// The wall flag of a cell does double duty: it blocks the cell itself, and it
/// is the wall segment below the cell and to the right of it. A query between
/// two neighbours therefore always resolves to the flag of the cell with the
/// smaller coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    walls: Grid<bool>,
    weights: Grid<u32>,
}

impl Maze {
    /// Creates a new maze with the given width and height and randomly placed walls.
    /// Every call draws fresh randomness, so two mazes of the same size are unrelated.
    pub fn new(width: u16, height: u16) -> Self {
        Maze::with_rng(width, height, DEFAULT_WALL_PROBABILITY, &mut get_rng(None))
    }

    /// Creates a reproducible random maze from a seed.
    pub fn seeded(width: u16, height: u16, seed: u64) -> Self {
        Maze::with_rng(width, height, DEFAULT_WALL_PROBABILITY, &mut get_rng(Some(seed)))
    }

    /// Creates a maze where each cell is independently a wall with `wall_probability`.
    /// The probability is clamped to `[0, 1]`; NaN counts as zero.
    pub fn with_rng<R: Rng>(
        width: u16,
        height: u16,
        wall_probability: f64,
        rng: &mut R,
    ) -> Self {
        let p = if wall_probability.is_nan() {
            0.0
        } else {
            wall_probability.clamp(0.0, 1.0)
        };
        let walls = (0..width as usize * height as usize)
            .map(|_| rng.random_bool(p))
            .collect::<Vec<_>>();
        let maze = Maze {
            walls: Grid::from_vec(width, height, walls)
                .unwrap_or_else(|| Grid::new(width, height, false)),
            weights: Grid::new(width, height, 1),
        };
        tracing::debug!(
            "[maze] generated {}x{} maze with {} walled cells",
            width,
            height,
            maze.wall_count()
        );
        maze
    }

    /// Creates a maze without any walls.
    pub fn open(width: u16, height: u16) -> Self {
        Maze {
            walls: Grid::new(width, height, false),
            weights: Grid::new(width, height, 1),
        }
    }

    /// Creates a maze from explicit row-major wall flags.
    pub fn from_walls(width: u16, height: u16, walls: Vec<bool>) -> Result<Self> {
        let len = walls.len();
        let walls = Grid::from_vec(width, height, walls).ok_or_else(|| {
            Error::InvalidLayout(format!(
                "expected {} wall flags for a {}x{} maze, got {}",
                width as usize * height as usize,
                width,
                height,
                len
            ))
        })?;
        Ok(Maze {
            walls,
            weights: Grid::new(width, height, 1),
        })
    }

    /// Parses a maze from text, one line per row: `#` is a wall, `.` is open.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_layout(layout: &str) -> Result<Self> {
        let rows = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(Error::InvalidLayout("layout has no cells".into()));
        }
        let too_large = |what: &str| Error::InvalidLayout(format!("too many {what}"));
        let height = u16::try_from(rows.len()).map_err(|_| too_large("rows"))?;
        let width_u16 = u16::try_from(width).map_err(|_| too_large("columns"))?;

        let mut walls = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(Error::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for c in row.chars() {
                match c {
                    '#' => walls.push(true),
                    '.' => walls.push(false),
                    other => {
                        return Err(Error::InvalidLayout(format!(
                            "unexpected character {other:?} in row {y}"
                        )));
                    }
                }
            }
        }
        Maze::from_walls(width_u16, height, walls)
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.walls.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.walls.height()
    }

    /// Checks if the maze has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Checks if the given juncture is within the bounds of the maze.
    pub fn is_in_bounds(&self, juncture: Juncture) -> bool {
        self.walls.contains(juncture)
    }

    /// All junctures of the maze, column by column.
    pub fn junctures(&self) -> impl Iterator<Item = Juncture> + use<> {
        let (width, height) = (self.width() as i32, self.height() as i32);
        (0..width).flat_map(move |x| (0..height).map(move |y| Juncture::new(x, y)))
    }

    /// Number of cells flagged as walls.
    pub fn wall_count(&self) -> usize {
        self.junctures().filter(|&j| self.is_wall_at(j)).count()
    }

    /// Reports whether the cell itself is blocked. Anything outside the maze counts as a wall.
    pub fn is_wall_at(&self, juncture: Juncture) -> bool {
        self.walls.get(juncture).copied().unwrap_or(true)
    }

    /// Reports whether the wall segment between two adjacent junctures is up.
    ///
    /// # Errors
    /// * [`Error::NotAdjacent`] if the junctures are not grid neighbours
    /// * [`Error::OutOfBounds`] if either juncture lies outside the maze
    pub fn is_wall_between(&self, j1: Juncture, j2: Juncture) -> Result<bool> {
        let owner = self.edge_owner(j1, j2)?;
        Ok(self.walls.get(owner).copied().unwrap_or(true))
    }

    /// Returns the cost of stepping between two adjacent junctures.
    ///
    /// # Errors
    /// Fails exactly like [`Maze::is_wall_between`].
    pub fn weight_between(&self, j1: Juncture, j2: Juncture) -> Result<u32> {
        let owner = self.edge_owner(j1, j2)?;
        self.weights.get(owner).copied().ok_or_else(|| self.out_of_bounds(owner))
    }

    /// The cell whose wall flag and weight describe the edge between `j1` and `j2`.
    fn edge_owner(&self, j1: Juncture, j2: Juncture) -> Result<Juncture> {
        if !j1.is_adjacent(j2) {
            return Err(Error::NotAdjacent(j1, j2));
        }
        for j in [j1, j2] {
            if !self.is_in_bounds(j) {
                return Err(self.out_of_bounds(j));
            }
        }
        // Same column: the wall below the upper cell. Same row: the wall right of the left cell.
        Ok(std::cmp::min(j1, j2))
    }

    fn out_of_bounds(&self, juncture: Juncture) -> Error {
        Error::OutOfBounds {
            juncture,
            width: self.width(),
            height: self.height(),
        }
    }
}
