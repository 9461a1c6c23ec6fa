use super::Juncture;

/// Dense row-major storage for one value per maze cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: u16, height: u16, value: T) -> Self {
        let data = vec![value; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Wraps existing row-major data. Returns `None` if the length doesn't match the dimensions.
    pub fn from_vec(width: u16, height: u16, data: Vec<T>) -> Option<Self> {
        (data.len() == width as usize * height as usize).then(|| Grid {
            data: data.into_boxed_slice(),
            width,
            height,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, juncture: Juncture) -> bool {
        juncture.x >= 0
            && juncture.y >= 0
            && juncture.x < self.width as i32
            && juncture.y < self.height as i32
    }

    fn ravel_index(&self, juncture: Juncture) -> Option<usize> {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        self.contains(juncture)
            .then(|| juncture.y as usize * self.width as usize + juncture.x as usize)
    }

    pub fn get(&self, juncture: Juncture) -> Option<&T> {
        self.ravel_index(juncture).map(|idx| &self.data[idx])
    }
}
