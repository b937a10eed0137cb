use rand::Rng;

/// One board square, addressed in board pixel units (multiples of the
/// grid unit, so a 600x600 board with unit 25 has cells at 0, 25, 50, ...).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Center of the cell in pixel coordinates, used as particle origin.
    pub fn center(self, unit: i32) -> (f32, f32) {
        ((self.x + unit / 2) as f32, (self.y + unit / 2) as f32)
    }
}

/// Board geometry. Width and height are in pixels; `unit` is the side of
/// one cell and the movement step size.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub unit: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, unit: i32) -> Self {
        Self { width, height, unit }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn cols(&self) -> i32 {
        self.width / self.unit
    }

    pub fn rows(&self) -> i32 {
        self.height / self.unit
    }

    /// Uniformly random grid-aligned cell.
    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        let x = rng.gen_range(0..self.cols()) * self.unit;
        let y = rng.gen_range(0..self.rows()) * self.unit;
        Cell::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn bounds_are_half_open() {
        let grid = Grid::new(600, 600, 25);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(575, 575)));
        assert!(!grid.contains(Cell::new(-25, 100)));
        assert!(!grid.contains(Cell::new(600, 100)));
        assert!(!grid.contains(Cell::new(100, -1)));
        assert!(!grid.contains(Cell::new(100, 600)));
    }

    #[test]
    fn random_cells_are_aligned_and_in_bounds() {
        let grid = Grid::new(600, 600, 25);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let c = grid.random_cell(&mut rng);
            assert!(grid.contains(c));
            assert_eq!(c.x % grid.unit, 0);
            assert_eq!(c.y % grid.unit, 0);
        }
    }

    #[test]
    fn center_offsets_by_half_a_unit() {
        assert_eq!(Cell::new(100, 100).center(25), (112.0, 112.0));
    }
}
