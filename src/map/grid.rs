// src/map/grid.rs

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Floor,
}

impl Cell {
    pub fn is_floor(self) -> bool {
        self == Cell::Floor
    }
}

/// A `width` x `height` occupancy map, stored row-major.
///
/// Cells start out `Empty` and can only ever be turned into `Floor`. The
/// floor count is kept alongside the cells so coverage is O(1) to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    floor_cells: usize,
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            floor_cells: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, border included.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns the cell at (x, y), or `None` when the position lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn is_floor(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_floor)
    }

    /// True if column `x` is not on the left or right border.
    pub fn interior_column(&self, x: usize) -> bool {
        x > 0 && x + 1 < self.width
    }

    /// True if row `y` is not on the top or bottom border.
    pub fn interior_row(&self, y: usize) -> bool {
        y > 0 && y + 1 < self.height
    }

    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        self.interior_column(x) && self.interior_row(y)
    }

    /// Number of cells outside the border ring.
    pub fn interior_area(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }

    /// Marks an interior cell as floor.
    ///
    /// Returns `true` only when the cell actually changed. Border cells and
    /// cells that are already floor are left untouched.
    pub fn set_floor(&mut self, x: usize, y: usize) -> bool {
        if !self.is_interior(x, y) {
            return false;
        }
        let Some(i) = self.index(x, y) else {
            return false;
        };
        if self.cells[i].is_floor() {
            return false;
        }
        self.cells[i] = Cell::Floor;
        self.floor_cells += 1;
        true
    }

    pub fn floor_count(&self) -> usize {
        self.floor_cells
    }

    /// Fraction of all cells (border included) that are floor.
    pub fn coverage(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.floor_cells as f64 / self.area() as f64
    }

    /// Iterates over every cell as `(x, y, cell)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % width, i / width, *cell))
    }

    /// True if no cell on the outer ring has been marked.
    pub fn border_is_empty(&self) -> bool {
        self.cells()
            .filter(|&(x, y, _)| !self.is_interior(x, y))
            .all(|(_, _, cell)| !cell.is_floor())
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}
