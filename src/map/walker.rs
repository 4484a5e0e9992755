// src/map/walker.rs

use crate::map::Grid;

/// One of the four unit moves a walker can attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Maps a 1..=4 roll onto a direction (1 right, 2 left, 3 down, 4 up).
    /// Any other value wraps into that range.
    pub fn from_roll(roll: u8) -> Self {
        match roll.wrapping_sub(1) % 4 {
            0 => Direction::Right,
            1 => Direction::Left,
            2 => Direction::Down,
            _ => Direction::Up,
        }
    }
}

/// A single agent of the random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    pub x: usize,
    pub y: usize,
}

impl Walker {
    pub fn new(x: usize, y: usize) -> Self {
        Walker { x, y }
    }

    /// A walker placed on the grid's center cell.
    pub fn centered(grid: &Grid) -> Self {
        Walker::new(grid.width() / 2, grid.height() / 2)
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Attempts one step. A move that would land on the border (or off the
    /// grid) is dropped and the walker stays where it is.
    ///
    /// Returns `true` if the walker moved.
    pub fn step(&mut self, direction: Direction, grid: &Grid) -> bool {
        let (x, y) = (self.x, self.y);
        let target = match direction {
            Direction::Right => x.checked_add(1).filter(|&nx| grid.interior_column(nx)).map(|nx| (nx, y)),
            Direction::Left => x.checked_sub(1).filter(|&nx| grid.interior_column(nx)).map(|nx| (nx, y)),
            Direction::Down => y.checked_add(1).filter(|&ny| grid.interior_row(ny)).map(|ny| (x, ny)),
            Direction::Up => y.checked_sub(1).filter(|&ny| grid.interior_row(ny)).map(|ny| (x, ny)),
        };

        match target {
            Some((nx, ny)) => {
                self.x = nx;
                self.y = ny;
                true
            }
            None => false,
        }
    }
}
