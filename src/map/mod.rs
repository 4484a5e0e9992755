// src/map/mod.rs
pub mod grid;
pub mod walker;

pub use grid::{Cell, Grid};
pub use walker::{Direction, Walker};
