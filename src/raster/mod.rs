// src/raster/mod.rs
//! Adapter between finished grids and on-disk bitmaps.

use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::DungeonError;
use crate::map::Grid;

pub const FLOOR_PIXEL: u8 = 255;
pub const EMPTY_PIXEL: u8 = 0;

/// Container format used when saving a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Bmp => "bmp",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Turns grids into two-valued grayscale bitmaps: floor is white, everything else black.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapRasterizer {
    format: OutputFormat,
}

impl MapRasterizer {
    pub fn new(format: OutputFormat) -> Self {
        MapRasterizer { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn rasterize(&self, grid: &Grid) -> GrayImage {
        GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
            if grid.is_floor(x as usize, y as usize) {
                Luma([FLOOR_PIXEL])
            } else {
                Luma([EMPTY_PIXEL])
            }
        })
    }

    /// Rasterizes `grid` and writes it to `path` in this rasterizer's format.
    pub fn save(&self, grid: &Grid, path: &Path) -> Result<(), DungeonError> {
        self.rasterize(grid)
            .save_with_format(path, self.format.image_format())
            .map_err(|source| DungeonError::ArtifactWrite {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("wrote {}x{} map to {}", grid.width(), grid.height(), path.display());
        Ok(())
    }
}
