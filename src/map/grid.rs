use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Floor,
    Wall,
    Shadow,
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayerType::Floor => "floor",
            LayerType::Wall => "wall",
            LayerType::Shadow => "shadow",
        };
        f.write_str(name)
    }
}

/// Floor or shadow reference; both always resolve at a fixed orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FloorShadowRecord {
    pub main_index: u8,
    pub sub_index: u8,
    #[serde(default)]
    pub prop1: u8,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallRecord {
    pub main_index: u8,
    pub sub_index: u8,
    pub orientation: u8,
    #[serde(default)]
    pub prop1: u8,
    #[serde(default)]
    pub hidden: bool,
}

/// Every layer record stacked on one cell, bottom layer first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub floors: Vec<FloorShadowRecord>,
    #[serde(default)]
    pub walls: Vec<WallRecord>,
    #[serde(default)]
    pub shadows: Vec<FloorShadowRecord>,
}

impl Cell {
    pub fn layer_count(&self, layer: LayerType) -> usize {
        match layer {
            LayerType::Floor => self.floors.len(),
            LayerType::Wall => self.walls.len(),
            LayerType::Shadow => self.shadows.len(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GridDef {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Row-major grid of layer records for one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridDef")]
pub struct RegionGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridDef> for RegionGrid {
    type Error = Error;

    fn try_from(def: GridDef) -> Result<Self> {
        RegionGrid::from_cells(def.width, def.height, def.cells)
    }
}

fn cell_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or_else(|| Error::InvalidManifest(format!("{width}x{height} grid is too large")))
}

impl RegionGrid {
    /// Grid of empty cells
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let count = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); count],
        })
    }

    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        if cells.len() != cell_count(width, height)? {
            return Err(Error::InvalidManifest(format!(
                "{} cells for a {width}x{height} grid",
                cells.len()
            )));
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell> {
        let idx = self.index_of(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell> {
        let idx = self.index_of(x, y)?;
        Ok(&mut self.cells[idx])
    }

    pub fn floor(&self, x: usize, y: usize, index: usize) -> Result<FloorShadowRecord> {
        self.cell(x, y)?
            .floors
            .get(index)
            .copied()
            .ok_or(Error::LayerOutOfRange { layer: LayerType::Floor, index, x, y })
    }

    pub fn wall(&self, x: usize, y: usize, index: usize) -> Result<WallRecord> {
        self.cell(x, y)?
            .walls
            .get(index)
            .copied()
            .ok_or(Error::LayerOutOfRange { layer: LayerType::Wall, index, x, y })
    }

    pub fn shadow(&self, x: usize, y: usize, index: usize) -> Result<FloorShadowRecord> {
        self.cell(x, y)?
            .shadows
            .get(index)
            .copied()
            .ok_or(Error::LayerOutOfRange { layer: LayerType::Shadow, index, x, y })
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::CellOutOfRange { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }
}
