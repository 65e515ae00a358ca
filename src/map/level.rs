//! Level type and preset definitions
//!
//! A level type lists the tile-set files a region draws from; a preset lists
//! the candidate grid files one of which is chosen for a region instance.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tilegfx::Tile;
use tracing::{info, warn};

use super::TileIndex;
use crate::codec::parse_dt1;
use crate::error::{Error, Result};

/// Empty and `"0"` entries mark unused file slots
fn is_file_slot(name: &str) -> bool {
    !name.is_empty() && name != "0"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelType {
    pub name: String,
    pub act: u8,
    #[serde(default)]
    pub files: Vec<String>,
}

impl LevelType {
    pub fn tile_set_files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str).filter(|f| is_file_slot(f))
    }

    /// Name of the act palette this level draws with
    pub fn palette_name(&self) -> String {
        format!("act{}", self.act)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPreset {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
}

impl LevelPreset {
    pub fn candidate_files(&self) -> Vec<&str> {
        self.files.iter().map(String::as_str).filter(|f| is_file_slot(f)).collect()
    }

    /// Pick a grid file from a roll in `[0, 1]`.
    ///
    /// The roll is scaled across the candidates and rounded, so the first and
    /// last candidates each get half the weight of the ones in between.
    pub fn pick_file(&self, roll: f64) -> Result<&str> {
        let candidates = self.candidate_files();
        if candidates.is_empty() {
            return Err(Error::EmptyFileSelection);
        }
        let last = candidates.len() - 1;
        let idx = ((last as f64) * roll.clamp(0.0, 1.0)).round() as usize;
        Ok(candidates[idx.min(last)])
    }
}

/// Supplies decoded tile sets by their level-type file name
pub trait TileSetSource {
    fn load_tile_set(&self, file: &str) -> Result<Vec<Tile>>;
}

/// Reads DT1 files below a data root directory
pub struct DirTileSetSource {
    root: PathBuf,
}

impl DirTileSetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TileSetSource for DirTileSetSource {
    fn load_tile_set(&self, file: &str) -> Result<Vec<Tile>> {
        let path = self.root.join(file);
        let data = std::fs::read(&path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        parse_dt1(&data)
    }
}

/// Build the tile index for a level type, tile sets concatenated in file order.
pub fn load_tile_index(level: &LevelType, source: &impl TileSetSource) -> Result<TileIndex> {
    let mut sets = Vec::new();
    for file in level.tile_set_files() {
        sets.push(source.load_tile_set(file)?);
    }
    if sets.is_empty() {
        warn!(level = %level.name, "level type references no tile sets");
    }
    let index = TileIndex::from_tile_sets(sets);
    info!(level = %level.name, tiles = index.len(), "tile index assembled");
    Ok(index)
}
