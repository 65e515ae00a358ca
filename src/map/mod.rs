pub mod grid;
pub mod index;
pub mod level;
pub mod manifest;

pub use grid::{Cell, FloorShadowRecord, LayerType, RegionGrid, WallRecord};
pub use index::TileIndex;
pub use level::{load_tile_index, DirTileSetSource, LevelPreset, LevelType, TileSetSource};
pub use manifest::RegionManifest;
