//! Region tile rendering
//!
//! Decodes DT1 isometric tile graphics and draws the floor, shadow and wall
//! layers of a map region through per-layer surface caches.

pub mod codec;
pub mod error;
pub mod map;
pub mod renderer;

pub use codec::{parse_dt1, parse_palette, BinaryReader};
pub use error::{Error, Result};
pub use map::{
    load_tile_index, Cell, DirTileSetSource, FloorShadowRecord, LayerType, LevelPreset, LevelType,
    RegionGrid, RegionManifest, TileIndex, TileSetSource, WallRecord,
};
pub use renderer::{
    cell_to_screen, CacheStats, Canvas, Region, RenderTarget, TileCache, TileCacheRecord, TileKey,
    Tint, SHADOW_TINT,
};
pub use tilegfx as gfx;
