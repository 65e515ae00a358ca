//! Cache entry generation: tile lookup, geometry, then block decoding

use tilegfx::{
    decode_blocks, floor_geometry, orientation, shadow_geometry, wall_geometry, Block, Palette, Tile,
    TileGeometry, TileImage,
};
use tracing::{debug, trace};

use super::cache::TileCacheRecord;
use crate::error::{Error, Result};
use crate::map::{FloorShadowRecord, TileIndex, WallRecord};

fn require(tiles: &TileIndex, main_index: i32, sub_index: i32, orientation: i32) -> Result<&Tile> {
    tiles
        .find(main_index, sub_index, orientation)
        .ok_or(Error::TileNotFound { main_index, sub_index, orientation })
}

fn decode_record(layers: &[&[Block]], palette: &Palette, geom: TileGeometry) -> Result<TileCacheRecord> {
    let mut image = TileImage::try_new(geom.width, geom.height)?;
    for blocks in layers {
        decode_blocks(blocks, palette, geom.decode_y_offset, &mut image)?;
    }
    Ok(TileCacheRecord { image, x_offset: geom.draw_x, y_offset: geom.draw_y })
}

/// Floors always resolve at orientation 0; a missing tile is an error.
pub fn generate_floor(tiles: &TileIndex, palette: &Palette, record: &FloorShadowRecord) -> Result<TileCacheRecord> {
    let tile = require(tiles, record.main_index as i32, record.sub_index as i32, orientation::FLOOR)?;
    let geom = floor_geometry(tile);
    debug!(main = record.main_index, sub = record.sub_index, width = geom.width, height = geom.height, "floor surface generated");
    decode_record(&[tile.blocks.as_slice()], palette, geom)
}

/// Shadows resolve at orientation 13. A missing tile means the cell casts no shadow.
pub fn generate_shadow(
    tiles: &TileIndex,
    palette: &Palette,
    record: &FloorShadowRecord,
) -> Result<Option<TileCacheRecord>> {
    let Some(tile) = tiles.find(record.main_index as i32, record.sub_index as i32, orientation::SHADOW) else {
        trace!(main = record.main_index, sub = record.sub_index, "no shadow tile");
        return Ok(None);
    };
    let geom = shadow_geometry(tile);
    debug!(main = record.main_index, sub = record.sub_index, height = geom.height, "shadow surface generated");
    decode_record(&[tile.blocks.as_slice()], palette, geom).map(Some)
}

/// Walls resolve at their own orientation. North corner walls (3) are drawn
/// together with their left half (4) when the tile set has one.
pub fn generate_wall(tiles: &TileIndex, palette: &Palette, record: &WallRecord) -> Result<TileCacheRecord> {
    let (main, sub, orient) = (record.main_index as i32, record.sub_index as i32, record.orientation as i32);
    let primary = require(tiles, main, sub, orient)?;
    let secondary = if orient == orientation::NORTH_CORNER_RIGHT {
        tiles.find(main, sub, orientation::NORTH_CORNER_LEFT)
    } else {
        None
    };

    let geom = wall_geometry(primary, secondary, orient);
    debug!(
        main = record.main_index,
        sub = record.sub_index,
        orientation = record.orientation,
        height = geom.height,
        composite = secondary.is_some(),
        "wall surface generated"
    );
    match secondary {
        Some(sec) => decode_record(&[primary.blocks.as_slice(), sec.blocks.as_slice()], palette, geom),
        None => decode_record(&[primary.blocks.as_slice()], palette, geom),
    }
}
