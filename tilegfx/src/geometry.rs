//! Surface dimensions and draw offsets
//!
//! Tile headers only carry block-local extents, so the size of the surface a
//! tile decodes into and where it is drawn relative to its cell both have to
//! be derived from the blocks. Floors, shadows and walls each follow their
//! own rules.

use crate::tile::{orientation, Tile};

/// Every wall surface is this wide regardless of the tile header
pub const WALL_SURFACE_WIDTH: u32 = 160;

/// Vertical distance between a cell anchor and the top of its floor diamond
const CELL_Y_BASE: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    pub width: u32,
    pub height: u32,
    /// Added to every block y while decoding
    pub decode_y_offset: i32,
    pub draw_x: i32,
    pub draw_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallClass {
    /// Upper walls and special tiles, anchored by their topmost block
    Upper,
    Roof,
    Lower,
}

impl WallClass {
    pub fn from_orientation(orientation: i32) -> Self {
        if orientation > orientation::ROOF {
            WallClass::Lower
        } else if orientation == orientation::ROOF {
            WallClass::Roof
        } else {
            WallClass::Upper
        }
    }
}

pub fn floor_geometry(tile: &Tile) -> TileGeometry {
    TileGeometry {
        width: tile.width.unsigned_abs(),
        height: tile.height.unsigned_abs(),
        decode_y_offset: tile.min_block_y().abs(),
        draw_x: 0,
        draw_y: 0,
    }
}

pub fn shadow_geometry(tile: &Tile) -> TileGeometry {
    let min_y = tile.min_block_y();
    let max_y = tile.max_block_bottom();
    TileGeometry {
        width: tile.width.unsigned_abs(),
        height: (max_y - min_y) as u32,
        decode_y_offset: -min_y,
        draw_x: 0,
        draw_y: min_y + CELL_Y_BASE,
    }
}

/// Geometry for a wall drawn at `orientation`.
///
/// `secondary` is the north-corner companion tile, only looked up for
/// orientation 3. When it is shorter than the primary its blocks bound the
/// vertical extent instead.
pub fn wall_geometry(primary: &Tile, secondary: Option<&Tile>, orientation: i32) -> TileGeometry {
    let extent_source = match secondary {
        Some(sec) if sec.height < primary.height => sec,
        _ => primary,
    };
    let min_y = extent_source.min_block_y();
    let max_y = extent_source.max_block_bottom();
    let height = primary.height.unsigned_abs().max((max_y - min_y) as u32);

    let draw_y = match WallClass::from_orientation(orientation) {
        WallClass::Lower => CELL_Y_BASE,
        WallClass::Roof => -(primary.roof_height as i32),
        WallClass::Upper => min_y + CELL_Y_BASE,
    };

    TileGeometry {
        width: WALL_SURFACE_WIDTH,
        height,
        decode_y_offset: -min_y,
        draw_x: 0,
        draw_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Block;

    fn tile_with_blocks(height: i32, ys: &[i16]) -> Tile {
        Tile {
            width: 160,
            height,
            blocks: ys.iter().map(|&y| Block::rle(0, y, vec![])).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_floor_geometry() {
        let tile = tile_with_blocks(-80, &[-16, 0, 16]);
        let geom = floor_geometry(&tile);
        assert_eq!(geom.width, 160);
        assert_eq!(geom.height, 80);
        assert_eq!(geom.decode_y_offset, 16);
        assert_eq!((geom.draw_x, geom.draw_y), (0, 0));
    }

    #[test]
    fn test_shadow_geometry() {
        let tile = tile_with_blocks(0, &[-10, 8]);
        let geom = shadow_geometry(&tile);
        assert_eq!(geom.height, 50);
        assert_eq!(geom.decode_y_offset, 10);
        assert_eq!(geom.draw_y, 70);
    }

    #[test]
    fn test_shadow_geometry_without_blocks() {
        let geom = shadow_geometry(&tile_with_blocks(0, &[]));
        assert_eq!(geom.height, 0);
        assert_eq!(geom.draw_y, 80);
    }

    #[test]
    fn test_wall_class() {
        assert_eq!(WallClass::from_orientation(1), WallClass::Upper);
        assert_eq!(WallClass::from_orientation(13), WallClass::Upper);
        assert_eq!(WallClass::from_orientation(15), WallClass::Roof);
        assert_eq!(WallClass::from_orientation(16), WallClass::Lower);
        assert_eq!(WallClass::from_orientation(19), WallClass::Lower);
    }

    #[test]
    fn test_lower_wall_ignores_geometry() {
        let tile = tile_with_blocks(-96, &[-96, -64]);
        let geom = wall_geometry(&tile, None, 16);
        assert_eq!(geom.draw_y, 80);
        assert_eq!(geom.width, WALL_SURFACE_WIDTH);
        assert_eq!(geom.height, 96);
        assert_eq!(geom.decode_y_offset, 96);
    }

    #[test]
    fn test_roof_uses_roof_height() {
        let mut tile = tile_with_blocks(-32, &[0]);
        tile.roof_height = 48;
        let geom = wall_geometry(&tile, None, 15);
        assert_eq!(geom.draw_y, -48);
    }

    #[test]
    fn test_upper_wall_anchored_on_top_block() {
        let tile = tile_with_blocks(-128, &[-128, -96, -64]);
        let geom = wall_geometry(&tile, None, 1);
        assert_eq!(geom.draw_y, -48);
        assert_eq!(geom.height, 128);
        assert_eq!(geom.decode_y_offset, 128);
    }

    #[test]
    fn test_corner_wall_uses_shorter_secondary_extents() {
        let primary = tile_with_blocks(-64, &[-64, -32]);
        let secondary = tile_with_blocks(-160, &[-160, -128]);
        let geom = wall_geometry(&primary, Some(&secondary), 3);
        assert_eq!(geom.decode_y_offset, 160);
        assert_eq!(geom.height, 160);
        assert_eq!(geom.draw_y, -80);

        // A taller (less negative) secondary does not change the extents
        let short = tile_with_blocks(-32, &[-32]);
        let geom = wall_geometry(&primary, Some(&short), 3);
        assert_eq!(geom.decode_y_offset, 64);
        assert_eq!(geom.height, 64);
    }
}
