use bitflags::bitflags;

/// Well-known orientation values
pub mod orientation {
    pub const FLOOR: i32 = 0;
    /// Right half of a north corner wall; drawn together with `NORTH_CORNER_LEFT`
    pub const NORTH_CORNER_RIGHT: i32 = 3;
    pub const NORTH_CORNER_LEFT: i32 = 4;
    pub const SHADOW: i32 = 13;
    pub const ROOF: i32 = 15;
    /// First lower-wall orientation; everything above is a lower wall
    pub const LOWER_WALL: i32 = 16;
}

bitflags! {
    /// Footstep/material classes stored in each tile header
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MaterialFlags: u16 {
        const OTHER = 0x0001;
        const WATER = 0x0002;
        const WOOD_OBJECT = 0x0004;
        const INSIDE_STONE = 0x0008;
        const OUTSIDE_STONE = 0x0010;
        const DIRT = 0x0020;
        const SAND = 0x0040;
        const WOOD = 0x0080;
        const LAVA = 0x0100;
        const SNOW = 0x0400;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    /// Fixed 32x15 diamond, 256 bytes
    Isometric,
    /// Run-length encoded (skip, count) pairs
    Rle,
}

impl BlockFormat {
    pub fn from_raw(v: i16) -> Self {
        if v == 1 {
            BlockFormat::Isometric
        } else {
            BlockFormat::Rle
        }
    }
}

/// A compressed pixel fragment positioned inside its tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub x: i16,
    pub y: i16,
    pub grid_x: u8,
    pub grid_y: u8,
    pub format: BlockFormat,
    /// Declared payload length; drives the RLE decoder
    pub length: i32,
    pub encoded_data: Vec<u8>,
}

impl Block {
    pub fn isometric(x: i16, y: i16, encoded_data: Vec<u8>) -> Self {
        Self {
            x,
            y,
            grid_x: 0,
            grid_y: 0,
            format: BlockFormat::Isometric,
            length: encoded_data.len() as i32,
            encoded_data,
        }
    }

    pub fn rle(x: i16, y: i16, encoded_data: Vec<u8>) -> Self {
        Self {
            x,
            y,
            grid_x: 0,
            grid_y: 0,
            format: BlockFormat::Rle,
            length: encoded_data.len() as i32,
            encoded_data,
        }
    }
}

/// A single decodable tile graphic
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tile {
    pub direction: i32,
    pub roof_height: i16,
    pub material: MaterialFlags,
    /// Negative for walls that extend upward from their anchor
    pub height: i32,
    pub width: i32,
    pub orientation: i32,
    pub main_index: i32,
    pub sub_index: i32,
    pub rarity: i32,
    pub sub_tile_flags: [u8; 25],
    pub blocks: Vec<Block>,
}

impl Tile {
    pub fn matches(&self, main_index: i32, sub_index: i32, orientation: i32) -> bool {
        self.main_index == main_index
            && self.sub_index == sub_index
            && self.orientation == orientation
    }

    /// Smallest block y, clamped so it never exceeds zero
    pub fn min_block_y(&self) -> i32 {
        self.blocks.iter().map(|b| b.y as i32).fold(0, i32::min)
    }

    /// Largest block bottom edge (y + 32), clamped so it is never below zero
    pub fn max_block_bottom(&self) -> i32 {
        self.blocks.iter().map(|b| b.y as i32 + 32).fold(0, i32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_format_from_raw() {
        assert_eq!(BlockFormat::from_raw(1), BlockFormat::Isometric);
        assert_eq!(BlockFormat::from_raw(0), BlockFormat::Rle);
        assert_eq!(BlockFormat::from_raw(0x2005), BlockFormat::Rle);
    }

    #[test]
    fn test_block_extents() {
        let tile = Tile {
            blocks: vec![Block::rle(0, -10, vec![]), Block::rle(32, 8, vec![])],
            ..Default::default()
        };
        assert_eq!(tile.min_block_y(), -10);
        assert_eq!(tile.max_block_bottom(), 40);

        let empty = Tile::default();
        assert_eq!(empty.min_block_y(), 0);
        assert_eq!(empty.max_block_bottom(), 0);
    }
}
