//! Pixel decoding for DT1 isometric tile graphics
//!
//! Architecture:
//! 1. `tile` - Tile and block descriptors as loaded from a tile set
//! 2. `palette` - 256-entry color table shared by every tile of an act
//! 3. `decode` - Isometric and RLE block decoders writing RGBA pixels
//! 4. `geometry` - Surface size and draw offsets per layer class
//! 5. `image` - Owned RGBA surface produced by a decode pass

mod decode;
mod error;
pub mod geometry;
mod image;
mod palette;
pub mod tile;

pub use decode::{decode_blocks, decode_into, ISO_BLOCK_PIXELS, ISO_NBPIX, ISO_XJUMP};
pub use error::{DecodeError, Result};
pub use geometry::{
    floor_geometry, shadow_geometry, wall_geometry, TileGeometry, WallClass, WALL_SURFACE_WIDTH,
};
pub use image::{TileImage, MAX_SURFACE_EXTENT};
pub use palette::{Palette, Rgb, PALETTE_SIZE};
pub use tile::{orientation, Block, BlockFormat, MaterialFlags, Tile};
